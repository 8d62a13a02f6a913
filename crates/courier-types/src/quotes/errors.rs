//! Error types for quote operations

use thiserror::Error;

/// Quote lifecycle errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
	#[error("quote has expired: {quote_id}")]
	Expired { quote_id: String },

	#[error("quote not found: {quote_id}")]
	NotFound { quote_id: String },

	#[error("invalid amount: {reason}")]
	InvalidAmount { reason: String },

	#[error("quote processing failed: {reason}")]
	ProcessingFailed { reason: String },
}
