//! Error types for provider operations

use crate::models::Network;
use thiserror::Error;

/// Provider operation errors
#[derive(Error, Debug)]
pub enum ProviderError {
	#[error("provider not found: {name}")]
	NotFound { name: String },

	#[error("provider already registered: {name}")]
	AlreadyRegistered { name: String },

	#[error("provider {provider} does not support network {network}")]
	NetworkNotSupported { provider: String, network: Network },

	#[error("no provider supports network {network}")]
	NoProviderForNetwork { network: Network },

	#[error("unsupported operation: {operation} for provider {provider}")]
	UnsupportedOperation { operation: String, provider: String },

	#[error("provider {provider} lacks required capability group: {capability}")]
	MissingCapability { provider: String, capability: String },

	#[error("quote request failed: {reason}")]
	QuoteFailed { reason: String },

	#[error("invalid response from backend: {reason}")]
	InvalidResponse { reason: String },

	#[error("HTTP request failed: {0}")]
	Http(String),

	#[error("chain read failed: {0}")]
	ChainRead(String),

	#[error("backend returned HTTP {status}: {reason}")]
	HttpStatus { status: u16, reason: String },

	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;
