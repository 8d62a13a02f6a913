//! Structured pipeline errors
//!
//! Every failure in the engine resolves to a [`StructuredError`]: a closed
//! pipeline-step tag, a human-readable message, and machine-readable
//! details. Deeper layers classify first; outer layers pass a
//! `StructuredError` through unchanged and only wrap errors that carry no
//! step yet.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Pipeline stage at which an error was classified
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Step {
	NetworkValidation,
	WalletAccess,
	ProviderValidation,
	ProviderAvailability,
	TokenNotFound,
	PriceRetrieval,
	ToolExecution,
	DataRetrieval,
	Initialization,
	Execution,
	Unknown,
}

impl Step {
	/// The wire name used in caller-facing envelopes
	pub fn as_str(&self) -> &'static str {
		match self {
			Step::NetworkValidation => "NETWORK_VALIDATION",
			Step::WalletAccess => "WALLET_ACCESS",
			Step::ProviderValidation => "PROVIDER_VALIDATION",
			Step::ProviderAvailability => "PROVIDER_AVAILABILITY",
			Step::TokenNotFound => "TOKEN_NOT_FOUND",
			Step::PriceRetrieval => "PRICE_RETRIEVAL",
			Step::ToolExecution => "TOOL_EXECUTION",
			Step::DataRetrieval => "DATA_RETRIEVAL",
			Step::Initialization => "INITIALIZATION",
			Step::Execution => "EXECUTION",
			Step::Unknown => "UNKNOWN",
		}
	}
}

impl std::fmt::Display for Step {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// An error tagged with the pipeline step that produced it
///
/// Never mutated after creation; callers re-throw it unchanged so the
/// deepest, most specific classification survives to the envelope.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
#[error("[{step}] {message}")]
pub struct StructuredError {
	pub step: Step,
	pub message: String,
	#[serde(default, skip_serializing_if = "Map::is_empty")]
	pub details: Map<String, Value>,
}

impl StructuredError {
	pub fn new(step: Step, message: impl Into<String>) -> Self {
		Self {
			step,
			message: message.into(),
			details: Map::new(),
		}
	}

	/// Attach a machine-readable detail
	pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.details.insert(key.into(), value.into());
		self
	}

	/// Wrap an unclassified error, preserving its message in `details.error`
	pub fn from_unclassified(step: Step, source: &dyn std::error::Error) -> Self {
		Self::new(step, source.to_string()).with_detail("error", source.to_string())
	}
}

/// Result alias used across the engine
pub type EngineResult<T> = Result<T, StructuredError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_step_wire_names() {
		assert_eq!(Step::NetworkValidation.as_str(), "NETWORK_VALIDATION");
		assert_eq!(
			serde_json::to_string(&Step::PriceRetrieval).unwrap(),
			"\"PRICE_RETRIEVAL\""
		);
	}

	#[test]
	fn test_details_round_trip() {
		let err = StructuredError::new(Step::TokenNotFound, "no such token")
			.with_detail("address", "0xdead")
			.with_detail("network", "base");
		let json = serde_json::to_value(&err).unwrap();
		assert_eq!(json["step"], "TOKEN_NOT_FOUND");
		assert_eq!(json["details"]["address"], "0xdead");

		let back: StructuredError = serde_json::from_value(json).unwrap();
		assert_eq!(back, err);
	}

	#[test]
	fn test_display_carries_step() {
		let err = StructuredError::new(Step::Execution, "transaction reverted");
		assert_eq!(err.to_string(), "[EXECUTION] transaction reverted");
	}
}
