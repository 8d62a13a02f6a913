//! Error classification and caller-facing presentation
//!
//! The taxonomy itself lives on [`StructuredError`]; this layer adds the
//! per-step remediation suggestion and produces the terminal error
//! envelope. Classification is pass-through for errors already carrying a
//! step; only step-less exceptions get wrapped here, so the deepest
//! classification always survives.

use courier_adapters::ProviderRegistry;
use courier_types::{ExecutionOutcome, Step, StructuredError};
use std::sync::Arc;

/// Produces suggestions and envelopes for terminal errors
pub struct ErrorClassifier {
	registry: Arc<ProviderRegistry>,
}

impl ErrorClassifier {
	pub fn new(registry: Arc<ProviderRegistry>) -> Self {
		Self { registry }
	}

	/// Pass a structured error through unchanged
	///
	/// Outer layers must never re-tag an error that already carries a step.
	pub fn classify(&self, error: StructuredError) -> StructuredError {
		error
	}

	/// Wrap an exception that carries no step yet
	pub fn classify_unknown(&self, source: &dyn std::error::Error) -> StructuredError {
		StructuredError::from_unclassified(Step::Unknown, source)
	}

	/// Human-facing remediation for a classified error
	///
	/// Presentation logic layered on top of the taxonomy, never inside it.
	pub fn suggestion(&self, error: &StructuredError) -> String {
		match error.step {
			Step::NetworkValidation => format!(
				"Use one of the supported networks: {}",
				self.network_names().join(", ")
			),
			Step::WalletAccess => {
				"Configure a wallet for this network before retrying".to_string()
			},
			Step::ProviderValidation => format!(
				"Choose one of the registered providers: {}",
				self.registry.list_names().join(", ")
			),
			Step::ProviderAvailability => format!(
				"No provider could serve this request right now; retry later or pick one of: {}",
				self.registry.list_names().join(", ")
			),
			Step::TokenNotFound => {
				"Verify the token address exists on the requested network".to_string()
			},
			Step::PriceRetrieval => {
				"The backend could not price this request; adjust the amount or try another provider"
					.to_string()
			},
			Step::ToolExecution => {
				"Review the reported requirement and adjust the request before retrying".to_string()
			},
			Step::DataRetrieval => "A chain read failed; retry shortly".to_string(),
			Step::Initialization => {
				"Engine initialization failed; check the configuration and restart".to_string()
			},
			Step::Execution => {
				if error.details.get("expired").and_then(|v| v.as_bool()) == Some(true) {
					"The quote expired; request a fresh quote and execute it promptly".to_string()
				} else {
					"The transaction was not confirmed; request a fresh quote before retrying"
						.to_string()
				}
			},
			Step::Unknown => {
				"An unexpected error occurred; retry, and report the details if it persists"
					.to_string()
			},
		}
	}

	/// The terminal error envelope for a structured error
	pub fn envelope(&self, error: StructuredError) -> ExecutionOutcome {
		let suggestion = self.suggestion(&error);
		ExecutionOutcome::error(error, suggestion)
	}

	fn network_names(&self) -> Vec<String> {
		self.registry
			.supported_networks()
			.iter()
			.map(|n| n.to_string())
			.collect()
	}
}
