//! Caller-facing result envelopes
//!
//! These two shapes are the stable boundary the tool-calling layer and UI
//! consume. Every terminal outcome resolves to one of them; raw errors
//! never cross this boundary.

use crate::errors::{Step, StructuredError};
use crate::models::{BaseUnits, Network, Token};
use crate::quotes::{Quote, SwapMode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Success envelope returned to the tool/agent layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuccessEnvelope {
	pub provider: String,
	pub from_token: Token,
	pub to_token: Token,
	pub from_amount: BaseUnits,
	pub to_amount: BaseUnits,
	pub transaction_hash: String,
	pub network: Network,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub price_impact: Option<f64>,
	#[serde(rename = "type")]
	pub kind: SwapMode,
}

/// Error envelope returned to the tool/agent layer
///
/// `suggestion` is always non-empty; `details` carries diagnostics that
/// must never be surfaced verbatim to end users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
	pub error_step: Step,
	pub message: String,
	pub details: Map<String, Value>,
	pub suggestion: String,
}

/// Terminal outcome of one engine operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ExecutionOutcome {
	Success(SuccessEnvelope),
	Error(ErrorEnvelope),
}

impl ExecutionOutcome {
	/// Build the success envelope from a consumed quote and its receipt hash
	pub fn success(quote: &Quote, transaction_hash: impl Into<String>) -> Self {
		ExecutionOutcome::Success(SuccessEnvelope {
			provider: quote.provider.clone(),
			from_token: quote.from_token.clone(),
			to_token: quote.to_token.clone(),
			from_amount: quote.from_amount.clone(),
			to_amount: quote.to_amount.clone(),
			transaction_hash: transaction_hash.into(),
			network: quote.network,
			price_impact: quote.price_impact,
			kind: quote.kind,
		})
	}

	/// Build the error envelope from a structured error and its suggestion
	pub fn error(error: StructuredError, suggestion: impl Into<String>) -> Self {
		ExecutionOutcome::Error(ErrorEnvelope {
			error_step: error.step,
			message: error.message,
			details: error.details,
			suggestion: suggestion.into(),
		})
	}

	pub fn is_success(&self) -> bool {
		matches!(self, ExecutionOutcome::Success(_))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_envelope_shape() {
		let err = StructuredError::new(Step::ProviderAvailability, "all providers failed")
			.with_detail("network", "solana");
		let outcome = ExecutionOutcome::error(err, "Try again or select another provider");
		let json = serde_json::to_value(&outcome).unwrap();
		assert_eq!(json["status"], "error");
		assert_eq!(json["errorStep"], "PROVIDER_AVAILABILITY");
		assert_eq!(json["details"]["network"], "solana");
		assert!(!json["suggestion"].as_str().unwrap().is_empty());
	}

	#[test]
	fn test_success_envelope_uses_type_key() {
		use crate::models::{Network, Token, TransactionPayload};
		let sol = Token::native(Network::Solana);
		let usdc = Token::new("EPjF", 6, "USDC", Network::Solana);
		let tx = TransactionPayload::new("Jup", "AQID", BaseUnits::zero(), Network::Solana);
		let quote = Quote::new(
			"jupiter",
			Network::Solana,
			sol,
			usdc,
			BaseUnits::new("10000000"),
			BaseUnits::new("1523000"),
			SwapMode::Input,
			50,
			tx,
		);
		let json = serde_json::to_value(ExecutionOutcome::success(&quote, "5sig")).unwrap();
		assert_eq!(json["status"], "success");
		assert_eq!(json["type"], "input");
		assert_eq!(json["transactionHash"], "5sig");
		assert_eq!(json["fromToken"]["symbol"], "SOL");
	}
}
