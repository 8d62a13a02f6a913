//! Quote request models

use crate::models::Network;
use serde::{Deserialize, Serialize};

/// Which side of the conversion the caller fixed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SwapMode {
	/// `amount` is the amount spent
	Input,
	/// `amount` is the amount received
	Output,
}

/// The operation a caller wants quoted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
	Swap,
	Bridge,
	Stake,
	Unstake,
	Transfer,
}

impl std::fmt::Display for Operation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Operation::Swap => "swap",
			Operation::Bridge => "bridge",
			Operation::Stake => "stake",
			Operation::Unstake => "unstake",
			Operation::Transfer => "transfer",
		};
		write!(f, "{}", name)
	}
}

/// A structured quote request as produced by the tool-calling layer
///
/// Amounts arrive as human decimal strings ("0.01"); providers convert them
/// to base units against the resolved token's decimals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
	/// What the caller wants done
	pub operation: Operation,

	/// Network the spend happens on
	pub network: Network,

	/// Destination network for bridges; absent elsewhere
	#[serde(skip_serializing_if = "Option::is_none")]
	pub to_network: Option<Network>,

	/// Token being spent (address or native sentinel)
	pub from_token: String,

	/// Token being received; absent for transfers and implied for staking
	#[serde(skip_serializing_if = "Option::is_none")]
	pub to_token: Option<String>,

	/// Human decimal amount on the side fixed by `kind`
	pub amount: String,

	/// Which side `amount` fixes
	pub kind: SwapMode,

	/// Slippage tolerance in basis points; providers default when absent
	#[serde(skip_serializing_if = "Option::is_none")]
	pub slippage_bps: Option<u32>,

	/// Recipient for transfers; the wallet itself when absent
	#[serde(skip_serializing_if = "Option::is_none")]
	pub recipient: Option<String>,

	/// Explicit provider selection; registration order decides when absent
	#[serde(skip_serializing_if = "Option::is_none")]
	pub provider: Option<String>,
}

impl QuoteRequest {
	/// A plain same-network swap with the input side fixed
	pub fn swap(
		network: Network,
		from_token: impl Into<String>,
		to_token: impl Into<String>,
		amount: impl Into<String>,
	) -> Self {
		Self {
			operation: Operation::Swap,
			network,
			to_network: None,
			from_token: from_token.into(),
			to_token: Some(to_token.into()),
			amount: amount.into(),
			kind: SwapMode::Input,
			slippage_bps: None,
			recipient: None,
			provider: None,
		}
	}

	/// A native or token transfer to `recipient`
	pub fn transfer(
		network: Network,
		token: impl Into<String>,
		amount: impl Into<String>,
		recipient: impl Into<String>,
	) -> Self {
		Self {
			operation: Operation::Transfer,
			network,
			to_network: None,
			from_token: token.into(),
			to_token: None,
			amount: amount.into(),
			kind: SwapMode::Input,
			slippage_bps: None,
			recipient: Some(recipient.into()),
			provider: None,
		}
	}

	/// A cross-chain bridge of `from_token` to `to_network`
	pub fn bridge(
		network: Network,
		to_network: Network,
		from_token: impl Into<String>,
		to_token: impl Into<String>,
		amount: impl Into<String>,
	) -> Self {
		Self {
			operation: Operation::Bridge,
			network,
			to_network: Some(to_network),
			from_token: from_token.into(),
			to_token: Some(to_token.into()),
			amount: amount.into(),
			kind: SwapMode::Input,
			slippage_bps: None,
			recipient: None,
			provider: None,
		}
	}

	pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
		self.provider = Some(provider.into());
		self
	}

	pub fn with_slippage_bps(mut self, bps: u32) -> Self {
		self.slippage_bps = Some(bps);
		self
	}

	pub fn with_kind(mut self, kind: SwapMode) -> Self {
		self.kind = kind;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_request_serializes_camel_case() {
		let request = QuoteRequest::swap(
			Network::Solana,
			"So11111111111111111111111111111111111111112",
			"EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
			"0.01",
		);
		let json = serde_json::to_value(&request).unwrap();
		assert_eq!(json["operation"], "swap");
		assert_eq!(json["fromToken"], "So11111111111111111111111111111111111111112");
		assert_eq!(json["kind"], "input");
		assert!(json.get("toNetwork").is_none());
	}

	#[test]
	fn test_bridge_request_carries_destination() {
		let request = QuoteRequest::bridge(
			Network::Ethereum,
			Network::Base,
			"0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE",
			"0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE",
			"0.5",
		);
		assert_eq!(request.to_network, Some(Network::Base));
	}
}
