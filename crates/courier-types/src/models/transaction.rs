//! Unsigned transaction payloads and execution receipts

use crate::models::{BaseUnits, Network};
use serde::{Deserialize, Serialize};

/// The exact unsigned transaction body a wallet must sign
///
/// Providers build this once, at quote time; it is never re-derived
/// afterwards. `last_valid_block_height` is set on chains whose
/// transactions expire at a block height (Solana) and absent elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPayload {
	/// Destination: contract, program, or recipient
	pub to: String,
	/// Calldata or serialized instruction data, hex or base64 per chain
	pub data: String,
	/// Native value attached to the call, in base units
	pub value: BaseUnits,
	/// Gas limit hint, where the backend provides one
	#[serde(skip_serializing_if = "Option::is_none")]
	pub gas_limit: Option<u64>,
	/// Network the transaction must be submitted on
	pub network: Network,
	/// Expiry block height on block-height-expiring chains
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last_valid_block_height: Option<u64>,
}

impl TransactionPayload {
	pub fn new(to: impl Into<String>, data: impl Into<String>, value: BaseUnits, network: Network) -> Self {
		Self {
			to: to.into(),
			data: data.into(),
			value,
			gas_limit: None,
			network,
			last_valid_block_height: None,
		}
	}

	pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
		self.gas_limit = Some(gas_limit);
		self
	}

	pub fn with_last_valid_block_height(mut self, height: u64) -> Self {
		self.last_valid_block_height = Some(height);
		self
	}
}

/// Final receipt for a confirmed transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
	/// Transaction hash or signature
	pub hash: String,
	/// Network the transaction landed on
	pub network: Network,
	/// Block number or slot of inclusion, when the chain client reports it
	#[serde(skip_serializing_if = "Option::is_none")]
	pub block: Option<u64>,
	/// Whether the chain reports the transaction as successful
	pub confirmed: bool,
}
