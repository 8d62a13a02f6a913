//! Provider-facing quote request
//!
//! The engine resolves tokens and applies the gas-buffer adjustment before
//! a provider sees the request, so adapters deal only in resolved tokens
//! and integer base units.

use crate::models::{BaseUnits, Network, Token};
use crate::quotes::{Operation, SwapMode};
use serde::{Deserialize, Serialize};

/// A quote request after token resolution and amount adjustment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreparedRequest {
	pub operation: Operation,
	pub network: Network,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub to_network: Option<Network>,
	pub from_token: Token,
	/// Absent for transfers; the spend token is also the receive token
	#[serde(skip_serializing_if = "Option::is_none")]
	pub to_token: Option<Token>,
	/// Base-unit amount on the side fixed by `kind`, already adjusted for
	/// the gas reserve when the spend is native
	pub amount: BaseUnits,
	pub kind: SwapMode,
	pub slippage_bps: u32,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub recipient: Option<String>,
}

impl PreparedRequest {
	/// The token the quote delivers: `to_token` when present, otherwise the
	/// spend token itself (transfers)
	pub fn receive_token(&self) -> &Token {
		self.to_token.as_ref().unwrap_or(&self.from_token)
	}
}
