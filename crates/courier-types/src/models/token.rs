//! Token models

use crate::models::Network;
use serde::{Deserialize, Serialize};

/// A resolved token on a specific network
///
/// Immutable once resolved; the token resolver caches these by
/// `(network, address)` for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Token {
	/// Contract address, mint address, or the network's native sentinel
	pub address: String,
	/// Base-unit decimals
	pub decimals: u8,
	/// Ticker symbol (e.g. "USDC")
	pub symbol: String,
	/// Network the token lives on
	pub network: Network,
}

impl Token {
	pub fn new(
		address: impl Into<String>,
		decimals: u8,
		symbol: impl Into<String>,
		network: Network,
	) -> Self {
		Self {
			address: address.into(),
			decimals,
			symbol: symbol.into(),
			network,
		}
	}

	/// The native currency descriptor for a network
	pub fn native(network: Network) -> Self {
		Self {
			address: network.native_sentinel().to_string(),
			decimals: network.native_decimals(),
			symbol: network.native_symbol().to_string(),
			network,
		}
	}

	/// Whether this token is the network's native currency
	pub fn is_native(&self) -> bool {
		self.network.is_native(&self.address)
	}
}

/// Raw on-chain metadata as returned by a chain client, before resolution
/// into a [`Token`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenMetadata {
	pub decimals: u8,
	pub symbol: String,
}
