//! Blockchain network models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel address callers use to mean "the native currency" on EVM chains.
///
/// This is the convention shared by most aggregator APIs rather than a real
/// contract address.
pub const EVM_NATIVE_SENTINEL: &str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";

/// Wrapped SOL mint, doubling as the native sentinel on Solana.
pub const SOLANA_NATIVE_SENTINEL: &str = "So11111111111111111111111111111111111111112";

/// Supported blockchain network
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Network {
	Ethereum,
	Polygon,
	Base,
	Arbitrum,
	Optimism,
	Bsc,
	Solana,
}

impl Network {
	/// All networks the engine knows about, used to build caller-facing schemas
	pub fn all() -> &'static [Network] {
		&[
			Network::Ethereum,
			Network::Polygon,
			Network::Base,
			Network::Arbitrum,
			Network::Optimism,
			Network::Bsc,
			Network::Solana,
		]
	}

	/// Chain ID as used by wallets and RPC endpoints
	///
	/// Solana has no EVM chain ID; the conventional 101 (mainnet-beta) is
	/// reported for diagnostics only.
	pub fn chain_id(&self) -> u64 {
		match self {
			Network::Ethereum => 1,
			Network::Polygon => 137,
			Network::Base => 8453,
			Network::Arbitrum => 42161,
			Network::Optimism => 10,
			Network::Bsc => 56,
			Network::Solana => 101,
		}
	}

	/// Symbol of the native currency used to pay for gas
	pub fn native_symbol(&self) -> &'static str {
		match self {
			Network::Ethereum | Network::Base | Network::Arbitrum | Network::Optimism => "ETH",
			Network::Polygon => "POL",
			Network::Bsc => "BNB",
			Network::Solana => "SOL",
		}
	}

	/// Decimals of the native currency
	pub fn native_decimals(&self) -> u8 {
		match self {
			Network::Solana => 9,
			_ => 18,
		}
	}

	/// Address callers pass to spend the native currency
	pub fn native_sentinel(&self) -> &'static str {
		match self {
			Network::Solana => SOLANA_NATIVE_SENTINEL,
			_ => EVM_NATIVE_SENTINEL,
		}
	}

	/// Whether `address` denotes the native currency on this network
	pub fn is_native(&self, address: &str) -> bool {
		address.eq_ignore_ascii_case(self.native_sentinel())
	}

	/// Account-model chains gate token spends behind an allowance; ledger-model
	/// chains (Solana) do not and the approval stage must be skipped there.
	pub fn uses_allowances(&self) -> bool {
		!matches!(self, Network::Solana)
	}

	/// Chains whose transactions expire at a block height rather than a clock
	pub fn expires_by_block_height(&self) -> bool {
		matches!(self, Network::Solana)
	}
}

impl fmt::Display for Network {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Network::Ethereum => "ethereum",
			Network::Polygon => "polygon",
			Network::Base => "base",
			Network::Arbitrum => "arbitrum",
			Network::Optimism => "optimism",
			Network::Bsc => "bsc",
			Network::Solana => "solana",
		};
		write!(f, "{}", name)
	}
}

impl FromStr for Network {
	type Err = UnknownNetwork;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"ethereum" | "mainnet" => Ok(Network::Ethereum),
			"polygon" | "matic" => Ok(Network::Polygon),
			"base" => Ok(Network::Base),
			"arbitrum" => Ok(Network::Arbitrum),
			"optimism" => Ok(Network::Optimism),
			"bsc" | "binance" => Ok(Network::Bsc),
			"solana" => Ok(Network::Solana),
			other => Err(UnknownNetwork(other.to_string())),
		}
	}
}

/// Error returned when parsing an unrecognized network name
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown network: {0}")]
pub struct UnknownNetwork(pub String);
