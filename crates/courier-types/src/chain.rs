//! Chain client collaborator contract
//!
//! Live chain reads are external collaborators: the engine only consumes
//! balances, token metadata and allowances through this trait and never
//! caches them (the token resolver caches resolved metadata, which is
//! immutable, not balances).

use crate::models::{BaseUnits, Network, TokenMetadata};
use async_trait::async_trait;
use thiserror::Error;

/// Errors from chain RPC reads
#[derive(Error, Debug)]
pub enum ChainError {
	#[error("RPC request failed on {network}: {reason}")]
	Rpc { network: Network, reason: String },

	#[error("token not found on {network}: {address}")]
	TokenNotFound { network: Network, address: String },

	#[error("invalid address: {address}")]
	InvalidAddress { address: String },
}

/// Result type for chain reads
pub type ChainResult<T> = Result<T, ChainError>;

/// Read-only access to live chain state
#[async_trait]
pub trait ChainClient: Send + Sync {
	/// Native currency balance of `owner`, in base units
	async fn native_balance(&self, network: Network, owner: &str) -> ChainResult<BaseUnits>;

	/// Token balance of `owner`, in base units
	async fn token_balance(
		&self,
		network: Network,
		token: &str,
		owner: &str,
	) -> ChainResult<BaseUnits>;

	/// On-chain metadata for a token (decimals, symbol)
	async fn token_metadata(&self, network: Network, token: &str) -> ChainResult<TokenMetadata>;

	/// Allowance granted by `owner` to `spender` for `token`
	///
	/// Only meaningful on account-model networks; implementations may
	/// reject the call elsewhere.
	async fn allowance(
		&self,
		network: Network,
		token: &str,
		owner: &str,
		spender: &str,
	) -> ChainResult<BaseUnits>;
}
