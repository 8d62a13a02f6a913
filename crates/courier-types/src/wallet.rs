//! Wallet collaborator contract
//!
//! Key custody and signing internals are outside the engine; this trait is
//! the boundary. A submission yields a [`PendingTransaction`] whose
//! `wait()` blocks until inclusion/finality per chain semantics, with the
//! underlying client's own timeout treated as opaque.

use crate::models::{Network, TransactionPayload, TransactionReceipt};
use async_trait::async_trait;
use thiserror::Error;

/// Errors from wallet access and submission
#[derive(Error, Debug)]
pub enum WalletError {
	#[error("no wallet available for network {network}")]
	Unavailable { network: Network },

	#[error("signing failed: {reason}")]
	Signing { reason: String },

	#[error("submission failed: {reason}")]
	Submission { reason: String },

	#[error("confirmation failed: {reason}")]
	Confirmation { reason: String },
}

/// Result type for wallet operations
pub type WalletResult<T> = Result<T, WalletError>;

/// A transaction accepted by the network but not yet final
#[async_trait]
pub trait PendingTransaction: Send + Sync {
	/// Transaction hash or signature assigned at submission
	fn hash(&self) -> &str;

	/// Block until inclusion/finality per chain semantics
	async fn wait(&self) -> WalletResult<TransactionReceipt>;
}

/// Signing and submission boundary
#[async_trait]
pub trait Wallet: Send + Sync {
	/// The wallet's address on `network`
	fn address(&self, network: Network) -> WalletResult<String>;

	/// Sign and broadcast an unsigned payload
	async fn sign_and_send(
		&self,
		network: Network,
		payload: &TransactionPayload,
	) -> WalletResult<Box<dyn PendingTransaction>>;
}
