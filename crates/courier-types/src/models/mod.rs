//! Shared domain models

pub mod amount;
pub mod network;
pub mod token;
pub mod transaction;

pub use amount::{AmountError, BaseUnits};
pub use network::{Network, UnknownNetwork, EVM_NATIVE_SENTINEL, SOLANA_NATIVE_SENTINEL};
pub use token::{Token, TokenMetadata};
pub use transaction::{TransactionPayload, TransactionReceipt};
