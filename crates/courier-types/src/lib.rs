//! Courier Types
//!
//! Shared models and traits for the Courier execution engine. This crate
//! contains all domain models organized by business entity.

pub mod chain;
pub mod envelope;
pub mod errors;
pub mod models;
pub mod providers;
pub mod quotes;
pub mod wallet;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use models::{
	AmountError, BaseUnits, Network, Token, TokenMetadata, TransactionPayload, TransactionReceipt,
	UnknownNetwork, EVM_NATIVE_SENTINEL, SOLANA_NATIVE_SENTINEL,
};

pub use quotes::{Operation, Quote, QuoteError, QuoteRequest, QuoteResult, SwapMode};

pub use providers::{
	validate_capabilities, ApprovalSupport, PreparedRequest, Provider, ProviderEntry,
	ProviderError, ProviderResult,
};

pub use chain::{ChainClient, ChainError, ChainResult};
pub use wallet::{PendingTransaction, Wallet, WalletError, WalletResult};

pub use errors::{EngineResult, Step, StructuredError};

pub use envelope::{ErrorEnvelope, ExecutionOutcome, SuccessEnvelope};

// Classification boundaries: each collaborator error gains its taxonomy step
// exactly once, where it first crosses into the engine.

impl From<ChainError> for StructuredError {
	fn from(err: ChainError) -> Self {
		match &err {
			ChainError::TokenNotFound { network, address } => {
				StructuredError::new(Step::TokenNotFound, err.to_string())
					.with_detail("network", network.to_string())
					.with_detail("address", address.clone())
			},
			ChainError::InvalidAddress { address } => {
				StructuredError::new(Step::DataRetrieval, err.to_string())
					.with_detail("address", address.clone())
			},
			ChainError::Rpc { network, .. } => {
				StructuredError::new(Step::DataRetrieval, err.to_string())
					.with_detail("network", network.to_string())
			},
		}
	}
}

impl From<WalletError> for StructuredError {
	fn from(err: WalletError) -> Self {
		match &err {
			WalletError::Unavailable { network } => {
				StructuredError::new(Step::WalletAccess, err.to_string())
					.with_detail("network", network.to_string())
			},
			WalletError::Signing { .. } | WalletError::Submission { .. } => {
				StructuredError::new(Step::Execution, err.to_string())
			},
			WalletError::Confirmation { .. } => {
				StructuredError::new(Step::Execution, err.to_string())
					.with_detail("phase", "confirmation")
			},
		}
	}
}

impl From<ProviderError> for StructuredError {
	fn from(err: ProviderError) -> Self {
		match &err {
			ProviderError::NotFound { name } | ProviderError::AlreadyRegistered { name } => {
				StructuredError::new(Step::ProviderValidation, err.to_string())
					.with_detail("provider", name.clone())
			},
			ProviderError::MissingCapability { provider, capability } => {
				StructuredError::new(Step::ProviderValidation, err.to_string())
					.with_detail("provider", provider.clone())
					.with_detail("capability", capability.clone())
			},
			ProviderError::NetworkNotSupported { provider, network } => {
				StructuredError::new(Step::ProviderValidation, err.to_string())
					.with_detail("provider", provider.clone())
					.with_detail("network", network.to_string())
			},
			ProviderError::NoProviderForNetwork { network } => {
				StructuredError::new(Step::ProviderAvailability, err.to_string())
					.with_detail("network", network.to_string())
			},
			ProviderError::UnsupportedOperation { operation, provider } => {
				StructuredError::new(Step::ProviderValidation, err.to_string())
					.with_detail("operation", operation.clone())
					.with_detail("provider", provider.clone())
			},
			ProviderError::ChainRead(_) => {
				StructuredError::new(Step::DataRetrieval, err.to_string())
			},
			ProviderError::QuoteFailed { .. }
			| ProviderError::InvalidResponse { .. }
			| ProviderError::Http(_)
			| ProviderError::HttpStatus { .. }
			| ProviderError::Serialization(_) => {
				StructuredError::new(Step::PriceRetrieval, err.to_string())
					.with_detail("error", err.to_string())
			},
		}
	}
}

impl From<QuoteError> for StructuredError {
	fn from(err: QuoteError) -> Self {
		match &err {
			QuoteError::Expired { quote_id } => {
				StructuredError::new(Step::Execution, err.to_string())
					.with_detail("quoteId", quote_id.clone())
					.with_detail("expired", true)
			},
			QuoteError::NotFound { quote_id } => {
				StructuredError::new(Step::DataRetrieval, err.to_string())
					.with_detail("quoteId", quote_id.clone())
			},
			QuoteError::InvalidAmount { .. } | QuoteError::ProcessingFailed { .. } => {
				StructuredError::new(Step::PriceRetrieval, err.to_string())
			},
		}
	}
}

impl From<AmountError> for StructuredError {
	fn from(err: AmountError) -> Self {
		StructuredError::new(Step::PriceRetrieval, err.to_string())
	}
}
