//! Transaction submission and confirmation

use courier_types::{EngineResult, Network, TransactionPayload, TransactionReceipt, Wallet};
use std::sync::Arc;
use tracing::{debug, info};

/// Submits built payloads through the wallet and awaits confirmation
///
/// Execution never retries: a failed submission or confirmation surfaces
/// as a structured error for the caller to decide on.
pub struct TransactionExecutor {
	wallet: Arc<dyn Wallet>,
}

impl TransactionExecutor {
	pub fn new(wallet: Arc<dyn Wallet>) -> Self {
		Self { wallet }
	}

	/// Sign, broadcast, and wait for finality per chain semantics
	pub async fn execute(
		&self,
		network: Network,
		payload: &TransactionPayload,
	) -> EngineResult<TransactionReceipt> {
		let pending = self.wallet.sign_and_send(network, payload).await?;
		debug!(%network, hash = pending.hash(), "transaction submitted");

		let receipt = pending.wait().await?;
		info!(%network, hash = %receipt.hash, confirmed = receipt.confirmed, "transaction confirmed");
		Ok(receipt)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_support::{FailingWallet, MockWallet};
	use courier_types::{BaseUnits, Step};

	fn payload() -> TransactionPayload {
		TransactionPayload::new("0xto", "0x", BaseUnits::new("1"), Network::Base)
	}

	#[tokio::test]
	async fn test_execute_waits_for_receipt() {
		let wallet = Arc::new(MockWallet::new("0xabc"));
		let executor = TransactionExecutor::new(Arc::clone(&wallet) as Arc<dyn Wallet>);
		let receipt = executor.execute(Network::Base, &payload()).await.unwrap();
		assert!(receipt.confirmed);
		assert_eq!(wallet.submitted().len(), 1);
	}

	#[tokio::test]
	async fn test_submission_failure_classifies_as_execution() {
		let executor = TransactionExecutor::new(Arc::new(FailingWallet));
		let err = executor.execute(Network::Base, &payload()).await.unwrap_err();
		assert_eq!(err.step, Step::Execution);
	}
}
