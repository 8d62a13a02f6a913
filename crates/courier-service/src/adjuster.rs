//! Gas-buffer-aware amount adjustment
//!
//! A caller asking to spend their entire native balance would otherwise
//! consume the gas reserve as well; the adjuster shrinks such requests so
//! the buffer survives the debit. It never rejects on insufficient balance
//! alone; that verdict belongs to the balance validator.

use courier_types::{BaseUnits, ChainClient, EngineResult, Network};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Per-network native gas reserves, in base units
///
/// Defaults hold back 0.0003 of the native unit; deployments override per
/// network through configuration.
#[derive(Debug, Clone, Default)]
pub struct GasBuffers {
	overrides: HashMap<Network, BaseUnits>,
}

impl GasBuffers {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_override(mut self, network: Network, buffer: BaseUnits) -> Self {
		self.overrides.insert(network, buffer);
		self
	}

	/// The reserve for `network`
	pub fn buffer_for(&self, network: Network) -> BaseUnits {
		if let Some(buffer) = self.overrides.get(&network) {
			return buffer.clone();
		}
		match network {
			// 0.0003 SOL
			Network::Solana => BaseUnits::new("300000"),
			// 0.0003 of an 18-decimal native unit
			_ => BaseUnits::new("300000000000000"),
		}
	}
}

/// Shrinks native spends so the gas buffer survives
pub struct AmountAdjuster {
	chain: Arc<dyn ChainClient>,
	buffers: GasBuffers,
}

impl AmountAdjuster {
	pub fn new(chain: Arc<dyn ChainClient>, buffers: GasBuffers) -> Self {
		Self { chain, buffers }
	}

	/// Adjust `requested` for a spend of `token_address` by `wallet_address`
	///
	/// Non-native tokens pass through unchanged. For the native currency the
	/// live balance is read once; if the request would leave less than the
	/// buffer, the returned amount is `max(0, balance - buffer)`. A zero
	/// result is legal here and must fail balance validation downstream
	/// rather than execute silently.
	pub async fn adjust(
		&self,
		token_address: &str,
		requested: &BaseUnits,
		wallet_address: &str,
		network: Network,
	) -> EngineResult<BaseUnits> {
		if !network.is_native(token_address) {
			return Ok(requested.clone());
		}

		let balance = self
			.chain
			.native_balance(network, wallet_address)
			.await?
			.as_u128()?;
		let buffer = self.buffers.buffer_for(network).as_u128()?;
		let requested_units = requested.as_u128()?;

		if requested_units.saturating_add(buffer) <= balance {
			return Ok(requested.clone());
		}

		let adjusted = balance.saturating_sub(buffer);
		debug!(
			%network,
			requested = requested_units,
			balance,
			buffer,
			adjusted,
			"reduced native spend to preserve gas buffer"
		);
		Ok(BaseUnits::from_u128(adjusted))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_support::MockChain;

	const WALLET: &str = "walletAddr";

	fn adjuster_with_balance(balance: u128) -> AmountAdjuster {
		let chain = Arc::new(MockChain::new());
		chain.set_native_balance(Network::Solana, WALLET, BaseUnits::from_u128(balance));
		AmountAdjuster::new(chain as Arc<dyn ChainClient>, GasBuffers::new())
	}

	async fn adjust(adjuster: &AmountAdjuster, requested: u128) -> u128 {
		adjuster
			.adjust(
				Network::Solana.native_sentinel(),
				&BaseUnits::from_u128(requested),
				WALLET,
				Network::Solana,
			)
			.await
			.unwrap()
			.as_u128()
			.unwrap()
	}

	#[tokio::test]
	async fn test_non_native_passes_through() {
		let adjuster = adjuster_with_balance(0);
		let result = adjuster
			.adjust("EPjF", &BaseUnits::new("123456"), WALLET, Network::Solana)
			.await
			.unwrap();
		assert_eq!(result, BaseUnits::new("123456"));
	}

	#[tokio::test]
	async fn test_request_within_budget_is_unchanged() {
		// balance 10_000_000, buffer 300_000: anything up to 9_700_000 fits
		let adjuster = adjuster_with_balance(10_000_000);
		assert_eq!(adjust(&adjuster, 9_700_000).await, 9_700_000);
		assert_eq!(adjust(&adjuster, 1).await, 1);
	}

	#[tokio::test]
	async fn test_full_balance_request_is_reduced() {
		let adjuster = adjuster_with_balance(10_000_000);
		// Asking for everything leaves the buffer behind
		assert_eq!(adjust(&adjuster, 10_000_000).await, 9_700_000);
		// One unit over the budget boundary also clamps
		assert_eq!(adjust(&adjuster, 9_700_001).await, 9_700_000);
	}

	#[tokio::test]
	async fn test_buffer_exceeding_balance_yields_zero() {
		let adjuster = adjuster_with_balance(200_000);
		assert_eq!(adjust(&adjuster, 100_000).await, 0);
	}

	#[tokio::test]
	async fn test_adjustment_is_idempotent() {
		let adjuster = adjuster_with_balance(10_000_000);
		let once = adjust(&adjuster, 10_000_000).await;
		let twice = adjust(&adjuster, once).await;
		assert_eq!(once, twice);
	}
}
