//! Allowance gating for account-model chains
//!
//! The spend transaction is built before this stage runs, so the spender is
//! known: it is the contract the payload targets. When the live allowance
//! is short, an approval payload is produced for the engine to execute and
//! confirm before the spend. Approval and spend are never batched; a
//! failure between them leaves the allowance usable for a retried spend.

use courier_types::{
	EngineResult, Provider, Quote, Step, StructuredError, TransactionPayload,
};
use tracing::debug;

/// Resolves whether a quote needs an approval transaction first
#[derive(Debug, Default)]
pub struct AllowanceManager;

impl AllowanceManager {
	pub fn new() -> Self {
		Self
	}

	/// Return the approval payload a quote requires, or `None`
	///
	/// Skipped, not faked, on ledger-model chains, for native spends, and
	/// for direct token-contract calls (a plain `transfer` moves the
	/// owner's own balance and needs no allowance).
	pub async fn required_approval(
		&self,
		quote: &Quote,
		provider: &dyn Provider,
		owner: &str,
	) -> EngineResult<Option<TransactionPayload>> {
		if !quote.network.uses_allowances() || quote.from_token.is_native() {
			return Ok(None);
		}
		if quote.tx.to.eq_ignore_ascii_case(&quote.from_token.address) {
			return Ok(None);
		}

		let approvals = provider.approvals().ok_or_else(|| {
			StructuredError::new(
				Step::ProviderValidation,
				format!("provider {} cannot build approvals", provider.name()),
			)
			.with_detail("provider", provider.name())
		})?;

		let spender = quote.tx.to.as_str();
		let allowance = approvals
			.check_allowance(quote.network, &quote.from_token.address, owner, spender)
			.await?;

		let required = quote.from_amount.as_u128()?;
		if allowance.as_u128()? >= required {
			debug!(
				token = %quote.from_token.symbol,
				spender,
				"allowance sufficient, no approval needed"
			);
			return Ok(None);
		}

		debug!(
			token = %quote.from_token.symbol,
			spender,
			allowance = %allowance,
			required,
			"allowance short, building approval"
		);
		let approval = approvals
			.build_approve_transaction(
				quote.network,
				&quote.from_token.address,
				spender,
				&quote.from_amount,
				owner,
			)
			.await?;
		Ok(Some(approval))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_support::MockChain;
	use async_trait::async_trait;
	use courier_adapters::Erc20Approvals;
	use courier_types::{
		ApprovalSupport, BaseUnits, ChainClient, Network, PreparedRequest, ProviderResult,
		SwapMode, Token,
	};
	use std::sync::Arc;

	const OWNER: &str = "0xowner";
	const USDC: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
	const ROUTER: &str = "0x1231DEB6f5749EF6cE6943a275A1D3E7486F4EaE";

	#[derive(Debug)]
	struct ApprovingProvider {
		approvals: Erc20Approvals,
		networks: Vec<Network>,
	}

	#[async_trait]
	impl Provider for ApprovingProvider {
		fn name(&self) -> &str {
			"approving"
		}

		fn supported_networks(&self) -> &[Network] {
			&self.networks
		}

		async fn quote(
			&self,
			_request: &PreparedRequest,
			_wallet_address: &str,
		) -> ProviderResult<Quote> {
			unreachable!("allowance tests never quote")
		}

		fn approvals(&self) -> Option<&dyn ApprovalSupport> {
			Some(&self.approvals)
		}
	}

	fn provider(chain: Arc<MockChain>) -> ApprovingProvider {
		ApprovingProvider {
			approvals: Erc20Approvals::new(chain as Arc<dyn ChainClient>),
			networks: vec![Network::Ethereum],
		}
	}

	fn token_quote(network: Network, spend_to: &str) -> Quote {
		let usdc = Token::new(USDC, 6, "USDC", network);
		let eth = Token::native(network);
		let tx = TransactionPayload::new(spend_to, "0xdata", BaseUnits::zero(), network);
		Quote::new(
			"approving",
			network,
			usdc,
			eth,
			BaseUnits::new("5000000"),
			BaseUnits::new("1"),
			SwapMode::Input,
			50,
			tx,
		)
	}

	#[tokio::test]
	async fn test_short_allowance_builds_approval_for_spender() {
		let chain = Arc::new(MockChain::new());
		chain.set_allowance(Network::Ethereum, USDC, OWNER, ROUTER, 1_000_000u128);
		let provider = provider(Arc::clone(&chain));
		let quote = token_quote(Network::Ethereum, ROUTER);

		let approval = AllowanceManager::new()
			.required_approval(&quote, &provider, OWNER)
			.await
			.unwrap()
			.expect("approval required");
		// Approval targets the token, approving the spend target
		assert_eq!(approval.to, USDC);
		assert!(approval.data.starts_with("0x095ea7b3"));
		assert!(approval.value.is_zero());
	}

	#[tokio::test]
	async fn test_sufficient_allowance_skips_approval() {
		let chain = Arc::new(MockChain::new());
		chain.set_allowance(Network::Ethereum, USDC, OWNER, ROUTER, 5_000_000u128);
		let provider = provider(Arc::clone(&chain));
		let quote = token_quote(Network::Ethereum, ROUTER);

		let approval = AllowanceManager::new()
			.required_approval(&quote, &provider, OWNER)
			.await
			.unwrap();
		assert!(approval.is_none());
	}

	#[tokio::test]
	async fn test_ledger_model_chain_is_skipped() {
		let chain = Arc::new(MockChain::new());
		let provider = provider(Arc::clone(&chain));
		let quote = token_quote(Network::Solana, ROUTER);

		let approval = AllowanceManager::new()
			.required_approval(&quote, &provider, OWNER)
			.await
			.unwrap();
		assert!(approval.is_none());
	}

	#[tokio::test]
	async fn test_direct_token_transfer_is_skipped() {
		let chain = Arc::new(MockChain::new());
		let provider = provider(Arc::clone(&chain));
		// Spend targets the token contract itself: a plain transfer
		let quote = token_quote(Network::Ethereum, USDC);

		let approval = AllowanceManager::new()
			.required_approval(&quote, &provider, OWNER)
			.await
			.unwrap();
		assert!(approval.is_none());
	}

	#[tokio::test]
	async fn test_native_spend_is_skipped() {
		let chain = Arc::new(MockChain::new());
		let provider = provider(Arc::clone(&chain));
		let mut quote = token_quote(Network::Ethereum, ROUTER);
		quote.from_token = Token::native(Network::Ethereum);

		let approval = AllowanceManager::new()
			.required_approval(&quote, &provider, OWNER)
			.await
			.unwrap();
		assert!(approval.is_none());
	}
}
