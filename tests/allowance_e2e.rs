//! Allowance gating: approvals happen first, only when needed

mod mocks;

use courier::mocks::{MockChainClient, MockProvider, MockWallet};
use courier::{Network, Provider, QuoteRequest, SwapMode};
use mocks::*;
use std::sync::Arc;

/// An EVM token-spend provider whose transactions target the router
fn evm_provider(chain: Arc<MockChainClient>) -> Arc<MockProvider> {
	Arc::new(
		MockProvider::new("dex", vec![Network::Ethereum])
			.with_spend_target(ROUTER)
			.with_approvals(chain),
	)
}

fn usdc_to_weth_swap() -> QuoteRequest {
	QuoteRequest::swap(Network::Ethereum, USDC_ETH, WETH, "5").with_kind(SwapMode::Input)
}

#[tokio::test]
async fn test_short_allowance_approves_before_spending() {
	let chain = funded_ethereum_chain();
	chain.set_token_balance(Network::Ethereum, USDC_ETH, WALLET, 10_000_000u128);
	chain.set_allowance(Network::Ethereum, USDC_ETH, WALLET, ROUTER, 0u128);

	let wallet = Arc::new(MockWallet::new(WALLET));
	let engine = engine_with(
		vec![evm_provider(Arc::clone(&chain)) as Arc<dyn Provider>],
		chain,
		Arc::clone(&wallet),
	);

	let outcome = engine.run(&usdc_to_weth_swap()).await;
	assert!(outcome.is_success(), "outcome: {:?}", outcome);

	let submitted = wallet.submitted();
	assert_eq!(submitted.len(), 2, "approval then spend");
	// First submission approves the router on the token contract
	assert_eq!(submitted[0].to, USDC_ETH);
	assert!(submitted[0].data.starts_with("0x095ea7b3"));
	// Second submission is the spend itself
	assert_eq!(submitted[1].to, ROUTER);
}

#[tokio::test]
async fn test_sufficient_allowance_skips_approval() {
	let chain = funded_ethereum_chain();
	chain.set_token_balance(Network::Ethereum, USDC_ETH, WALLET, 10_000_000u128);
	// 5 USDC spend, 5 USDC already approved
	chain.set_allowance(Network::Ethereum, USDC_ETH, WALLET, ROUTER, 5_000_000u128);

	let wallet = Arc::new(MockWallet::new(WALLET));
	let engine = engine_with(
		vec![evm_provider(Arc::clone(&chain)) as Arc<dyn Provider>],
		chain,
		Arc::clone(&wallet),
	);

	let outcome = engine.run(&usdc_to_weth_swap()).await;
	assert!(outcome.is_success());

	let submitted = wallet.submitted();
	assert_eq!(submitted.len(), 1, "no approval was built");
	assert_eq!(submitted[0].to, ROUTER);
}

#[tokio::test]
async fn test_native_spend_never_approves() {
	let chain = funded_ethereum_chain();
	let wallet = Arc::new(MockWallet::new(WALLET));
	let engine = engine_with(
		vec![evm_provider(Arc::clone(&chain)) as Arc<dyn Provider>],
		chain,
		Arc::clone(&wallet),
	);

	let request = QuoteRequest::swap(
		Network::Ethereum,
		Network::Ethereum.native_sentinel(),
		USDC_ETH,
		"0.1",
	);
	let outcome = engine.run(&request).await;
	assert!(outcome.is_success());
	assert_eq!(wallet.submitted().len(), 1);
}

#[tokio::test]
async fn test_ledger_model_chain_never_approves() {
	let chain = funded_solana_chain();
	let wallet = Arc::new(MockWallet::new(WALLET));
	let engine = engine_with(
		vec![solana_provider("jupiter") as Arc<dyn Provider>],
		chain,
		Arc::clone(&wallet),
	);

	let request = QuoteRequest::swap(Network::Solana, SOL_MINT, USDC_MINT, "0.01");
	let outcome = engine.run(&request).await;
	assert!(outcome.is_success());
	assert_eq!(wallet.submitted().len(), 1);
}

#[tokio::test]
async fn test_insufficient_token_balance_blocks_before_approval() {
	let chain = funded_ethereum_chain();
	// One base unit short of the 5 USDC spend
	chain.set_token_balance(Network::Ethereum, USDC_ETH, WALLET, 4_999_999u128);
	chain.set_allowance(Network::Ethereum, USDC_ETH, WALLET, ROUTER, 0u128);

	let wallet = Arc::new(MockWallet::new(WALLET));
	let engine = engine_with(
		vec![evm_provider(Arc::clone(&chain)) as Arc<dyn Provider>],
		chain,
		Arc::clone(&wallet),
	);

	let outcome = engine.run(&usdc_to_weth_swap()).await;
	let json = serde_json::to_value(&outcome).unwrap();
	assert_eq!(json["status"], "error");
	assert_eq!(json["errorStep"], "TOOL_EXECUTION");
	let message = json["message"].as_str().unwrap();
	assert!(message.contains("USDC"));
	assert!(message.contains("4.999999"));
	// Nothing was submitted, not even an approval
	assert!(wallet.submitted().is_empty());
}
