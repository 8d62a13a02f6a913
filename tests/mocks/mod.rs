//! Shared fixtures for integration tests

#![allow(dead_code)]

use courier::mocks::{MockChainClient, MockProvider, MockWallet};
use courier::{EngineBuilder, ExecutionEngine, Network, Provider, Wallet};
use std::sync::Arc;

pub const WALLET: &str = "agent-wallet";
pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
pub const USDC_ETH: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
pub const WETH: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
pub const ROUTER: &str = "0x1231DEB6f5749EF6cE6943a275A1D3E7486F4EaE";

/// One SOL, in lamports
pub const ONE_SOL: u128 = 1_000_000_000;

/// Chain with a funded Solana wallet and the USDC mint known
pub fn funded_solana_chain() -> Arc<MockChainClient> {
	let chain = Arc::new(MockChainClient::new());
	chain.set_native_balance(Network::Solana, WALLET, ONE_SOL);
	chain.set_token(Network::Solana, USDC_MINT, 6, "USDC");
	chain
}

/// Chain with a funded Ethereum wallet and both token contracts known
pub fn funded_ethereum_chain() -> Arc<MockChainClient> {
	let chain = Arc::new(MockChainClient::new());
	// 1 ETH
	chain.set_native_balance(Network::Ethereum, WALLET, 1_000_000_000_000_000_000u128);
	chain.set_token(Network::Ethereum, USDC_ETH, 6, "USDC");
	chain.set_token(Network::Ethereum, WETH, 18, "WETH");
	chain
}

/// Build an engine over mocks with the given providers registered
pub fn engine_with(
	providers: Vec<Arc<dyn Provider>>,
	chain: Arc<MockChainClient>,
	wallet: Arc<MockWallet>,
) -> ExecutionEngine {
	let mut builder = EngineBuilder::new()
		.with_chain_client(chain)
		.with_wallet(wallet as Arc<dyn Wallet>)
		.without_sweeper();
	for provider in providers {
		builder = builder.with_provider(provider).expect("provider registers");
	}
	builder.build().expect("engine builds")
}

/// A working Solana swap provider at the standard mock rate
pub fn solana_provider(name: &str) -> Arc<MockProvider> {
	Arc::new(courier::mocks::solana_swapper(name))
}
