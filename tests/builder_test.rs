//! Engine builder wiring tests

mod mocks;

use courier::mocks::{MockChainClient, MockWallet};
use courier::{EngineBuilder, Network, QuoteRequest, Settings, Step, Wallet};
use mocks::*;
use std::sync::Arc;

#[test]
fn test_missing_collaborators_fail_initialization() {
	let err = EngineBuilder::new().build().unwrap_err();
	assert_eq!(err.step, Step::Initialization);

	let err = EngineBuilder::new()
		.with_chain_client(Arc::new(MockChainClient::new()))
		.build()
		.unwrap_err();
	assert_eq!(err.step, Step::Initialization);
}

#[test]
fn test_default_registry_covers_all_networks() {
	let engine = EngineBuilder::new()
		.with_chain_client(Arc::new(MockChainClient::new()))
		.with_wallet(Arc::new(MockWallet::new(WALLET)) as Arc<dyn Wallet>)
		.without_sweeper()
		.build()
		.unwrap();

	let names = engine.provider_names();
	assert_eq!(names, ["jupiter", "lifi", "lido", "transfer"]);

	let networks = engine.supported_networks();
	for network in Network::all() {
		assert!(networks.contains(network), "missing {}", network);
	}
}

#[test]
fn test_invalid_gas_buffer_rejected() {
	let mut settings = Settings::default();
	settings
		.gas_buffers
		.insert(Network::Solana, "not-a-number".to_string());

	let err = EngineBuilder::new()
		.with_settings(settings)
		.with_chain_client(Arc::new(MockChainClient::new()))
		.with_wallet(Arc::new(MockWallet::new(WALLET)) as Arc<dyn Wallet>)
		.build()
		.unwrap_err();
	assert_eq!(err.step, Step::Initialization);
}

#[tokio::test]
async fn test_gas_buffer_override_applies() {
	let mut settings = Settings::default();
	// Half a million lamports instead of the 300k default
	settings
		.gas_buffers
		.insert(Network::Solana, "500000".to_string());

	let chain = funded_solana_chain();
	let engine = EngineBuilder::new()
		.with_settings(settings)
		.with_chain_client(chain)
		.with_wallet(Arc::new(MockWallet::new(WALLET)) as Arc<dyn Wallet>)
		.without_sweeper()
		.with_provider(solana_provider("jupiter"))
		.unwrap()
		.build()
		.unwrap();

	let request = QuoteRequest::swap(Network::Solana, SOL_MINT, USDC_MINT, "1");
	let quote = engine.quote(&request).await.unwrap();
	assert_eq!(quote.from_amount.as_u128().unwrap(), ONE_SOL - 500_000);
}

#[tokio::test]
async fn test_custom_provider_replaces_stock_registry() {
	let chain = funded_solana_chain();
	let engine = EngineBuilder::new()
		.with_chain_client(chain)
		.with_wallet(Arc::new(MockWallet::new(WALLET)) as Arc<dyn Wallet>)
		.without_sweeper()
		.with_provider(solana_provider("custom"))
		.unwrap()
		.build()
		.unwrap();

	assert_eq!(engine.provider_names(), ["custom"]);
}
