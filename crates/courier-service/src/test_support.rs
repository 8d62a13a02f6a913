//! Shared mock collaborators for unit tests

use async_trait::async_trait;
use courier_types::{
	BaseUnits, ChainClient, ChainError, ChainResult, Network, PendingTransaction, TokenMetadata,
	TransactionPayload, TransactionReceipt, Wallet, WalletError, WalletResult,
};
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Scriptable chain state with call tracking
#[derive(Default)]
pub struct MockChain {
	pub native_balances: DashMap<(Network, String), BaseUnits>,
	pub token_balances: DashMap<(Network, String, String), BaseUnits>,
	pub allowances: DashMap<(Network, String, String, String), BaseUnits>,
	pub metadata: DashMap<(Network, String), TokenMetadata>,
	pub metadata_calls: AtomicUsize,
}

impl MockChain {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set_native_balance(&self, network: Network, owner: &str, balance: impl Into<BaseUnits>) {
		self.native_balances
			.insert((network, owner.to_string()), balance.into());
	}

	pub fn set_token_balance(
		&self,
		network: Network,
		token: &str,
		owner: &str,
		balance: impl Into<BaseUnits>,
	) {
		self.token_balances
			.insert((network, token.to_string(), owner.to_string()), balance.into());
	}

	pub fn set_allowance(
		&self,
		network: Network,
		token: &str,
		owner: &str,
		spender: &str,
		amount: impl Into<BaseUnits>,
	) {
		self.allowances.insert(
			(network, token.to_string(), owner.to_string(), spender.to_string()),
			amount.into(),
		);
	}

	pub fn set_metadata(&self, network: Network, token: &str, decimals: u8, symbol: &str) {
		self.metadata.insert(
			(network, token.to_string()),
			TokenMetadata {
				decimals,
				symbol: symbol.to_string(),
			},
		);
	}
}

#[async_trait]
impl ChainClient for MockChain {
	async fn native_balance(&self, network: Network, owner: &str) -> ChainResult<BaseUnits> {
		Ok(self
			.native_balances
			.get(&(network, owner.to_string()))
			.map(|b| b.clone())
			.unwrap_or_else(BaseUnits::zero))
	}

	async fn token_balance(
		&self,
		network: Network,
		token: &str,
		owner: &str,
	) -> ChainResult<BaseUnits> {
		Ok(self
			.token_balances
			.get(&(network, token.to_string(), owner.to_string()))
			.map(|b| b.clone())
			.unwrap_or_else(BaseUnits::zero))
	}

	async fn token_metadata(&self, network: Network, token: &str) -> ChainResult<TokenMetadata> {
		self.metadata_calls.fetch_add(1, Ordering::SeqCst);
		self.metadata
			.get(&(network, token.to_string()))
			.map(|m| m.clone())
			.ok_or_else(|| ChainError::TokenNotFound {
				network,
				address: token.to_string(),
			})
	}

	async fn allowance(
		&self,
		network: Network,
		token: &str,
		owner: &str,
		spender: &str,
	) -> ChainResult<BaseUnits> {
		Ok(self
			.allowances
			.get(&(network, token.to_string(), owner.to_string(), spender.to_string()))
			.map(|a| a.clone())
			.unwrap_or_else(BaseUnits::zero))
	}
}

/// Wallet that records submissions in order and confirms instantly
pub struct MockWallet {
	pub address: String,
	pub submissions: Arc<Mutex<Vec<TransactionPayload>>>,
	counter: AtomicUsize,
}

impl MockWallet {
	pub fn new(address: &str) -> Self {
		Self {
			address: address.to_string(),
			submissions: Arc::new(Mutex::new(Vec::new())),
			counter: AtomicUsize::new(0),
		}
	}

	pub fn submitted(&self) -> Vec<TransactionPayload> {
		self.submissions.lock().unwrap().clone()
	}
}

pub struct MockPending {
	hash: String,
	network: Network,
}

#[async_trait]
impl PendingTransaction for MockPending {
	fn hash(&self) -> &str {
		&self.hash
	}

	async fn wait(&self) -> WalletResult<TransactionReceipt> {
		Ok(TransactionReceipt {
			hash: self.hash.clone(),
			network: self.network,
			block: Some(1),
			confirmed: true,
		})
	}
}

#[async_trait]
impl Wallet for MockWallet {
	fn address(&self, _network: Network) -> WalletResult<String> {
		Ok(self.address.clone())
	}

	async fn sign_and_send(
		&self,
		network: Network,
		payload: &TransactionPayload,
	) -> WalletResult<Box<dyn PendingTransaction>> {
		self.submissions.lock().unwrap().push(payload.clone());
		let seq = self.counter.fetch_add(1, Ordering::SeqCst);
		Ok(Box::new(MockPending {
			hash: format!("0xmock{}", seq),
			network,
		}))
	}
}

/// Wallet that fails every submission
pub struct FailingWallet;

#[async_trait]
impl Wallet for FailingWallet {
	fn address(&self, _network: Network) -> WalletResult<String> {
		Ok("0xfail".to_string())
	}

	async fn sign_and_send(
		&self,
		_network: Network,
		_payload: &TransactionPayload,
	) -> WalletResult<Box<dyn PendingTransaction>> {
		Err(WalletError::Submission {
			reason: "node rejected transaction".to_string(),
		})
	}
}
