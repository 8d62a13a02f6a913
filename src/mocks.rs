//! Mock collaborators for examples and testing
//!
//! Scriptable implementations of the chain client, wallet, and provider
//! contracts so embedders can exercise the full pipeline without touching
//! a network.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use courier_types::{
	BaseUnits, ChainClient, ChainError, ChainResult, Network, Operation, PendingTransaction,
	PreparedRequest, Provider, ProviderError, ProviderResult, Quote, TokenMetadata,
	TransactionPayload, TransactionReceipt, Wallet, WalletError, WalletResult,
};
use dashmap::DashMap;

/// Scriptable chain state
#[derive(Default)]
pub struct MockChainClient {
	native_balances: DashMap<(Network, String), BaseUnits>,
	token_balances: DashMap<(Network, String, String), BaseUnits>,
	allowances: DashMap<(Network, String, String, String), BaseUnits>,
	metadata: DashMap<(Network, String), TokenMetadata>,
}

impl MockChainClient {
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
		self.token_balances.insert(
			(network, token.to_string(), owner.to_string()),
			balance.into(),
		);
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
			(
				network,
				token.to_string(),
				owner.to_string(),
				spender.to_string(),
			),
			amount.into(),
		);
	}

	pub fn set_token(&self, network: Network, address: &str, decimals: u8, symbol: &str) {
		self.metadata.insert(
			(network, address.to_string()),
			TokenMetadata {
				decimals,
				symbol: symbol.to_string(),
			},
		);
	}
}

#[async_trait]
impl ChainClient for MockChainClient {
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
			.get(&(
				network,
				token.to_string(),
				owner.to_string(),
				spender.to_string(),
			))
			.map(|a| a.clone())
			.unwrap_or_else(BaseUnits::zero))
	}
}

/// Wallet recording submissions in order, confirming instantly
pub struct MockWallet {
	address: String,
	submissions: Arc<Mutex<Vec<TransactionPayload>>>,
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

	/// Payloads submitted so far, in submission order
	pub fn submitted(&self) -> Vec<TransactionPayload> {
		self.submissions.lock().unwrap().clone()
	}
}

struct MockPending {
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

/// Wallet with no key material for any network
pub struct UnavailableWallet;

#[async_trait]
impl Wallet for UnavailableWallet {
	fn address(&self, network: Network) -> WalletResult<String> {
		Err(WalletError::Unavailable { network })
	}

	async fn sign_and_send(
		&self,
		network: Network,
		_payload: &TransactionPayload,
	) -> WalletResult<Box<dyn PendingTransaction>> {
		Err(WalletError::Unavailable { network })
	}
}

/// Provider issuing deterministic quotes at a fixed rate, with optional
/// scripted failure and call tracking
#[derive(Debug)]
pub struct MockProvider {
	name: String,
	networks: Vec<Network>,
	/// Numerator over 10_000: `to_amount = amount * rate_bps / 10_000`
	rate_bps: u128,
	fail: bool,
	spend_target: String,
	approvals: Option<courier_adapters::Erc20Approvals>,
	calls: AtomicUsize,
}

impl MockProvider {
	pub fn new(name: &str, networks: Vec<Network>) -> Self {
		Self {
			name: name.to_string(),
			networks,
			rate_bps: 10_000,
			fail: false,
			spend_target: "mock-router".to_string(),
			approvals: None,
			calls: AtomicUsize::new(0),
		}
	}

	/// Always fail quoting, for failover tests
	pub fn failing(name: &str, networks: Vec<Network>) -> Self {
		Self {
			fail: true,
			..Self::new(name, networks)
		}
	}

	pub fn with_rate_bps(mut self, rate_bps: u128) -> Self {
		self.rate_bps = rate_bps;
		self
	}

	pub fn with_spend_target(mut self, target: &str) -> Self {
		self.spend_target = target.to_string();
		self
	}

	/// Carry the ERC-20 approval group, as account-model networks require
	pub fn with_approvals(mut self, chain: Arc<dyn ChainClient>) -> Self {
		self.approvals = Some(courier_adapters::Erc20Approvals::new(chain));
		self
	}

	pub fn quote_calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl Provider for MockProvider {
	fn name(&self) -> &str {
		&self.name
	}

	fn supported_networks(&self) -> &[Network] {
		&self.networks
	}

	async fn quote(
		&self,
		request: &PreparedRequest,
		_wallet_address: &str,
	) -> ProviderResult<Quote> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		if self.fail {
			return Err(ProviderError::QuoteFailed {
				reason: "scripted failure".to_string(),
			});
		}
		if request.operation == Operation::Transfer && request.recipient.is_none() {
			return Err(ProviderError::QuoteFailed {
				reason: "transfer requires a recipient".to_string(),
			});
		}

		let amount = request
			.amount
			.as_u128()
			.map_err(|e| ProviderError::QuoteFailed { reason: e.to_string() })?;
		let to_amount = amount * self.rate_bps / 10_000;

		let value = if request.from_token.is_native() {
			request.amount.clone()
		} else {
			BaseUnits::zero()
		};
		let tx = TransactionPayload::new(
			self.spend_target.clone(),
			"0xmockdata",
			value,
			request.network,
		);
		Ok(Quote::new(
			&self.name,
			request.network,
			request.from_token.clone(),
			request.receive_token().clone(),
			request.amount.clone(),
			BaseUnits::from_u128(to_amount),
			request.kind,
			request.slippage_bps,
			tx,
		)
		.with_route(vec![self.name.clone()]))
	}

	fn approvals(&self) -> Option<&dyn courier_types::ApprovalSupport> {
		self.approvals
			.as_ref()
			.map(|a| a as &dyn courier_types::ApprovalSupport)
	}
}

/// A mock provider preconfigured like a Solana swap backend
pub fn solana_swapper(name: &str) -> MockProvider {
	// ~152.30 USDC per SOL once decimals (9 vs 6) are accounted for
	MockProvider::new(name, vec![Network::Solana]).with_rate_bps(1523)
}
