//! The execution engine: quote, validate, approve, execute
//!
//! One engine instance drives every operation kind. Stages run strictly in
//! order for a given caller; concurrent operations only share the quote
//! store, whose mutations are single-step map operations.

use crate::adjuster::{AmountAdjuster, GasBuffers};
use crate::allowance::AllowanceManager;
use crate::balance::BalanceValidator;
use crate::classifier::ErrorClassifier;
use crate::executor::TransactionExecutor;
use crate::resolver::TokenResolver;
use courier_adapters::ProviderRegistry;
use courier_storage::QuoteStore;
use courier_types::{
	BaseUnits, ChainClient, EngineResult, ExecutionOutcome, Network, PreparedRequest, Provider,
	ProviderError, Quote, QuoteRequest, Step, StructuredError, SwapMode, TransactionReceipt,
	Wallet,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Default slippage tolerance when the caller does not set one
const DEFAULT_SLIPPAGE_BPS: u32 = 50;

/// Orchestrates the quote lifecycle across registered providers
pub struct ExecutionEngine {
	registry: Arc<ProviderRegistry>,
	store: QuoteStore,
	wallet: Arc<dyn Wallet>,
	resolver: TokenResolver,
	adjuster: AmountAdjuster,
	balance: BalanceValidator,
	allowance: AllowanceManager,
	executor: TransactionExecutor,
	classifier: ErrorClassifier,
	default_slippage_bps: u32,
}

impl ExecutionEngine {
	pub fn new(
		registry: Arc<ProviderRegistry>,
		store: QuoteStore,
		chain: Arc<dyn ChainClient>,
		wallet: Arc<dyn Wallet>,
		buffers: GasBuffers,
	) -> Self {
		Self {
			resolver: TokenResolver::new(Arc::clone(&chain)),
			adjuster: AmountAdjuster::new(Arc::clone(&chain), buffers.clone()),
			balance: BalanceValidator::new(Arc::clone(&chain), buffers),
			allowance: AllowanceManager::new(),
			executor: TransactionExecutor::new(Arc::clone(&wallet)),
			classifier: ErrorClassifier::new(Arc::clone(&registry)),
			registry,
			store,
			wallet,
			default_slippage_bps: DEFAULT_SLIPPAGE_BPS,
		}
	}
}

impl std::fmt::Debug for ExecutionEngine {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ExecutionEngine")
			.field("default_slippage_bps", &self.default_slippage_bps)
			.finish_non_exhaustive()
	}
}

impl ExecutionEngine {
	/// Override the slippage tolerance applied when requests do not set one
	pub fn with_default_slippage_bps(mut self, bps: u32) -> Self {
		self.default_slippage_bps = bps;
		self
	}

	/// Networks any registered provider can serve
	pub fn supported_networks(&self) -> Vec<Network> {
		self.registry.supported_networks()
	}

	/// Registered provider names, in selection order
	pub fn provider_names(&self) -> Vec<String> {
		self.registry.list_names()
	}

	/// Access to the quote store, e.g. for starting its sweeper
	pub fn store(&self) -> &QuoteStore {
		&self.store
	}

	/// Fetch and store a quote for `request`
	///
	/// Provider selection: the explicitly named provider when given,
	/// otherwise every provider declaring the network, in registration
	/// order, failing over to the next on quote failure.
	pub async fn quote(&self, request: &QuoteRequest) -> EngineResult<Quote> {
		let wallet_address = self.wallet.address(request.network)?;
		let providers = self.select_providers(request)?;
		let prepared = self.prepare(request, &wallet_address).await?;

		let mut last_error: Option<StructuredError> = None;
		for provider in &providers {
			match provider.quote(&prepared, &wallet_address).await {
				Ok(quote) => {
					let quote = self.store.store(quote);
					info!(
						provider = %quote.provider,
						quote_id = %quote.quote_id,
						from = %quote.from_amount,
						to = %quote.to_amount,
						"quote stored"
					);
					return Ok(quote);
				},
				Err(e) => {
					warn!(provider = provider.name(), error = %e, "provider failed to quote");
					last_error = Some(e.into());
				},
			}
		}

		// An explicitly chosen provider keeps its own classification; the
		// auto-selection path reports availability across the whole set
		if request.provider.is_some() {
			return Err(last_error.unwrap_or_else(|| {
				StructuredError::new(Step::ProviderAvailability, "provider produced no quote")
			}));
		}
		let mut error = StructuredError::new(
			Step::ProviderAvailability,
			format!(
				"no provider could quote {} on {}",
				request.operation, request.network
			),
		)
		.with_detail("network", request.network.to_string())
		.with_detail(
			"providers",
			providers.iter().map(|p| p.name().to_string()).collect::<Vec<_>>(),
		);
		if let Some(last) = last_error {
			error = error.with_detail("lastError", last.message);
		}
		Err(error)
	}

	/// Validate and execute a previously stored quote
	///
	/// The store's read-time expiry check makes a stale quote fail here
	/// with an expiry-classified error, never a stale transaction.
	pub async fn execute(&self, quote_id: &str) -> EngineResult<(Quote, TransactionReceipt)> {
		let quote = self.store.get(quote_id)?;
		let wallet_address = self.wallet.address(quote.network)?;

		let verdict = self.balance.check(&quote, &wallet_address).await?;
		if !verdict.is_valid {
			let message = verdict
				.message
				.unwrap_or_else(|| "insufficient balance".to_string());
			return Err(StructuredError::new(Step::ToolExecution, message)
				.with_detail("quoteId", quote.quote_id.clone()));
		}

		let provider = self.registry.get(&quote.provider)?;
		if let Some(approval) = self
			.allowance
			.required_approval(&quote, provider.as_ref(), &wallet_address)
			.await?
		{
			// The approval must be final before the spend is submitted
			let receipt = self.executor.execute(quote.network, &approval).await?;
			info!(hash = %receipt.hash, "approval confirmed");
		}

		let payload = provider.build_transaction(&quote, &wallet_address).await?;
		let receipt = self.executor.execute(quote.network, &payload).await?;
		Ok((quote, receipt))
	}

	/// Full pipeline: quote, validate, approve, execute, envelope
	///
	/// Every terminal outcome is an envelope; no raw error escapes.
	pub async fn run(&self, request: &QuoteRequest) -> ExecutionOutcome {
		let result = async {
			let quote = self.quote(request).await?;
			self.execute(&quote.quote_id).await
		}
		.await;

		match result {
			Ok((quote, receipt)) => ExecutionOutcome::success(&quote, receipt.hash),
			Err(error) => self.classifier.envelope(self.classifier.classify(error)),
		}
	}

	/// Providers to try for this request, in order
	fn select_providers(&self, request: &QuoteRequest) -> EngineResult<Vec<Arc<dyn Provider>>> {
		if let Some(name) = &request.provider {
			let provider = self.registry.get(name)?;
			if !provider.supported_networks().contains(&request.network) {
				return Err(ProviderError::NetworkNotSupported {
					provider: name.clone(),
					network: request.network,
				}
				.into());
			}
			return Ok(vec![provider]);
		}

		let providers = self.registry.get_by_network(request.network);
		if providers.is_empty() {
			return Err(ProviderError::NoProviderForNetwork {
				network: request.network,
			}
			.into());
		}
		Ok(providers)
	}

	/// Resolve tokens and adjust the amount ahead of the provider call
	async fn prepare(
		&self,
		request: &QuoteRequest,
		wallet_address: &str,
	) -> EngineResult<PreparedRequest> {
		let from_token = self
			.resolver
			.resolve(request.network, &request.from_token)
			.await?;
		let to_token = match &request.to_token {
			Some(address) => Some(
				self.resolver
					.resolve(request.to_network.unwrap_or(request.network), address)
					.await?,
			),
			None => None,
		};

		// The human amount is denominated on the side the caller fixed
		let fixed_decimals = match request.kind {
			SwapMode::Input => from_token.decimals,
			SwapMode::Output => to_token.as_ref().unwrap_or(&from_token).decimals,
		};
		let mut amount = BaseUnits::from_decimal(&request.amount, fixed_decimals)?;

		// Only a fixed input spend can eat into the gas reserve
		if request.kind == SwapMode::Input {
			amount = self
				.adjuster
				.adjust(&from_token.address, &amount, wallet_address, request.network)
				.await?;
		}

		Ok(PreparedRequest {
			operation: request.operation,
			network: request.network,
			to_network: request.to_network,
			from_token,
			to_token,
			amount,
			kind: request.kind,
			slippage_bps: request.slippage_bps.unwrap_or(self.default_slippage_bps),
			recipient: request.recipient.clone(),
		})
	}
}
