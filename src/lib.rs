//! Courier Library
//!
//! A cross-chain execution engine for automated agents: select a backend,
//! obtain a time-bounded quote, validate balances and allowances, and
//! drive the approve-execute-confirm sequence, resolving every outcome to
//! a stable envelope.

use courier_service::GasBuffers;
use courier_storage::QuoteStore;

// Core domain types - the most commonly used types
pub use courier_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	// Collaborator contracts
	ChainClient,
	ChainError,
	// Envelopes
	ErrorEnvelope,
	ExecutionOutcome,
	// Primary domain entities
	Network,
	Operation,
	PendingTransaction,
	PreparedRequest,
	Provider,
	// Error types
	ProviderError,
	Quote,
	QuoteError,
	QuoteRequest,
	Step,
	StructuredError,
	SuccessEnvelope,
	SwapMode,
	Token,
	TransactionPayload,
	TransactionReceipt,
	Wallet,
	WalletError,
};

// Service layer
pub use courier_service::{
	AllowanceManager, AmountAdjuster, BalanceValidator, BalanceVerdict, ErrorClassifier,
	ExecutionEngine, TokenResolver, TransactionExecutor,
};

// Adapters
pub use courier_adapters::{
	default_registry, HttpConfig, JupiterProvider, LidoProvider, LifiProvider, ProviderRegistry,
	TransferProvider,
};

// Config
pub use courier_config::{load_config, log_service_info, log_startup_complete, Settings};

// Module aliases for embedders that prefer full paths
pub mod types {
	pub use courier_types::*;
}

pub mod storage {
	pub use courier_storage::*;
}

pub mod adapters {
	pub use courier_adapters::*;
}

pub mod service {
	pub use courier_service::*;
}

pub mod config {
	pub use courier_config::*;
}

pub mod mocks;

use courier_types::BaseUnits;
use std::sync::Arc;
use tracing::info;

// Re-export external dependencies used at the embedding boundary
pub use async_trait;
pub use reqwest;

/// Builder pattern for configuring the execution engine
///
/// Collaborators (chain client, wallet) are injected; providers default to
/// the stock registry unless custom ones are registered.
pub struct EngineBuilder {
	settings: Option<Settings>,
	registry: Option<ProviderRegistry>,
	chain: Option<Arc<dyn ChainClient>>,
	wallet: Option<Arc<dyn Wallet>>,
	start_sweeper: bool,
}

impl Default for EngineBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl EngineBuilder {
	pub fn new() -> Self {
		Self {
			settings: None,
			registry: None,
			chain: None,
			wallet: None,
			start_sweeper: true,
		}
	}

	/// Load `.env`, read the configuration file, and seed a builder with it
	pub fn from_config() -> Self {
		dotenvy::dotenv().ok();
		let settings = load_config().unwrap_or_default();
		Self::new().with_settings(settings)
	}

	/// Set custom settings; defaults apply otherwise
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Inject the chain client collaborator (required)
	pub fn with_chain_client(mut self, chain: Arc<dyn ChainClient>) -> Self {
		self.chain = Some(chain);
		self
	}

	/// Inject the wallet collaborator (required)
	pub fn with_wallet(mut self, wallet: Arc<dyn Wallet>) -> Self {
		self.wallet = Some(wallet);
		self
	}

	/// Register a custom provider, overriding the stock registry
	pub fn with_provider(mut self, provider: Arc<dyn Provider>) -> Result<Self, StructuredError> {
		let mut registry = self.registry.take().unwrap_or_default();
		registry.register(provider)?;
		self.registry = Some(registry);
		Ok(self)
	}

	/// Disable the background eviction task (tests drive the sweep manually)
	pub fn without_sweeper(mut self) -> Self {
		self.start_sweeper = false;
		self
	}

	/// Build the engine and start the quote-store eviction task
	pub fn build(self) -> Result<ExecutionEngine, StructuredError> {
		let settings = self.settings.unwrap_or_default();

		let chain = self.chain.ok_or_else(|| {
			StructuredError::new(Step::Initialization, "a chain client must be injected")
		})?;
		let wallet = self.wallet.ok_or_else(|| {
			StructuredError::new(Step::Initialization, "a wallet must be injected")
		})?;

		let registry = match self.registry {
			Some(registry) => registry,
			None => registry_from_settings(&settings, Arc::clone(&chain))?,
		};

		let mut buffers = GasBuffers::new();
		for (network, raw) in &settings.gas_buffers {
			let amount = BaseUnits::new(raw.clone());
			amount.validate().map_err(|e| {
				StructuredError::new(
					Step::Initialization,
					format!("invalid gas buffer for {}: {}", network, e),
				)
			})?;
			buffers = buffers.with_override(*network, amount);
		}

		let store = QuoteStore::with_ttl(chrono::Duration::seconds(
			settings.engine.quote_ttl_secs as i64,
		))
		.with_retention(chrono::Duration::seconds(
			settings.engine.retention_secs as i64,
		))
		.with_sweep_interval(std::time::Duration::from_secs(
			settings.engine.sweep_interval_secs,
		));
		if self.start_sweeper {
			match tokio::runtime::Handle::try_current() {
				Ok(_) => {
					store.start_sweeper();
				},
				Err(_) => {
					tracing::warn!(
						"no async runtime at build time; quote eviction relies on read-time expiry"
					);
				},
			}
		}

		let registry = Arc::new(registry);
		log_startup_complete(
			&registry.list_names(),
			&registry
				.supported_networks()
				.iter()
				.map(|n| n.to_string())
				.collect::<Vec<_>>(),
		);
		info!(providers = registry.len(), "execution engine built");

		Ok(ExecutionEngine::new(registry, store, chain, wallet, buffers)
			.with_default_slippage_bps(settings.engine.default_slippage_bps))
	}
}

/// Build the stock registry honoring per-provider settings: enabled flags,
/// endpoint overrides, timeouts, and extra headers
fn registry_from_settings(
	settings: &Settings,
	chain: Arc<dyn ChainClient>,
) -> Result<ProviderRegistry, StructuredError> {
	let http_config = |name: &str, default_endpoint: &str| {
		let entry = settings.provider(name);
		let mut config = HttpConfig::new(
			entry
				.endpoint
				.clone()
				.unwrap_or_else(|| default_endpoint.to_string()),
		)
		.with_timeout_ms(entry.timeout_ms);
		if let Some(headers) = &entry.headers {
			for (key, value) in headers {
				config = config.with_header(key.clone(), value.clone());
			}
		}
		config
	};

	let mut registry = ProviderRegistry::new();
	if settings.provider("jupiter").enabled {
		let config = http_config("jupiter", courier_adapters::jupiter::DEFAULT_ENDPOINT);
		registry.register(Arc::new(JupiterProvider::new(config)))?;
	}
	if settings.provider("lifi").enabled {
		let config = http_config("lifi", courier_adapters::lifi::DEFAULT_ENDPOINT);
		registry.register(Arc::new(LifiProvider::new(config, Arc::clone(&chain))))?;
	}
	if settings.provider("lido").enabled {
		registry.register(Arc::new(LidoProvider::new(Arc::clone(&chain))))?;
	}
	if settings.provider("transfer").enabled {
		registry.register(Arc::new(TransferProvider::new(chain)))?;
	}
	Ok(registry)
}

/// Initialize tracing from the logging settings
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_tracing(settings: &Settings) {
	use courier_config::LogFormat;

	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.logging.level));

	match settings.logging.format {
		LogFormat::Json => {
			let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);
			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		},
		LogFormat::Pretty => {
			let subscriber = tracing_subscriber::fmt()
				.pretty()
				.with_env_filter(env_filter);
			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		},
		LogFormat::Compact => {
			let subscriber = tracing_subscriber::fmt()
				.compact()
				.with_env_filter(env_filter);
			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		},
	}

	info!(
		"logging configured: level={}, format={:?}",
		settings.logging.level, settings.logging.format
	);
}
