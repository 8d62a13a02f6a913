//! Courier Adapters
//!
//! Provider registry and backend adapters for the Courier execution
//! engine.

pub mod approvals;
pub mod http;
pub mod jupiter;
pub mod lido;
pub mod lifi;
pub mod native_transfer;
pub mod registry;

pub use approvals::{encode_approve, encode_transfer, Erc20Approvals};
pub use http::{ClientCache, HttpConfig};
pub use jupiter::JupiterProvider;
pub use lido::LidoProvider;
pub use lifi::LifiProvider;
pub use native_transfer::TransferProvider;
pub use registry::ProviderRegistry;

use courier_types::{ChainClient, ProviderResult};
use std::sync::Arc;

/// Build a registry with the stock providers against their public
/// endpoints: jupiter (Solana swaps), lifi (EVM swaps and bridges), lido
/// (ETH staking), and the local transfer provider.
///
/// Registration order is the default-selection order.
pub fn default_registry(chain: Arc<dyn ChainClient>) -> ProviderResult<ProviderRegistry> {
	let mut registry = ProviderRegistry::new();
	registry.register(Arc::new(JupiterProvider::with_default_endpoint()))?;
	registry.register(Arc::new(LifiProvider::with_default_endpoint(Arc::clone(&chain))))?;
	registry.register(Arc::new(LidoProvider::new(Arc::clone(&chain))))?;
	registry.register(Arc::new(TransferProvider::new(chain)))?;
	Ok(registry)
}
