//! Token resolution with per-process memoization

use courier_types::{ChainClient, EngineResult, Network, Token};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// Resolves chain-specific addresses (or the native sentinel) into
/// canonical [`Token`] descriptors
///
/// Resolved tokens are immutable, so they are cached by
/// `(network, address)` for the process lifetime.
pub struct TokenResolver {
	chain: Arc<dyn ChainClient>,
	cache: DashMap<(Network, String), Token>,
}

impl TokenResolver {
	pub fn new(chain: Arc<dyn ChainClient>) -> Self {
		Self {
			chain,
			cache: DashMap::new(),
		}
	}

	/// Resolve `address` on `network`
	pub async fn resolve(&self, network: Network, address: &str) -> EngineResult<Token> {
		if network.is_native(address) {
			return Ok(Token::native(network));
		}

		let key = (network, address.to_string());
		if let Some(token) = self.cache.get(&key) {
			return Ok(token.clone());
		}

		let metadata = self.chain.token_metadata(network, address).await?;
		let token = Token::new(address, metadata.decimals, metadata.symbol, network);
		debug!(%network, address, symbol = %token.symbol, "resolved token");
		self.cache.insert(key, token.clone());
		Ok(token)
	}
}
