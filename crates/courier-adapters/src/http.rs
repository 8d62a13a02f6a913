//! Shared HTTP client construction for backend adapters
//!
//! Clients are cached per configuration so connection pools and keep-alive
//! survive across requests to the same backend.

use courier_types::{ProviderError, ProviderResult};
use dashmap::DashMap;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// HTTP configuration for one backend endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HttpConfig {
	pub endpoint: String,
	pub timeout_ms: u64,
	/// Extra headers (auth keys etc.) beyond the shared defaults
	pub headers: Vec<(String, String)>,
}

impl HttpConfig {
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.into(),
			timeout_ms: 30_000,
			headers: Vec::new(),
		}
	}

	pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
		self.timeout_ms = timeout_ms;
		self
	}

	pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((key.into(), value.into()));
		self
	}

	/// Join a path onto the endpoint without doubling slashes
	pub fn url(&self, path: &str) -> String {
		format!(
			"{}/{}",
			self.endpoint.trim_end_matches('/'),
			path.trim_start_matches('/')
		)
	}
}

/// Thread-safe cache of HTTP clients keyed by configuration
#[derive(Clone, Default, Debug)]
pub struct ClientCache {
	clients: Arc<DashMap<HttpConfig, Arc<Client>>>,
}

impl ClientCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Get or build the client for `config`
	pub fn get(&self, config: &HttpConfig) -> ProviderResult<Arc<Client>> {
		if let Some(client) = self.clients.get(config) {
			return Ok(Arc::clone(&client));
		}
		let client = Arc::new(build_client(config)?);
		self.clients.insert(config.clone(), Arc::clone(&client));
		Ok(client)
	}
}

fn build_client(config: &HttpConfig) -> ProviderResult<Client> {
	let mut headers = HeaderMap::new();
	headers.insert("Accept", HeaderValue::from_static("application/json"));
	headers.insert("User-Agent", HeaderValue::from_static("courier/0.1"));
	for (key, value) in &config.headers {
		let name = HeaderName::from_bytes(key.as_bytes())
			.map_err(|e| ProviderError::Http(format!("invalid header name {}: {}", key, e)))?;
		let value = HeaderValue::from_str(value)
			.map_err(|e| ProviderError::Http(format!("invalid header value for {}: {}", key, e)))?;
		headers.insert(name, value);
	}

	Client::builder()
		.default_headers(headers)
		.timeout(Duration::from_millis(config.timeout_ms))
		.build()
		.map_err(|e| ProviderError::Http(e.to_string()))
}
