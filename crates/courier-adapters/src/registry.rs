//! Provider registry
//!
//! Indexes registered providers by name and by declared network support.
//! Registration order is stable and meaningful: when a caller does not name
//! a provider, the first registered provider supporting the network wins.

use courier_types::{validate_capabilities, Network, Provider, ProviderEntry, ProviderError, ProviderResult};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Registry of named backend providers
#[derive(Clone, Default)]
pub struct ProviderRegistry {
	providers: Vec<Arc<dyn Provider>>,
	by_name: HashMap<String, usize>,
}

impl ProviderRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a provider, validating its capability declaration once
	///
	/// Fails on duplicate names and on providers that declare account-model
	/// networks without carrying the approval capability group.
	pub fn register(&mut self, provider: Arc<dyn Provider>) -> ProviderResult<()> {
		validate_capabilities(provider.as_ref())?;
		let name = provider.name().to_string();
		if self.by_name.contains_key(&name) {
			return Err(ProviderError::AlreadyRegistered { name });
		}
		info!(
			provider = %name,
			networks = ?provider.supported_networks(),
			"registered provider"
		);
		self.by_name.insert(name, self.providers.len());
		self.providers.push(provider);
		Ok(())
	}

	/// Look up a provider by name
	pub fn get(&self, name: &str) -> ProviderResult<Arc<dyn Provider>> {
		self.by_name
			.get(name)
			.map(|&i| Arc::clone(&self.providers[i]))
			.ok_or_else(|| ProviderError::NotFound {
				name: name.to_string(),
			})
	}

	/// Providers declaring support for `network`, in registration order
	pub fn get_by_network(&self, network: Network) -> Vec<Arc<dyn Provider>> {
		self.providers
			.iter()
			.filter(|p| p.supported_networks().contains(&network))
			.cloned()
			.collect()
	}

	/// Registered provider names, in registration order
	pub fn list_names(&self) -> Vec<String> {
		self.providers.iter().map(|p| p.name().to_string()).collect()
	}

	/// Union of declared networks across all providers, used to build the
	/// caller-facing schema of allowed networks
	pub fn supported_networks(&self) -> Vec<Network> {
		let mut networks = Vec::new();
		for provider in &self.providers {
			for network in provider.supported_networks() {
				if !networks.contains(network) {
					networks.push(*network);
				}
			}
		}
		networks
	}

	/// Immutable registration entries for all providers
	pub fn entries(&self) -> Vec<ProviderEntry> {
		self.providers
			.iter()
			.map(|p| ProviderEntry::describe(p.as_ref()))
			.collect()
	}

	pub fn len(&self) -> usize {
		self.providers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}
}
