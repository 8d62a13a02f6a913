//! Configuration settings structures

use courier_types::Network;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
	pub engine: EngineSettings,
	/// Per-network gas reserve overrides, in native base units
	pub gas_buffers: HashMap<Network, String>,
	pub providers: HashMap<String, ProviderConfig>,
	pub logging: LoggingSettings,
}

/// Engine-level tunables
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct EngineSettings {
	/// Quote validity in seconds
	pub quote_ttl_secs: u64,
	/// How long expired quotes stay readable as expired before eviction
	pub retention_secs: u64,
	/// Sweep cadence for the quote store eviction task
	pub sweep_interval_secs: u64,
	/// Slippage tolerance applied when a request does not set one
	pub default_slippage_bps: u32,
}

impl Default for EngineSettings {
	fn default() -> Self {
		Self {
			quote_ttl_secs: 600,
			retention_secs: 600,
			sweep_interval_secs: 60,
			default_slippage_bps: 50,
		}
	}
}

/// Individual provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
	pub enabled: bool,
	/// Backend endpoint; the adapter's public default when absent
	pub endpoint: Option<String>,
	pub timeout_ms: u64,
	pub headers: Option<HashMap<String, String>>,
}

impl Default for ProviderConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			endpoint: None,
			timeout_ms: 30_000,
			headers: None,
		}
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			engine: EngineSettings::default(),
			gas_buffers: HashMap::new(),
			providers: HashMap::new(),
			logging: LoggingSettings::default(),
		}
	}
}

impl Settings {
	/// Get enabled providers only
	pub fn enabled_providers(&self) -> HashMap<String, ProviderConfig> {
		self.providers
			.iter()
			.filter(|(_, config)| config.enabled)
			.map(|(k, v)| (k.clone(), v.clone()))
			.collect()
	}

	/// Provider entry by name, defaulted when not configured
	pub fn provider(&self, name: &str) -> ProviderConfig {
		self.providers.get(name).cloned().unwrap_or_default()
	}
}
