//! Engine startup logging

use std::env;
use tracing::info;

/// Logs service information when the engine is built
pub fn log_service_info() {
	let service_name = "courier";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== Courier Engine Starting ===");
	info!("Service: {} v{}", service_name, service_version);
	info!("Platform: {} / {}", env::consts::OS, env::consts::ARCH);

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("Log filter: {}", rust_log);
	}

	info!(
		"Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs startup completion with the registered provider set
pub fn log_startup_complete(providers: &[String], networks: &[String]) {
	info!("Courier engine initialized");
	info!("Providers: {}", providers.join(", "));
	info!("Networks: {}", networks.join(", "));
}
