//! Courier Configuration
//!
//! Configuration management and startup utilities for the Courier
//! execution engine.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::load_config;
pub use settings::{EngineSettings, LogFormat, LoggingSettings, ProviderConfig, Settings};
pub use startup_logger::{log_service_info, log_startup_complete};
