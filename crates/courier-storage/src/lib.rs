//! Courier Storage
//!
//! In-memory quote storage with TTL eviction. Quotes are ephemeral,
//! single-process, best-effort state, not a durable ledger.

pub mod quote_store;

pub use quote_store::QuoteStore;
