//! In-memory quote storage using DashMap with TTL support
//!
//! Expiry is enforced twice: passively on every `get` (an expired entry is
//! rejected even if the sweeper has not fired yet) and actively by a
//! periodic sweep task. Expired entries stay in the map for one retention
//! window after `expires_at` so a late `get` still classifies as `Expired`
//! rather than `NotFound`; the sweep evicts them afterwards.

use chrono::{Duration, Utc};
use courier_types::{Quote, QuoteError};
use dashmap::DashMap;
use std::sync::Arc;
use tokio::time::interval;
use tracing::{debug, info};

/// Owned, injectable quote store with a constructor-supplied TTL
///
/// Mutations are single-step map operations on a concurrent map, so no
/// external locking is needed. Consumed quotes are not deleted; repeated
/// reads of a still-valid quote are legal and return the same payload.
#[derive(Clone)]
pub struct QuoteStore {
	quotes: Arc<DashMap<String, Quote>>,
	ttl: Duration,
	retention: Duration,
	sweep_interval: std::time::Duration,
}

impl QuoteStore {
	/// Default quote validity: 10 minutes
	pub const DEFAULT_TTL_SECS: i64 = 600;

	/// Create a store with the default TTL and a retention window equal to it
	pub fn new() -> Self {
		Self::with_ttl(Duration::seconds(Self::DEFAULT_TTL_SECS))
	}

	/// Create a store with a custom TTL; retention defaults to the TTL
	pub fn with_ttl(ttl: Duration) -> Self {
		Self {
			quotes: Arc::new(DashMap::new()),
			ttl,
			retention: ttl,
			sweep_interval: std::time::Duration::from_secs(60),
		}
	}

	pub fn with_retention(mut self, retention: Duration) -> Self {
		self.retention = retention;
		self
	}

	pub fn with_sweep_interval(mut self, sweep_interval: std::time::Duration) -> Self {
		self.sweep_interval = sweep_interval;
		self
	}

	/// Store TTL applied to incoming quotes
	pub fn ttl(&self) -> Duration {
		self.ttl
	}

	/// Insert a quote, bounding its validity by the store TTL
	///
	/// A provider may issue a tighter expiry than the store default (e.g.
	/// block-height-bounded chains); the store only ever clamps downwards.
	/// Returns the quote as stored.
	pub fn store(&self, mut quote: Quote) -> Quote {
		let cap = Utc::now() + self.ttl;
		if quote.expires_at > cap {
			quote.expires_at = cap;
		}
		debug!(quote_id = %quote.quote_id, expires_at = %quote.expires_at, "storing quote");
		self.quotes.insert(quote.quote_id.clone(), quote.clone());
		quote
	}

	/// Fetch a quote, rejecting expired entries at read time
	pub fn get(&self, quote_id: &str) -> Result<Quote, QuoteError> {
		let entry = self.quotes.get(quote_id).ok_or_else(|| QuoteError::NotFound {
			quote_id: quote_id.to_string(),
		})?;
		if entry.is_expired() {
			// Left in place for the sweeper; a repeat get must still say Expired
			return Err(QuoteError::Expired {
				quote_id: quote_id.to_string(),
			});
		}
		Ok(entry.clone())
	}

	/// Remove a quote explicitly
	pub fn remove(&self, quote_id: &str) -> bool {
		self.quotes.remove(quote_id).is_some()
	}

	/// Evict entries past their retention window; returns the number removed
	pub fn sweep(&self) -> usize {
		let cutoff = Utc::now() - self.retention;
		let mut removed = 0;
		self.quotes.retain(|_, quote| {
			if quote.expires_at <= cutoff {
				removed += 1;
				debug!(quote_id = %quote.quote_id, "evicting expired quote");
				false
			} else {
				true
			}
		});
		if removed > 0 {
			info!("evicted {} expired quotes", removed);
		}
		removed
	}

	/// Start the periodic sweep task
	pub fn start_sweeper(&self) -> tokio::task::JoinHandle<()> {
		let store = self.clone();
		tokio::spawn(async move {
			let mut tick = interval(store.sweep_interval);
			loop {
				tick.tick().await;
				store.sweep();
			}
		})
	}

	/// Total entries currently held, expired or not
	pub fn len(&self) -> usize {
		self.quotes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.quotes.is_empty()
	}

	/// Entries still within their validity window
	pub fn active_count(&self) -> usize {
		self.quotes.iter().filter(|e| !e.is_expired()).count()
	}
}

impl Default for QuoteStore {
	fn default() -> Self {
		Self::new()
	}
}
