//! Core Quote domain model

use crate::models::{BaseUnits, Network, Token, TransactionPayload};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod errors;
pub mod request;

pub use errors::QuoteError;
pub use request::{Operation, QuoteRequest, SwapMode};

/// Result type for quote operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// A time-bounded, provider-issued proposal for an amount conversion plus
/// the exact unsigned transaction to execute it
///
/// Immutable after creation. The embedded payload is the one that must
/// eventually be signed; re-deriving it after expiry is incorrect, which is
/// why expiry is a hard rejection rather than a silent re-quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
	/// Unique identifier for the quote
	pub quote_id: String,

	/// Name of the provider that issued this quote
	pub provider: String,

	/// Network the quote executes on
	pub network: Network,

	/// Token being spent
	pub from_token: Token,

	/// Token being received
	pub to_token: Token,

	/// Spend amount in base units
	pub from_amount: BaseUnits,

	/// Receive amount in base units
	pub to_amount: BaseUnits,

	/// Whether the caller fixed the input or the output side
	pub kind: SwapMode,

	/// Slippage tolerance in basis points
	pub slippage_bps: u32,

	/// Price impact as a fraction (0.01 = 1%)
	#[serde(skip_serializing_if = "Option::is_none")]
	pub price_impact: Option<f64>,

	/// Ordered provider tags describing the route
	pub route: Vec<String>,

	/// Estimated gas cost reported by the backend, as an opaque string
	#[serde(skip_serializing_if = "Option::is_none")]
	pub estimated_gas: Option<String>,

	/// The unsigned transaction realizing this quote
	pub tx: TransactionPayload,

	/// When the quote was created
	pub created_at: DateTime<Utc>,

	/// When the quote expires
	pub expires_at: DateTime<Utc>,
}

impl Quote {
	/// Create a quote with a fresh ID and the default 10-minute TTL
	#[allow(clippy::too_many_arguments)]
	pub fn new(
		provider: impl Into<String>,
		network: Network,
		from_token: Token,
		to_token: Token,
		from_amount: BaseUnits,
		to_amount: BaseUnits,
		kind: SwapMode,
		slippage_bps: u32,
		tx: TransactionPayload,
	) -> Self {
		let now = Utc::now();
		Self {
			quote_id: Uuid::new_v4().to_string(),
			provider: provider.into(),
			network,
			from_token,
			to_token,
			from_amount,
			to_amount,
			kind,
			slippage_bps,
			price_impact: None,
			route: Vec::new(),
			estimated_gas: None,
			tx,
			created_at: now,
			expires_at: now + Duration::minutes(10),
		}
	}

	/// Check if the quote has expired
	pub fn is_expired(&self) -> bool {
		Utc::now() >= self.expires_at
	}

	pub fn with_price_impact(mut self, impact: f64) -> Self {
		self.price_impact = Some(impact);
		self
	}

	pub fn with_route(mut self, route: Vec<String>) -> Self {
		self.route = route;
		self
	}

	pub fn with_estimated_gas(mut self, gas: impl Into<String>) -> Self {
		self.estimated_gas = Some(gas.into());
		self
	}

	pub fn with_ttl(mut self, ttl: Duration) -> Self {
		self.expires_at = self.created_at + ttl;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::models::Token;

	fn test_quote() -> Quote {
		let sol = Token::native(Network::Solana);
		let usdc = Token::new(
			"EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
			6,
			"USDC",
			Network::Solana,
		);
		let tx = TransactionPayload::new(
			"JUP6LkbZbjS1jKKwapdHNy74zcZ3tLUZoi5QNyVTaV4",
			"AQID",
			BaseUnits::new("10000000"),
			Network::Solana,
		);
		Quote::new(
			"jupiter",
			Network::Solana,
			sol,
			usdc,
			BaseUnits::new("10000000"),
			BaseUnits::new("1523000"),
			SwapMode::Input,
			50,
			tx,
		)
	}

	#[test]
	fn test_quote_creation() {
		let quote = test_quote();
		assert_eq!(quote.provider, "jupiter");
		assert_eq!(quote.network, Network::Solana);
		assert!(!quote.is_expired());
		assert!(!quote.quote_id.is_empty());
	}

	#[test]
	fn test_quote_expiration() {
		let mut quote = test_quote();
		quote.expires_at = Utc::now() - Duration::minutes(1);
		assert!(quote.is_expired());
	}

	#[test]
	fn test_expiry_boundary_is_inclusive() {
		// A quote is rejected at exactly expires_at, not one tick later
		let mut quote = test_quote();
		quote.expires_at = Utc::now() - Duration::milliseconds(1);
		assert!(quote.is_expired());
	}

	#[test]
	fn test_custom_ttl() {
		let quote = test_quote().with_ttl(Duration::minutes(5));
		assert_eq!(quote.expires_at - quote.created_at, Duration::minutes(5));
	}
}
