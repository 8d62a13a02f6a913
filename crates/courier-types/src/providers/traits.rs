//! Core provider trait for backend integrations

use crate::models::{BaseUnits, Network, TransactionPayload};
use crate::providers::{PreparedRequest, ProviderError, ProviderResult};
use crate::quotes::Quote;
use async_trait::async_trait;
use std::fmt::Debug;

/// A swappable integration with one external swap/bridge/staking service
///
/// Providers declare the networks they can serve; the registry indexes that
/// declaration and never validates it per call. A provider issues complete
/// quotes: the unsigned transaction payload is built at quote time and
/// embedded in the quote, so repeated builds against the same quote are
/// idempotent by construction.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
	/// Stable provider name used for registration and explicit selection
	fn name(&self) -> &str;

	/// Networks this provider declares support for
	fn supported_networks(&self) -> &[Network];

	/// Fetch a quote for the request, including its transaction payload
	///
	/// Operations the provider does not serve must fail with
	/// [`ProviderError::UnsupportedOperation`] so the engine can fail over
	/// to the next provider on the same network.
	async fn quote(&self, request: &PreparedRequest, wallet_address: &str)
		-> ProviderResult<Quote>;

	/// Materialize the unsigned transaction for a previously issued quote
	///
	/// The default returns the payload embedded in the quote. Override only
	/// when a backend needs a per-build refresh that stays byte-identical
	/// for the quote's lifetime.
	async fn build_transaction(
		&self,
		quote: &Quote,
		_wallet_address: &str,
	) -> ProviderResult<TransactionPayload> {
		Ok(quote.tx.clone())
	}

	/// The approval capability group, present as a whole or not at all
	///
	/// Providers serving account-model networks must return `Some`; the
	/// registry enforces this once at registration.
	fn approvals(&self) -> Option<&dyn ApprovalSupport> {
		None
	}
}

/// Optional capability group for account-model chains with a
/// spender/allowance model
#[async_trait]
pub trait ApprovalSupport: Send + Sync {
	/// Read the live allowance granted by `owner` to `spender`
	async fn check_allowance(
		&self,
		network: Network,
		token: &str,
		owner: &str,
		spender: &str,
	) -> ProviderResult<BaseUnits>;

	/// Build an unsigned approval transaction granting `amount` to `spender`
	async fn build_approve_transaction(
		&self,
		network: Network,
		token: &str,
		spender: &str,
		amount: &BaseUnits,
		owner: &str,
	) -> ProviderResult<TransactionPayload>;
}

/// Immutable registration entry describing a provider's declared capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEntry {
	pub name: String,
	pub supported_networks: Vec<Network>,
	pub supports_approvals: bool,
}

impl ProviderEntry {
	pub fn describe(provider: &dyn Provider) -> Self {
		Self {
			name: provider.name().to_string(),
			supported_networks: provider.supported_networks().to_vec(),
			supports_approvals: provider.approvals().is_some(),
		}
	}
}

/// Registration-time validation of the capability rule: a provider that
/// declares any account-model network must carry the approval group.
pub fn validate_capabilities(provider: &dyn Provider) -> ProviderResult<()> {
	let needs_approvals = provider
		.supported_networks()
		.iter()
		.any(Network::uses_allowances);
	if needs_approvals && provider.approvals().is_none() {
		return Err(ProviderError::MissingCapability {
			provider: provider.name().to_string(),
			capability: "approvals".to_string(),
		});
	}
	Ok(())
}
