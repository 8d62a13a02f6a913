//! LiFi adapter: same-chain swaps and cross-chain bridges on EVM networks
//!
//! One call to `GET /quote` returns both the priced estimate and the
//! transaction request to sign. Carries the ERC-20 approval group; the
//! spender is whatever contract the returned transaction targets.

use async_trait::async_trait;
use courier_types::{
	ApprovalSupport, BaseUnits, ChainClient, Network, Operation, PreparedRequest, Provider,
	ProviderError, ProviderResult, Quote, SwapMode, TransactionPayload,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::approvals::Erc20Approvals;
use crate::http::{ClientCache, HttpConfig};

/// Public LiFi API
pub const DEFAULT_ENDPOINT: &str = "https://li.quest/v1";

const SUPPORTED_NETWORKS: [Network; 6] = [
	Network::Ethereum,
	Network::Polygon,
	Network::Base,
	Network::Arbitrum,
	Network::Optimism,
	Network::Bsc,
];

/// LiFi swap and bridge provider for EVM networks
#[derive(Debug)]
pub struct LifiProvider {
	config: HttpConfig,
	clients: ClientCache,
	approvals: Erc20Approvals,
}

impl LifiProvider {
	pub fn new(config: HttpConfig, chain: Arc<dyn ChainClient>) -> Self {
		Self {
			config,
			clients: ClientCache::new(),
			approvals: Erc20Approvals::new(chain),
		}
	}

	pub fn with_default_endpoint(chain: Arc<dyn ChainClient>) -> Self {
		Self::new(HttpConfig::new(DEFAULT_ENDPOINT), chain)
	}

	async fn fetch_quote(&self, request: &PreparedRequest, wallet: &str) -> ProviderResult<Quote> {
		// The /quote endpoint only prices a fixed input side
		if request.kind == SwapMode::Output {
			return Err(ProviderError::UnsupportedOperation {
				operation: "output-side quoting".to_string(),
				provider: self.name().to_string(),
			});
		}
		let to_token = request.to_token.as_ref().ok_or(ProviderError::QuoteFailed {
			reason: "quote requires a destination token".to_string(),
		})?;
		let to_network = request.to_network.unwrap_or(request.network);

		let slippage = request.slippage_bps as f64 / 10_000.0;
		let params = [
			("fromChain".to_string(), request.network.chain_id().to_string()),
			("toChain".to_string(), to_network.chain_id().to_string()),
			("fromToken".to_string(), request.from_token.address.clone()),
			("toToken".to_string(), to_token.address.clone()),
			("fromAmount".to_string(), request.amount.to_string()),
			("fromAddress".to_string(), wallet.to_string()),
			("slippage".to_string(), slippage.to_string()),
		];

		let client = self.clients.get(&self.config)?;
		let response = client
			.get(self.config.url("/quote"))
			.query(&params)
			.send()
			.await
			.map_err(|e| ProviderError::Http(e.to_string()))?;
		if !response.status().is_success() {
			return Err(ProviderError::HttpStatus {
				status: response.status().as_u16(),
				reason: response.text().await.unwrap_or_default(),
			});
		}
		let body: Value = response
			.json()
			.await
			.map_err(|e| ProviderError::InvalidResponse { reason: e.to_string() })?;

		debug!(tool = ?body.get("tool"), "lifi quote received");
		build_quote(request, &body)
	}
}

#[async_trait]
impl Provider for LifiProvider {
	fn name(&self) -> &str {
		"lifi"
	}

	fn supported_networks(&self) -> &[Network] {
		&SUPPORTED_NETWORKS
	}

	async fn quote(
		&self,
		request: &PreparedRequest,
		wallet_address: &str,
	) -> ProviderResult<Quote> {
		match request.operation {
			Operation::Swap | Operation::Bridge => self.fetch_quote(request, wallet_address).await,
			other => Err(ProviderError::UnsupportedOperation {
				operation: other.to_string(),
				provider: self.name().to_string(),
			}),
		}
	}

	fn approvals(&self) -> Option<&dyn ApprovalSupport> {
		Some(&self.approvals)
	}
}

/// Parse a 0x-prefixed hex quantity into base units
fn parse_hex_quantity(value: &str) -> ProviderResult<BaseUnits> {
	let stripped = value.strip_prefix("0x").unwrap_or(value);
	if stripped.is_empty() {
		return Ok(BaseUnits::zero());
	}
	let parsed = u128::from_str_radix(stripped, 16).map_err(|_| ProviderError::InvalidResponse {
		reason: format!("invalid hex quantity: {}", value),
	})?;
	Ok(BaseUnits::from_u128(parsed))
}

/// Assemble the domain quote from a `/quote` response
fn build_quote(request: &PreparedRequest, body: &Value) -> ProviderResult<Quote> {
	let str_at = |path: &str| -> ProviderResult<String> {
		body.pointer(path)
			.and_then(|v| v.as_str())
			.map(str::to_string)
			.ok_or_else(|| ProviderError::InvalidResponse {
				reason: format!("{} missing in quote response", path),
			})
	};

	let from_amount = str_at("/estimate/fromAmount")?;
	let to_amount = str_at("/estimate/toAmount")?;
	let tx_to = str_at("/transactionRequest/to")?;
	let tx_data = str_at("/transactionRequest/data")?;
	let tx_value = parse_hex_quantity(
		body.pointer("/transactionRequest/value")
			.and_then(|v| v.as_str())
			.unwrap_or("0x0"),
	)?;

	let mut tx = TransactionPayload::new(tx_to, tx_data, tx_value, request.network);
	if let Some(gas_limit) = body
		.pointer("/transactionRequest/gasLimit")
		.and_then(|v| v.as_str())
	{
		if let Ok(parsed) = parse_hex_quantity(gas_limit)?.as_u128() {
			tx = tx.with_gas_limit(parsed as u64);
		}
	}

	let tool = body.get("tool").and_then(|v| v.as_str()).unwrap_or("lifi");
	let mut quote = Quote::new(
		"lifi",
		request.network,
		request.from_token.clone(),
		request.receive_token().clone(),
		BaseUnits::new(from_amount),
		BaseUnits::new(to_amount),
		request.kind,
		request.slippage_bps,
		tx,
	)
	.with_route(vec![tool.to_string()]);

	if let Some(gas) = body
		.pointer("/estimate/gasCosts/0/estimate")
		.and_then(|v| v.as_str())
	{
		quote = quote.with_estimated_gas(gas);
	}
	Ok(quote)
}
