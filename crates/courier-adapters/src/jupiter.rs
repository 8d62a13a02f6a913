//! Jupiter adapter: swap quotes on Solana
//!
//! Two-call flow against the public quote API: `GET /quote` prices the
//! swap, `POST /swap` returns the serialized transaction to sign. The
//! serialized transaction is built once here and embedded in the quote.

use async_trait::async_trait;
use courier_types::{
	BaseUnits, Network, Operation, PreparedRequest, Provider, ProviderError, ProviderResult,
	Quote, SwapMode, TransactionPayload,
};
use serde_json::{json, Value};
use tracing::debug;

use crate::http::{ClientCache, HttpConfig};

/// Public Jupiter quote API
pub const DEFAULT_ENDPOINT: &str = "https://quote-api.jup.ag/v6";

/// Jupiter aggregator program, recorded as the payload destination
const JUPITER_PROGRAM: &str = "JUP6LkbZbjS1jKKwapdHNy74zcZ3tLUZoi5QNyVTaV4";

const SUPPORTED_NETWORKS: [Network; 1] = [Network::Solana];

/// Jupiter swap provider for Solana
#[derive(Debug)]
pub struct JupiterProvider {
	config: HttpConfig,
	clients: ClientCache,
}

impl JupiterProvider {
	pub fn new(config: HttpConfig) -> Self {
		Self {
			config,
			clients: ClientCache::new(),
		}
	}

	pub fn with_default_endpoint() -> Self {
		Self::new(HttpConfig::new(DEFAULT_ENDPOINT))
	}

	async fn fetch_quote(&self, request: &PreparedRequest, wallet: &str) -> ProviderResult<Quote> {
		let to_token = request.to_token.as_ref().ok_or(ProviderError::QuoteFailed {
			reason: "swap requires a destination token".to_string(),
		})?;

		let swap_mode = match request.kind {
			SwapMode::Input => "ExactIn",
			SwapMode::Output => "ExactOut",
		};
		let params = [
			("inputMint".to_string(), request.from_token.address.clone()),
			("outputMint".to_string(), to_token.address.clone()),
			("amount".to_string(), request.amount.to_string()),
			("slippageBps".to_string(), request.slippage_bps.to_string()),
			("swapMode".to_string(), swap_mode.to_string()),
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
		let quote_response: Value = response
			.json()
			.await
			.map_err(|e| ProviderError::InvalidResponse { reason: e.to_string() })?;

		let priced = PricedSwap::try_from_value(&quote_response)?;
		debug!(
			in_amount = %priced.in_amount,
			out_amount = %priced.out_amount,
			"jupiter quote received"
		);

		// Second call: materialize the serialized transaction for this wallet
		let swap_body = json!({
			"quoteResponse": quote_response,
			"userPublicKey": wallet,
			"wrapAndUnwrapSol": true,
		});
		let response = client
			.post(self.config.url("/swap"))
			.json(&swap_body)
			.send()
			.await
			.map_err(|e| ProviderError::Http(e.to_string()))?;
		if !response.status().is_success() {
			return Err(ProviderError::HttpStatus {
				status: response.status().as_u16(),
				reason: response.text().await.unwrap_or_default(),
			});
		}
		let swap_response: Value = response
			.json()
			.await
			.map_err(|e| ProviderError::InvalidResponse { reason: e.to_string() })?;

		build_quote(request, &priced, &swap_response)
	}
}

#[async_trait]
impl Provider for JupiterProvider {
	fn name(&self) -> &str {
		"jupiter"
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
			Operation::Swap => self.fetch_quote(request, wallet_address).await,
			other => Err(ProviderError::UnsupportedOperation {
				operation: other.to_string(),
				provider: self.name().to_string(),
			}),
		}
	}
}

/// The pricing fields extracted from a `GET /quote` response
#[derive(Debug, Clone)]
struct PricedSwap {
	in_amount: String,
	out_amount: String,
	price_impact: Option<f64>,
	route: Vec<String>,
}

impl PricedSwap {
	fn try_from_value(value: &Value) -> ProviderResult<Self> {
		let field = |name: &str| -> ProviderResult<String> {
			value
				.get(name)
				.and_then(|v| v.as_str())
				.map(str::to_string)
				.ok_or_else(|| ProviderError::InvalidResponse {
					reason: format!("{} missing in quote response", name),
				})
		};
		let in_amount = field("inAmount")?;
		let out_amount = field("outAmount")?;
		let price_impact = value
			.get("priceImpactPct")
			.and_then(|v| v.as_str())
			.and_then(|s| s.parse().ok());
		let route = value
			.get("routePlan")
			.and_then(|v| v.as_array())
			.map(|plan| {
				plan.iter()
					.filter_map(|step| {
						step.pointer("/swapInfo/label")
							.and_then(|v| v.as_str())
							.map(str::to_string)
					})
					.collect()
			})
			.unwrap_or_default();
		Ok(Self {
			in_amount,
			out_amount,
			price_impact,
			route,
		})
	}
}

/// Assemble the domain quote from both API responses
fn build_quote(
	request: &PreparedRequest,
	priced: &PricedSwap,
	swap_response: &Value,
) -> ProviderResult<Quote> {
	let serialized_tx = swap_response
		.get("swapTransaction")
		.and_then(|v| v.as_str())
		.ok_or_else(|| ProviderError::InvalidResponse {
			reason: "swapTransaction missing in swap response".to_string(),
		})?;

	let mut tx = TransactionPayload::new(
		JUPITER_PROGRAM,
		serialized_tx,
		BaseUnits::zero(),
		request.network,
	);
	if let Some(height) = swap_response
		.get("lastValidBlockHeight")
		.and_then(|v| v.as_u64())
	{
		tx = tx.with_last_valid_block_height(height);
	}

	let to_token = request.receive_token().clone();
	let mut quote = Quote::new(
		"jupiter",
		request.network,
		request.from_token.clone(),
		to_token,
		BaseUnits::new(priced.in_amount.clone()),
		BaseUnits::new(priced.out_amount.clone()),
		request.kind,
		request.slippage_bps,
		tx,
	)
	.with_route(priced.route.clone());
	if let Some(impact) = priced.price_impact {
		quote = quote.with_price_impact(impact);
	}
	if let Some(fee) = swap_response
		.get("prioritizationFeeLamports")
		.and_then(|v| v.as_u64())
	{
		quote = quote.with_estimated_gas(fee.to_string());
	}
	Ok(quote)
}

#[cfg(test)]
mod tests {
	use super::*;
	use courier_types::Token;

	fn prepared_swap() -> PreparedRequest {
		PreparedRequest {
			operation: Operation::Swap,
			network: Network::Solana,
			to_network: None,
			from_token: Token::native(Network::Solana),
			to_token: Some(Token::new(
				"EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
				6,
				"USDC",
				Network::Solana,
			)),
			amount: BaseUnits::new("10000000"),
			kind: SwapMode::Input,
			slippage_bps: 50,
			recipient: None,
		}
	}

	fn quote_fixture() -> Value {
		json!({
			"inputMint": "So11111111111111111111111111111111111111112",
			"outputMint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
			"inAmount": "10000000",
			"outAmount": "1523000",
			"priceImpactPct": "0.0012",
			"routePlan": [
				{"swapInfo": {"label": "Whirlpool"}},
				{"swapInfo": {"label": "Raydium CLMM"}}
			]
		})
	}

	#[test]
	fn test_parse_quote_response() {
		let priced = PricedSwap::try_from_value(&quote_fixture()).unwrap();
		assert_eq!(priced.in_amount, "10000000");
		assert_eq!(priced.out_amount, "1523000");
		assert_eq!(priced.price_impact, Some(0.0012));
		assert_eq!(priced.route, ["Whirlpool", "Raydium CLMM"]);
	}

	#[test]
	fn test_parse_rejects_missing_amounts() {
		let value = json!({"inputMint": "a", "outputMint": "b"});
		assert!(PricedSwap::try_from_value(&value).is_err());
	}

	#[test]
	fn test_build_quote_embeds_serialized_tx() {
		let request = prepared_swap();
		let priced = PricedSwap::try_from_value(&quote_fixture()).unwrap();
		let swap_response = json!({
			"swapTransaction": "AQIDBAU=",
			"lastValidBlockHeight": 251123456u64,
			"prioritizationFeeLamports": 5000u64
		});
		let quote = build_quote(&request, &priced, &swap_response).unwrap();
		assert_eq!(quote.provider, "jupiter");
		assert_eq!(quote.tx.data, "AQIDBAU=");
		assert_eq!(quote.tx.last_valid_block_height, Some(251123456));
		assert_eq!(quote.estimated_gas.as_deref(), Some("5000"));
		assert_eq!(quote.to_amount, BaseUnits::new("1523000"));
	}

	#[tokio::test]
	async fn test_non_swap_operation_is_unsupported() {
		let provider = JupiterProvider::with_default_endpoint();
		let mut request = prepared_swap();
		request.operation = Operation::Stake;
		let result = provider.quote(&request, "wallet").await;
		assert!(matches!(
			result,
			Err(ProviderError::UnsupportedOperation { .. })
		));
	}
}
