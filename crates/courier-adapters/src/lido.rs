//! Lido adapter: ETH staking deposits on Ethereum
//!
//! Staking goes through the stETH contract's payable `submit(address)`;
//! the deposit mints stETH 1:1 against the attached value, so the quote is
//! priced locally without a backend call.

use async_trait::async_trait;
use courier_types::{
	ApprovalSupport, ChainClient, Network, Operation, PreparedRequest, Provider, ProviderError,
	ProviderResult, Quote, Token, TransactionPayload,
};
use std::sync::Arc;

use crate::approvals::Erc20Approvals;

/// Lido stETH token/staking contract on Ethereum mainnet
pub const STETH_CONTRACT: &str = "0xae7ab96520DE3A18E5e111B5EaAb095312D7fE84";

/// Selector for `submit(address)`: `keccak256(...)[:4]`, plus a zero
/// referral argument
const SUBMIT_CALLDATA: &str =
	"0xa1903eab0000000000000000000000000000000000000000000000000000000000000000";

const SUPPORTED_NETWORKS: [Network; 1] = [Network::Ethereum];

/// Lido staking provider
#[derive(Debug)]
pub struct LidoProvider {
	approvals: Erc20Approvals,
}

impl LidoProvider {
	pub fn new(chain: Arc<dyn ChainClient>) -> Self {
		Self {
			approvals: Erc20Approvals::new(chain),
		}
	}

	fn steth_token() -> Token {
		Token::new(STETH_CONTRACT, 18, "stETH", Network::Ethereum)
	}
}

#[async_trait]
impl Provider for LidoProvider {
	fn name(&self) -> &str {
		"lido"
	}

	fn supported_networks(&self) -> &[Network] {
		&SUPPORTED_NETWORKS
	}

	async fn quote(
		&self,
		request: &PreparedRequest,
		_wallet_address: &str,
	) -> ProviderResult<Quote> {
		if request.operation != Operation::Stake {
			return Err(ProviderError::UnsupportedOperation {
				operation: request.operation.to_string(),
				provider: self.name().to_string(),
			});
		}
		if !request.from_token.is_native() {
			return Err(ProviderError::QuoteFailed {
				reason: "lido stakes the native currency only".to_string(),
			});
		}

		let tx = TransactionPayload::new(
			STETH_CONTRACT,
			SUBMIT_CALLDATA,
			request.amount.clone(),
			request.network,
		);
		Ok(Quote::new(
			self.name(),
			request.network,
			request.from_token.clone(),
			Self::steth_token(),
			request.amount.clone(),
			request.amount.clone(),
			request.kind,
			0,
			tx,
		)
		.with_route(vec![self.name().to_string()]))
	}

	fn approvals(&self) -> Option<&dyn ApprovalSupport> {
		Some(&self.approvals)
	}
}
