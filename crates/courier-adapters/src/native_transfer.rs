//! Transfer provider: payloads built locally, no external backend
//!
//! Plain transfers need no pricing, so the quote is 1:1 and the payload is
//! assembled from first principles: a value transfer for the native
//! currency, `transfer(address,uint256)` calldata for ERC-20 tokens. A
//! payload with empty calldata is by contract a bare value transfer; the
//! wallet assembles the chain-native instruction for it.

use async_trait::async_trait;
use courier_types::{
	ApprovalSupport, BaseUnits, ChainClient, Network, Operation, PreparedRequest, Provider,
	ProviderError, ProviderResult, Quote, TransactionPayload,
};
use std::sync::Arc;

use crate::approvals::{encode_transfer, Erc20Approvals};

/// Local transfer provider covering every known network
#[derive(Debug)]
pub struct TransferProvider {
	approvals: Erc20Approvals,
	networks: Vec<Network>,
}

impl TransferProvider {
	pub fn new(chain: Arc<dyn ChainClient>) -> Self {
		Self {
			approvals: Erc20Approvals::new(chain),
			networks: Network::all().to_vec(),
		}
	}

	fn build_payload(&self, request: &PreparedRequest, recipient: &str) -> ProviderResult<TransactionPayload> {
		if request.from_token.is_native() {
			return Ok(TransactionPayload::new(
				recipient,
				"",
				request.amount.clone(),
				request.network,
			));
		}
		if !request.network.uses_allowances() {
			// SPL token transfers need ledger-specific instruction assembly
			// this provider does not do; a token-program backend must serve
			// them instead.
			return Err(ProviderError::UnsupportedOperation {
				operation: "ledger-model token transfer".to_string(),
				provider: self.name().to_string(),
			});
		}
		let data = encode_transfer(recipient, &request.amount)?;
		Ok(TransactionPayload::new(
			request.from_token.address.clone(),
			data,
			BaseUnits::zero(),
			request.network,
		))
	}
}

#[async_trait]
impl Provider for TransferProvider {
	fn name(&self) -> &str {
		"transfer"
	}

	fn supported_networks(&self) -> &[Network] {
		&self.networks
	}

	async fn quote(
		&self,
		request: &PreparedRequest,
		_wallet_address: &str,
	) -> ProviderResult<Quote> {
		if request.operation != Operation::Transfer {
			return Err(ProviderError::UnsupportedOperation {
				operation: request.operation.to_string(),
				provider: self.name().to_string(),
			});
		}
		let recipient = request.recipient.as_deref().ok_or(ProviderError::QuoteFailed {
			reason: "transfer requires a recipient".to_string(),
		})?;

		let tx = self.build_payload(request, recipient)?;
		Ok(Quote::new(
			self.name(),
			request.network,
			request.from_token.clone(),
			request.from_token.clone(),
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
