//! ERC-20 approval support shared by account-model providers
//!
//! Allowance reads go through the chain client; approval transactions are
//! plain ERC-20 `approve(address,uint256)` calls built locally from the
//! function selector and ABI-encoded arguments.

use async_trait::async_trait;
use courier_types::{
	ApprovalSupport, BaseUnits, ChainClient, Network, ProviderError, ProviderResult,
	TransactionPayload,
};
use std::sync::Arc;

/// Selector for `approve(address,uint256)`: `keccak256(...)[:4]`
pub const APPROVE_SELECTOR: [u8; 4] = [0x09, 0x5e, 0xa7, 0xb3];

/// Selector for `transfer(address,uint256)`: `keccak256(...)[:4]`
pub const TRANSFER_SELECTOR: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];

/// Decode a 20-byte EVM address from its hex form
fn decode_address(address: &str) -> ProviderResult<[u8; 20]> {
	let stripped = address
		.strip_prefix("0x")
		.or_else(|| address.strip_prefix("0X"))
		.unwrap_or(address);
	let bytes = hex::decode(stripped)
		.map_err(|_| ProviderError::InvalidResponse {
			reason: format!("invalid address: {}", address),
		})?;
	bytes.try_into().map_err(|_| ProviderError::InvalidResponse {
		reason: format!("address is not 20 bytes: {}", address),
	})
}

/// ABI-encode one 32-byte word holding a left-padded address
fn encode_address_word(address: &[u8; 20]) -> [u8; 32] {
	let mut word = [0u8; 32];
	word[12..].copy_from_slice(address);
	word
}

/// ABI-encode one 32-byte word holding a big-endian amount
fn encode_amount_word(amount: u128) -> [u8; 32] {
	let mut word = [0u8; 32];
	word[16..].copy_from_slice(&amount.to_be_bytes());
	word
}

/// Build `approve(spender, amount)` calldata as a 0x-prefixed hex string
pub fn encode_approve(spender: &str, amount: &BaseUnits) -> ProviderResult<String> {
	let spender = decode_address(spender)?;
	let amount = amount
		.as_u128()
		.map_err(|e| ProviderError::InvalidResponse { reason: e.to_string() })?;
	let mut calldata = Vec::with_capacity(4 + 64);
	calldata.extend_from_slice(&APPROVE_SELECTOR);
	calldata.extend_from_slice(&encode_address_word(&spender));
	calldata.extend_from_slice(&encode_amount_word(amount));
	Ok(format!("0x{}", hex::encode(calldata)))
}

/// Build `transfer(recipient, amount)` calldata as a 0x-prefixed hex string
pub fn encode_transfer(recipient: &str, amount: &BaseUnits) -> ProviderResult<String> {
	let recipient = decode_address(recipient)?;
	let amount = amount
		.as_u128()
		.map_err(|e| ProviderError::InvalidResponse { reason: e.to_string() })?;
	let mut calldata = Vec::with_capacity(4 + 64);
	calldata.extend_from_slice(&TRANSFER_SELECTOR);
	calldata.extend_from_slice(&encode_address_word(&recipient));
	calldata.extend_from_slice(&encode_amount_word(amount));
	Ok(format!("0x{}", hex::encode(calldata)))
}

/// The approval capability group backed by a chain client
#[derive(Clone)]
pub struct Erc20Approvals {
	chain: Arc<dyn ChainClient>,
}

impl Erc20Approvals {
	pub fn new(chain: Arc<dyn ChainClient>) -> Self {
		Self { chain }
	}
}

impl std::fmt::Debug for Erc20Approvals {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Erc20Approvals").finish()
	}
}

#[async_trait]
impl ApprovalSupport for Erc20Approvals {
	async fn check_allowance(
		&self,
		network: Network,
		token: &str,
		owner: &str,
		spender: &str,
	) -> ProviderResult<BaseUnits> {
		self.chain
			.allowance(network, token, owner, spender)
			.await
			.map_err(|e| ProviderError::ChainRead(e.to_string()))
	}

	async fn build_approve_transaction(
		&self,
		network: Network,
		token: &str,
		spender: &str,
		amount: &BaseUnits,
		_owner: &str,
	) -> ProviderResult<TransactionPayload> {
		let data = encode_approve(spender, amount)?;
		Ok(TransactionPayload::new(token, data, BaseUnits::zero(), network))
	}
}
