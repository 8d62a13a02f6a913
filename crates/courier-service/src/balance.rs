//! Pre-execution balance validation
//!
//! A pure check against live chain state: the quote is never mutated and
//! shortfalls are verdicts, not errors. Only a failed chain read surfaces
//! as an error.

use crate::adjuster::GasBuffers;
use courier_types::{BaseUnits, ChainClient, EngineResult, Quote, Token};
use std::sync::Arc;
use tracing::debug;

/// Outcome of a balance check; `message` is caller-presentable verbatim
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceVerdict {
	pub is_valid: bool,
	pub message: Option<String>,
}

impl BalanceVerdict {
	fn valid() -> Self {
		Self {
			is_valid: true,
			message: None,
		}
	}

	fn short(message: String) -> Self {
		Self {
			is_valid: false,
			message: Some(message),
		}
	}
}

/// Validates that a wallet can fund a quote plus its gas reserve
pub struct BalanceValidator {
	chain: Arc<dyn ChainClient>,
	buffers: GasBuffers,
}

impl BalanceValidator {
	pub fn new(chain: Arc<dyn ChainClient>, buffers: GasBuffers) -> Self {
		Self { chain, buffers }
	}

	/// Check `quote` against the wallet's live balances
	///
	/// Native spends require `amount + buffer` in one figure. Token spends
	/// require the token balance to cover the amount and, separately, the
	/// native balance to cover at least the buffer for gas.
	pub async fn check(&self, quote: &Quote, wallet_address: &str) -> EngineResult<BalanceVerdict> {
		let spend = quote.from_amount.as_u128()?;
		let buffer = self.buffers.buffer_for(quote.network).as_u128()?;
		let native_balance = self
			.chain
			.native_balance(quote.network, wallet_address)
			.await?
			.as_u128()?;

		if quote.from_token.is_native() {
			let required = spend.saturating_add(buffer);
			if native_balance >= required {
				return Ok(BalanceVerdict::valid());
			}
			return Ok(BalanceVerdict::short(shortfall_message(
				&quote.from_token,
				required,
				native_balance,
				"including gas buffer",
			)));
		}

		let token_balance = self
			.chain
			.token_balance(quote.network, &quote.from_token.address, wallet_address)
			.await?
			.as_u128()?;
		if token_balance < spend {
			return Ok(BalanceVerdict::short(shortfall_message(
				&quote.from_token,
				spend,
				token_balance,
				"token balance",
			)));
		}
		if native_balance < buffer {
			let native = Token::native(quote.network);
			debug!(network = %quote.network, native_balance, buffer, "gas reserve short");
			return Ok(BalanceVerdict::short(shortfall_message(
				&native,
				buffer,
				native_balance,
				"gas buffer",
			)));
		}
		Ok(BalanceVerdict::valid())
	}
}

fn shortfall_message(token: &Token, required: u128, available: u128, context: &str) -> String {
	let required = BaseUnits::from_u128(required)
		.to_decimal(token.decimals)
		.unwrap_or_else(|_| required.to_string());
	let available = BaseUnits::from_u128(available)
		.to_decimal(token.decimals)
		.unwrap_or_else(|_| available.to_string());
	format!(
		"Insufficient {} balance: required {} {} ({}), available {} {}",
		token.symbol, required, token.symbol, context, available, token.symbol
	)
}
