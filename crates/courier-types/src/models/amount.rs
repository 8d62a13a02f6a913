//! Integer base-unit amounts carried as strings

use serde::{Deserialize, Serialize};

/// Token amount in integer base units, represented as a digit string to
/// preserve precision across serialization boundaries.
///
/// Arithmetic goes through `u128`, which comfortably covers real token
/// supplies; values beyond that are rejected rather than truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseUnits(pub String);

impl BaseUnits {
	/// Create from a raw digit string
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Zero amount
	pub fn zero() -> Self {
		Self("0".to_string())
	}

	pub fn from_u128(value: u128) -> Self {
		Self(value.to_string())
	}

	/// Get the raw string value
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Parse as u128 for arithmetic
	pub fn as_u128(&self) -> Result<u128, AmountError> {
		self.0
			.parse()
			.map_err(|_| AmountError::OutOfRange(self.0.clone()))
	}

	/// Check if the value is zero
	pub fn is_zero(&self) -> bool {
		!self.0.is_empty() && self.0.chars().all(|c| c == '0')
	}

	/// Validate that the string is a non-empty run of digits
	pub fn validate(&self) -> Result<(), AmountError> {
		if self.0.is_empty() {
			return Err(AmountError::Empty);
		}
		if !self.0.chars().all(|c| c.is_ascii_digit()) {
			return Err(AmountError::NotNumeric(self.0.clone()));
		}
		Ok(())
	}

	pub fn checked_add(&self, other: &BaseUnits) -> Result<BaseUnits, AmountError> {
		let sum = self
			.as_u128()?
			.checked_add(other.as_u128()?)
			.ok_or_else(|| AmountError::OutOfRange(format!("{} + {}", self.0, other.0)))?;
		Ok(BaseUnits::from_u128(sum))
	}

	/// Subtraction saturating at zero; shortfalls are detected by comparison,
	/// not by underflow.
	pub fn saturating_sub(&self, other: &BaseUnits) -> Result<BaseUnits, AmountError> {
		Ok(BaseUnits::from_u128(
			self.as_u128()?.saturating_sub(other.as_u128()?),
		))
	}

	/// Convert a human decimal string (e.g. "0.01") into base units given the
	/// token's decimals. Fractional digits beyond `decimals` are truncated, so
	/// the result is always a whole number of base units.
	pub fn from_decimal(value: &str, decimals: u8) -> Result<BaseUnits, AmountError> {
		let value = value.trim();
		if value.is_empty() {
			return Err(AmountError::Empty);
		}

		let (whole, frac) = match value.split_once('.') {
			Some((w, f)) => (w, f),
			None => (value, ""),
		};
		if whole.is_empty() && frac.is_empty() {
			return Err(AmountError::NotNumeric(value.to_string()));
		}
		let whole = if whole.is_empty() { "0" } else { whole };
		if !whole.chars().all(|c| c.is_ascii_digit())
			|| !frac.chars().all(|c| c.is_ascii_digit())
		{
			return Err(AmountError::NotNumeric(value.to_string()));
		}

		let mut frac = frac.to_string();
		frac.truncate(decimals as usize);
		while frac.len() < decimals as usize {
			frac.push('0');
		}

		let combined = format!("{}{}", whole, frac);
		let parsed: u128 = combined
			.parse()
			.map_err(|_| AmountError::OutOfRange(value.to_string()))?;
		Ok(BaseUnits::from_u128(parsed))
	}

	/// Render base units as a human decimal string given the token's decimals
	pub fn to_decimal(&self, decimals: u8) -> Result<String, AmountError> {
		let raw = self.as_u128()?;
		if decimals == 0 {
			return Ok(raw.to_string());
		}
		let scale = 10u128
			.checked_pow(decimals as u32)
			.ok_or_else(|| AmountError::OutOfRange(self.0.clone()))?;
		let whole = raw / scale;
		let frac = raw % scale;
		if frac == 0 {
			return Ok(whole.to_string());
		}
		let frac = format!("{:0width$}", frac, width = decimals as usize);
		Ok(format!("{}.{}", whole, frac.trim_end_matches('0')))
	}
}

impl std::fmt::Display for BaseUnits {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<u128> for BaseUnits {
	fn from(value: u128) -> Self {
		Self::from_u128(value)
	}
}

impl From<u64> for BaseUnits {
	fn from(value: u64) -> Self {
		Self::from_u128(value as u128)
	}
}

/// Errors from amount parsing and arithmetic
#[derive(Debug, Clone, thiserror::Error)]
pub enum AmountError {
	#[error("amount cannot be empty")]
	Empty,
	#[error("amount is not numeric: {0}")]
	NotNumeric(String),
	#[error("amount out of range: {0}")]
	OutOfRange(String),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_decimal_basic() {
		assert_eq!(
			BaseUnits::from_decimal("0.01", 9).unwrap(),
			BaseUnits::new("10000000")
		);
		assert_eq!(BaseUnits::from_decimal("1", 6).unwrap(), BaseUnits::new("1000000"));
		assert_eq!(BaseUnits::from_decimal("2.5", 0).unwrap(), BaseUnits::new("2"));
	}

	#[test]
	fn test_from_decimal_truncates_sub_unit() {
		// Anything below one base unit is dropped, never rounded up
		assert_eq!(
			BaseUnits::from_decimal("0.0000001234", 6).unwrap(),
			BaseUnits::zero()
		);
		assert_eq!(
			BaseUnits::from_decimal("1.9999999", 6).unwrap(),
			BaseUnits::new("1999999")
		);
	}

	#[test]
	fn test_from_decimal_rejects_garbage() {
		assert!(BaseUnits::from_decimal("", 6).is_err());
		assert!(BaseUnits::from_decimal("1.2.3", 6).is_err());
		assert!(BaseUnits::from_decimal("abc", 6).is_err());
		assert!(BaseUnits::from_decimal("-1", 6).is_err());
	}

	#[test]
	fn test_to_decimal_roundtrip() {
		let units = BaseUnits::from_decimal("0.0003", 18).unwrap();
		assert_eq!(units.to_decimal(18).unwrap(), "0.0003");
		assert_eq!(BaseUnits::new("1000000").to_decimal(6).unwrap(), "1");
	}

	#[test]
	fn test_arithmetic() {
		let a = BaseUnits::new("100");
		let b = BaseUnits::new("30");
		assert_eq!(a.checked_add(&b).unwrap(), BaseUnits::new("130"));
		assert_eq!(b.saturating_sub(&a).unwrap(), BaseUnits::zero());
		assert!(BaseUnits::new("0000").is_zero());
	}
}
