//! Payment amount validation using rust_decimal for precision
//!
//! The HTTP boundary hands the raw JSON value through untouched, so this is
//! the single place that decides what counts as a payable amount. `150`,
//! `150.5` and `"150.00"` are accepted; `"abc"`, `-5`, `0` and anything
//! beyond the sanity ceiling are rejected before any record is touched.

use rust_decimal::prelude::*;
use serde_json::Value;

use super::error::{RegistryError, RegistryResult};

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed payment amount (₱1,000,000)
const MAX_PAYMENT_AMOUNT: i64 = 1_000_000;

/// Parse and validate a payment amount from its raw JSON form
pub fn parse_amount(raw: &Value) -> RegistryResult<Decimal> {
    let amount = match raw {
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .map_err(|_| RegistryError::InvalidAmount(format!("not a valid amount: {}", n)))?,
        Value::String(s) => Decimal::from_str(s.trim())
            .map_err(|_| RegistryError::InvalidAmount(format!("not a valid amount: {:?}", s)))?,
        other => {
            return Err(RegistryError::InvalidAmount(format!(
                "amount must be a number, got {}",
                other
            )));
        }
    };

    if amount <= Decimal::ZERO {
        return Err(RegistryError::InvalidAmount(format!(
            "amount must be positive, got {}",
            amount
        )));
    }
    if amount > Decimal::from(MAX_PAYMENT_AMOUNT) {
        return Err(RegistryError::InvalidAmount(format!(
            "amount exceeds maximum allowed ({}), got {}",
            MAX_PAYMENT_AMOUNT, amount
        )));
    }

    Ok(amount.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_amount(&json!(150)).unwrap(), Decimal::new(150, 0));
        assert_eq!(parse_amount(&json!(150.5)).unwrap(), Decimal::new(1505, 1));
        assert_eq!(
            parse_amount(&json!("150.00")).unwrap(),
            Decimal::new(15000, 2)
        );
        assert_eq!(parse_amount(&json!(" 99.9 ")).unwrap(), Decimal::new(999, 1));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!(matches!(
            parse_amount(&json!("abc")),
            Err(RegistryError::InvalidAmount(_))
        ));
        assert!(parse_amount(&json!(null)).is_err());
        assert!(parse_amount(&json!([150])).is_err());
        assert!(parse_amount(&json!({"value": 150})).is_err());
    }

    #[test]
    fn rejects_zero_negative_and_absurd_amounts() {
        assert!(parse_amount(&json!(0)).is_err());
        assert!(parse_amount(&json!(-5)).is_err());
        assert!(parse_amount(&json!("-5")).is_err());
        assert!(parse_amount(&json!(2_000_000)).is_err());
    }

    #[test]
    fn rounds_to_the_cent_half_up() {
        assert_eq!(
            parse_amount(&json!(150.005)).unwrap(),
            Decimal::new(15001, 2)
        );
        assert_eq!(
            parse_amount(&json!("150.004")).unwrap(),
            Decimal::new(15000, 2)
        );
    }
}
