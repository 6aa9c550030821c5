//! Client-side input checks run before a request is sent

use crate::error::ClientError;
use rust_decimal::Decimal;
use tracing::debug;

/// Parse a path or query identifier
///
/// Accepts only positive integers. `what` names the identifier in the
/// error message ("account id", "loan id", ...).
pub fn parse_id(raw: &str, what: &str) -> Result<i64, ClientError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            debug!(raw, what, "Rejected identifier");
            Err(ClientError::Validation(format!("invalid {}: {:?}", what, raw)))
        }
    }
}

/// Parse an optional query identifier, treating a missing value as invalid
pub fn require_id(raw: Option<&str>, what: &str) -> Result<i64, ClientError> {
    match raw {
        Some(raw) => parse_id(raw, what),
        None => Err(ClientError::Validation(format!("missing {}", what))),
    }
}

/// Amount must be strictly positive
pub fn positive_amount(field: &str, amount: Decimal) -> Result<(), ClientError> {
    if amount.is_sign_positive() && !amount.is_zero() {
        Ok(())
    } else {
        Err(ClientError::Validation(format!("{} must be positive", field)))
    }
}

/// Interest rate must not be negative
pub fn non_negative_rate(field: &str, rate: Decimal) -> Result<(), ClientError> {
    if rate.is_sign_negative() && !rate.is_zero() {
        Err(ClientError::Validation(format!("{} must not be negative", field)))
    } else {
        Ok(())
    }
}

/// Loan terms offered by the API, in months
pub const LOAN_TERMS: [u32; 6] = [3, 6, 12, 24, 36, 48];

/// Loan term must be one of [`LOAN_TERMS`]
pub fn loan_term(months: u32) -> Result<(), ClientError> {
    if LOAN_TERMS.contains(&months) {
        Ok(())
    } else {
        Err(ClientError::Validation(format!(
            "term_months must be one of {:?}, got {}",
            LOAN_TERMS, months
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_id_accepts_positive() {
        assert_eq!(parse_id("42", "account id").unwrap(), 42);
        assert_eq!(parse_id(" 7 ", "account id").unwrap(), 7);
    }

    #[test]
    fn test_parse_id_rejects_non_positive_and_garbage() {
        for raw in ["0", "-3", "abc", "", "4.5", "1e3"] {
            let err = parse_id(raw, "loan id").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation, "input {:?}", raw);
        }
    }

    #[test]
    fn test_require_id_missing() {
        let err = require_id(None, "account id").unwrap_err();
        assert_eq!(err, ClientError::Validation("missing account id".to_string()));
    }

    #[test]
    fn test_amount_and_rate_checks() {
        assert!(positive_amount("amount", dec!(0.01)).is_ok());
        assert!(positive_amount("amount", dec!(0)).is_err());
        assert!(positive_amount("amount", dec!(-5)).is_err());

        assert!(non_negative_rate("interest_rate", dec!(0)).is_ok());
        assert!(non_negative_rate("interest_rate", dec!(12.5)).is_ok());
        let err = non_negative_rate("interest_rate", dec!(-1)).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: interest_rate must not be negative");
    }

    #[test]
    fn test_loan_term_check() {
        assert!(loan_term(12).is_ok());
        assert!(loan_term(48).is_ok());
        assert!(loan_term(7).is_err());
    }
}
