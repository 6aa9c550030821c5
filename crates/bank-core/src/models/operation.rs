//! Cash operations on an account: additions (top-ups) and withdrawals

use crate::error::ClientError;
use crate::traits::Entity;
use crate::validation::positive_amount;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

api_enum! {
    /// Where added money came from
    pub enum AdditionSource {
        BankTransfer => "BANK_TRANSFER",
        CardPayment => "CARD_PAYMENT",
        Cash => "CASH",
        Crypto => "CRYPTO",
        Other => "OTHER",
    }
}

api_enum! {
    /// Where withdrawn money went
    pub enum WithdrawalSource {
        CardPayment => "CARD_PAYMENT",
        Cash => "CASH",
        Crypto => "CRYPTO",
        Other => "OTHER",
    }
}

/// Money added to an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Addition {
    pub id: i64,
    pub amount: Decimal,
    pub source: AdditionSource,
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Entity for Addition {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Money taken out of an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Withdrawal {
    pub id: i64,
    pub amount: Decimal,
    pub source: WithdrawalSource,
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Entity for Withdrawal {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Body of `POST /profile/accounts/additions/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdditionCreate {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub source: AdditionSource,
}

impl AdditionCreate {
    pub fn check(&self) -> Result<(), ClientError> {
        positive_amount("amount", self.amount)
    }
}

/// Body of `POST /profile/accounts/withdrawals/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WithdrawalCreate {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub source: WithdrawalSource,
}

impl WithdrawalCreate {
    pub fn check(&self) -> Result<(), ClientError> {
        positive_amount("amount", self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_addition_body_shape() {
        let body = AdditionCreate {
            amount: dec!(100),
            source: AdditionSource::Cash,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"amount": 100.0, "source": "CASH"})
        );
    }

    #[test]
    fn test_decode_addition_without_account() {
        let addition: Addition = serde_json::from_value(json!({
            "id": 9, "amount": 100, "source": "CASH", "created_at": "2025-03-01T12:00:00Z"
        }))
        .unwrap();
        assert_eq!(addition.id, 9);
        assert_eq!(addition.source, AdditionSource::Cash);
        assert!(addition.account_id.is_none());
    }

    #[test]
    fn test_withdrawal_rejects_zero() {
        let body = WithdrawalCreate {
            amount: dec!(0),
            source: WithdrawalSource::Cash,
        };
        assert!(body.check().is_err());
        assert!("bank_transfer".parse::<WithdrawalSource>().is_err());
        assert_eq!(
            "bank_transfer".parse::<AdditionSource>().unwrap(),
            AdditionSource::BankTransfer
        );
    }
}
