//! Transfer model

use crate::error::ClientError;
use crate::traits::Entity;
use crate::validation::positive_amount;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

api_enum! {
    /// Transfer status enumeration
    pub enum TransferStatus {
        Pending => "PENDING",
        Completed => "COMPLETED",
        /// Reversed by staff
        #[serde(alias = "CANCELED")]
        Cancelled => "CANCELLED",
    }
}

impl TransferStatus {
    /// Only completed transfers can be reversed
    pub fn is_reversible(&self) -> bool {
        matches!(self, TransferStatus::Completed)
    }
}

/// Money moved between two accounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: i64,
    pub from_account_id: i64,
    pub to_account_id: i64,
    pub amount: Decimal,
    pub status: TransferStatus,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "super::timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Transfer {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Body of `POST /profile/accounts/transfers/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferCreate {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub to_account_id: i64,
}

impl TransferCreate {
    pub fn check(&self) -> Result<(), ClientError> {
        positive_amount("amount", self.amount)?;
        if self.to_account_id <= 0 {
            return Err(ClientError::Validation(
                "to_account_id must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cancelled_alias() {
        let status: TransferStatus = serde_json::from_str(r#""CANCELED""#).unwrap();
        assert_eq!(status, TransferStatus::Cancelled);
        let status: TransferStatus = serde_json::from_str(r#""CANCELLED""#).unwrap();
        assert_eq!(status, TransferStatus::Cancelled);
        assert!(!status.is_reversible());
        assert!(TransferStatus::Completed.is_reversible());
    }

    #[test]
    fn test_transfer_create_check() {
        let ok = TransferCreate {
            amount: dec!(25.5),
            to_account_id: 3,
        };
        assert!(ok.check().is_ok());

        let bad_target = TransferCreate {
            amount: dec!(25.5),
            to_account_id: 0,
        };
        assert!(bad_target.check().is_err());
    }
}
