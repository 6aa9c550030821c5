//! Account model
//!
//! Accounts belong to a user and a bank. Loan, deposit and enterprise
//! records each embed the account they are backed by.

use crate::error::ClientError;
use crate::traits::Entity;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

api_enum! {
    /// Account status enumeration
    pub enum AccountStatus {
        /// Open for operations
        Active => "ACTIVE",
        /// Blocked by staff
        Blocked => "BLOCKED",
        /// Frozen, balance kept but no operations
        Frozen => "FROZEN",
        /// Waiting for staff approval
        OnConsideration => "ON_CONSIDERATION",
        /// Closed
        Cancelled => "CANCELLED",
    }
}

api_enum! {
    /// Account purpose enumeration
    pub enum AccountType {
        Salary => "SALARY",
        Deposit => "DEPOSIT",
        Settlement => "SETTLEMENT",
        Loan => "LOAN",
        Enterprise => "ENTERPRISE",
    }
}

/// Account entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: i64,

    /// Owner
    pub user_id: i64,

    /// Bank holding the account
    pub bank_id: i64,

    /// Current balance
    pub balance: Decimal,

    /// Account status
    pub status: AccountStatus,

    /// Account purpose; not every API route returns it
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,

    /// Creation timestamp
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(with = "super::timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Entity for Account {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Body of `POST /profile/accounts`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountCreate {
    pub bank_id: i64,
}

impl AccountCreate {
    pub fn check(&self) -> Result<(), ClientError> {
        if self.bank_id <= 0 {
            return Err(ClientError::Validation("bank_id must be positive".to_string()));
        }
        Ok(())
    }
}

/// Body of `PATCH /profile/accounts/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountUpdate {
    pub status: AccountStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_decode_account_without_type() {
        let json = r#"{
            "id": 42,
            "user_id": 7,
            "bank_id": 1,
            "balance": "150.50",
            "status": "ACTIVE",
            "created_at": "2025-01-10T09:00:00Z",
            "updated_at": "2025-01-11T09:00:00Z"
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.id, 42);
        assert_eq!(account.balance, dec!(150.50));
        assert_eq!(account.status, AccountStatus::Active);
        assert!(account.account_type.is_none());
        assert_eq!(Entity::id(&account), 42);
    }

    #[test]
    fn test_decode_numeric_balance_and_type() {
        let json = r#"{
            "id": 1, "user_id": 2, "bank_id": 3, "balance": 10,
            "status": "ON_CONSIDERATION", "type": "SALARY",
            "created_at": "2025-01-10T09:00:00Z", "updated_at": "2025-01-10T09:00:00Z",
            "currency": "RUB"
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.balance, dec!(10));
        assert_eq!(account.status, AccountStatus::OnConsideration);
        assert_eq!(account.account_type, Some(AccountType::Salary));
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(AccountStatus::from_str("frozen").unwrap(), AccountStatus::Frozen);
        assert_eq!(
            AccountStatus::from_str("on_consideration").unwrap(),
            AccountStatus::OnConsideration
        );
        assert!(AccountStatus::from_str("closed").is_err());
    }

    #[test]
    fn test_account_create_check() {
        assert!(AccountCreate { bank_id: 1 }.check().is_ok());
        assert!(AccountCreate { bank_id: 0 }.check().is_err());
    }
}
