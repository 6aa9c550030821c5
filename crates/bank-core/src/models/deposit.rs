//! Deposit account model

use crate::error::ClientError;
use crate::models::account::Account;
use crate::traits::Entity;
use crate::validation::{non_negative_rate, positive_amount};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Interest-bearing account funded from another account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositAccount {
    pub id: i64,
    pub interest_rate: Decimal,
    pub account: Account,
    pub from_account_id: i64,
}

impl Entity for DepositAccount {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Deposit part of a deposit account request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepositTerms {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub interest_rate: Decimal,
    pub from_account_id: i64,
}

/// Account part of a deposit account request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewDepositAccount {
    pub bank_id: i64,
}

/// Body of `POST /profile/accounts/deposit_accounts/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepositAccountCreate {
    pub deposit_create_request: DepositTerms,
    pub account_create_request: NewDepositAccount,
}

impl DepositAccountCreate {
    pub fn new(bank_id: i64, from_account_id: i64, amount: Decimal, interest_rate: Decimal) -> Self {
        Self {
            deposit_create_request: DepositTerms {
                amount,
                interest_rate,
                from_account_id,
            },
            account_create_request: NewDepositAccount { bank_id },
        }
    }

    pub fn check(&self) -> Result<(), ClientError> {
        let deposit = &self.deposit_create_request;
        positive_amount("amount", deposit.amount)?;
        non_negative_rate("interest_rate", deposit.interest_rate)?;
        if deposit.from_account_id <= 0 {
            return Err(ClientError::Validation(
                "from_account_id must be positive".to_string(),
            ));
        }
        if self.account_create_request.bank_id <= 0 {
            return Err(ClientError::Validation("bank_id must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deposit_check() {
        assert!(DepositAccountCreate::new(1, 5, dec!(1000), dec!(7)).check().is_ok());
        assert!(DepositAccountCreate::new(1, 0, dec!(1000), dec!(7)).check().is_err());
        assert!(DepositAccountCreate::new(1, 5, dec!(1000), dec!(-7)).check().is_err());
    }
}
