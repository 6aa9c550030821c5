//! Loan model
//!
//! A loan account ties a loan to the account it is paid out to. Loan
//! transactions record credits and repayments against the loan account.

use crate::error::ClientError;
use crate::models::account::Account;
use crate::traits::Entity;
use crate::validation::{loan_term, non_negative_rate, positive_amount};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

api_enum! {
    /// Loan status enumeration
    pub enum LoanStatus {
        /// Waiting for staff approval
        Pending => "PENDING",
        Active => "ACTIVE",
        Rejected => "REJECTED",
        /// Fully repaid
        Completed => "COMPLETED",
    }
}

api_enum! {
    /// Direction of a loan transaction
    pub enum LoanTransactionType {
        Credit => "CREDIT",
        Payment => "PAYMENT",
    }
}

/// Loan terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: i64,
    pub amount: Decimal,
    pub term_months: u32,
    pub interest_rate: Decimal,
    pub status: LoanStatus,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "super::timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Loan bound to the account it is paid out to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanAccount {
    pub id: i64,
    pub account_id: i64,
    pub account: Account,
    pub loan_id: i64,
    pub loan: Loan,
    pub user_id: i64,
}

impl Entity for LoanAccount {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Credit or repayment on a loan account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTransaction {
    pub id: i64,
    pub loan_account_id: i64,
    #[serde(rename = "type")]
    pub transaction_type: LoanTransactionType,
    pub amount: Decimal,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Entity for LoanTransaction {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Loan part of a loan account request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanTerms {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub term_months: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub interest_rate: Decimal,
}

/// Account part of a loan account request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewLoanAccount {
    pub bank_id: i64,
    pub currency: String,
}

/// Body of `POST /profile/accounts/loan_accounts/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanAccountCreate {
    pub loan_create_request: LoanTerms,
    pub account_create_request: NewLoanAccount,
}

impl LoanAccountCreate {
    /// Loan in the default currency (RUB)
    pub fn new(bank_id: i64, amount: Decimal, term_months: u32, interest_rate: Decimal) -> Self {
        Self {
            loan_create_request: LoanTerms {
                amount,
                term_months,
                interest_rate,
            },
            account_create_request: NewLoanAccount {
                bank_id,
                currency: "RUB".to_string(),
            },
        }
    }

    pub fn check(&self) -> Result<(), ClientError> {
        let loan = &self.loan_create_request;
        positive_amount("amount", loan.amount)?;
        loan_term(loan.term_months)?;
        non_negative_rate("interest_rate", loan.interest_rate)?;
        if self.account_create_request.bank_id <= 0 {
            return Err(ClientError::Validation("bank_id must be positive".to_string()));
        }
        Ok(())
    }
}

/// Body of `POST /profile/accounts/loan_accounts/{id}/transactions`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanTransactionCreate {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl LoanTransactionCreate {
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
    fn test_loan_request_nesting() {
        let req = LoanAccountCreate::new(2, dec!(5000), 12, dec!(9.5));
        assert!(req.check().is_ok());
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "loan_create_request": {"amount": 5000.0, "term_months": 12, "interest_rate": 9.5},
                "account_create_request": {"bank_id": 2, "currency": "RUB"}
            })
        );
    }

    #[test]
    fn test_loan_request_rejects_odd_term() {
        let req = LoanAccountCreate::new(2, dec!(5000), 10, dec!(9.5));
        assert!(req.check().is_err());
    }

    #[test]
    fn test_decode_loan_transaction() {
        let tx: LoanTransaction = serde_json::from_value(json!({
            "id": 3, "loan_account_id": 11, "type": "PAYMENT", "amount": "250.00",
            "created_at": "2025-04-02T08:30:00Z"
        }))
        .unwrap();
        assert_eq!(tx.transaction_type, LoanTransactionType::Payment);
        assert_eq!(tx.amount, dec!(250.00));
    }
}
