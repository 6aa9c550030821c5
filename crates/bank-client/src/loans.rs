//! Loans API

use bank_core::models::{LoanAccount, LoanAccountCreate, LoanTransaction, LoanTransactionCreate};
use bank_core::ClientError;
use tracing::{info, instrument};

use crate::client::ApiClient;
use crate::request::ApiRequest;

impl ApiClient {
    /// Applies for a loan; the loan starts out pending approval
    #[instrument(skip(self))]
    pub async fn create_loan_account(
        &self,
        body: &LoanAccountCreate,
    ) -> Result<LoanAccount, ClientError> {
        body.check()?;
        let loan_account: LoanAccount = self
            .execute(ApiRequest::post("/profile/accounts/loan_accounts/").json(body)?)
            .await?;
        info!(
            id = loan_account.id,
            amount = %loan_account.loan.amount,
            status = %loan_account.loan.status,
            "Loan account created"
        );
        Ok(loan_account)
    }

    #[instrument(skip(self))]
    pub async fn get_loan_account(&self, loan_account_id: i64) -> Result<LoanAccount, ClientError> {
        self.execute(ApiRequest::get(format!(
            "/profile/accounts/loan_accounts/{}",
            loan_account_id
        )))
        .await
    }

    #[instrument(skip(self))]
    pub async fn list_loan_transactions(
        &self,
        loan_account_id: i64,
    ) -> Result<Vec<LoanTransaction>, ClientError> {
        self.execute(ApiRequest::get(format!(
            "/profile/accounts/loan_accounts/{}/transactions",
            loan_account_id
        )))
        .await
    }

    /// Records a repayment against a loan account
    #[instrument(skip(self))]
    pub async fn create_loan_transaction(
        &self,
        loan_account_id: i64,
        body: &LoanTransactionCreate,
    ) -> Result<LoanTransaction, ClientError> {
        body.check()?;
        let transaction: LoanTransaction = self
            .execute(
                ApiRequest::post(format!(
                    "/profile/accounts/loan_accounts/{}/transactions",
                    loan_account_id
                ))
                .json(body)?,
            )
            .await?;
        info!(id = transaction.id, loan_account_id, amount = %transaction.amount, "Loan transaction created");
        Ok(transaction)
    }

    /// Approves a pending loan (staff)
    #[instrument(skip(self))]
    pub async fn approve_loan(&self, loan_account_id: i64) -> Result<LoanAccount, ClientError> {
        let loan_account: LoanAccount = self
            .execute(ApiRequest::post(format!("/loans/{}", loan_account_id)))
            .await?;
        info!(id = loan_account.id, status = %loan_account.loan.status, "Loan approved");
        Ok(loan_account)
    }
}
