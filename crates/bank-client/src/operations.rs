//! Account operations API: additions, withdrawals and transfers
//!
//! The list and create routes are scoped to one account through the
//! `account_id` query parameter.

use bank_core::models::{
    Addition, AdditionCreate, Transfer, TransferCreate, Withdrawal, WithdrawalCreate,
};
use bank_core::ClientError;
use tracing::{info, instrument};

use crate::client::ApiClient;
use crate::request::ApiRequest;

const ADDITIONS: &str = "/profile/accounts/additions/";
const WITHDRAWALS: &str = "/profile/accounts/withdrawals/";
const TRANSFERS: &str = "/profile/accounts/transfers/";

impl ApiClient {
    #[instrument(skip(self))]
    pub async fn list_additions(&self, account_id: i64) -> Result<Vec<Addition>, ClientError> {
        self.execute(ApiRequest::get(ADDITIONS).query("account_id", account_id))
            .await
    }

    /// Tops up an account
    #[instrument(skip(self))]
    pub async fn create_addition(
        &self,
        account_id: i64,
        body: &AdditionCreate,
    ) -> Result<Addition, ClientError> {
        body.check()?;
        let addition: Addition = self
            .execute(
                ApiRequest::post(ADDITIONS)
                    .query("account_id", account_id)
                    .json(body)?,
            )
            .await?;
        info!(id = addition.id, account_id, amount = %addition.amount, "Addition created");
        Ok(addition)
    }

    #[instrument(skip(self))]
    pub async fn list_withdrawals(&self, account_id: i64) -> Result<Vec<Withdrawal>, ClientError> {
        self.execute(ApiRequest::get(WITHDRAWALS).query("account_id", account_id))
            .await
    }

    /// Takes money out of an account
    #[instrument(skip(self))]
    pub async fn create_withdrawal(
        &self,
        account_id: i64,
        body: &WithdrawalCreate,
    ) -> Result<Withdrawal, ClientError> {
        body.check()?;
        let withdrawal: Withdrawal = self
            .execute(
                ApiRequest::post(WITHDRAWALS)
                    .query("account_id", account_id)
                    .json(body)?,
            )
            .await?;
        info!(id = withdrawal.id, account_id, amount = %withdrawal.amount, "Withdrawal created");
        Ok(withdrawal)
    }

    #[instrument(skip(self))]
    pub async fn list_transfers(&self, account_id: i64) -> Result<Vec<Transfer>, ClientError> {
        self.execute(ApiRequest::get(TRANSFERS).query("account_id", account_id))
            .await
    }

    /// Sends money from `account_id` to another account
    #[instrument(skip(self))]
    pub async fn create_transfer(
        &self,
        account_id: i64,
        body: &TransferCreate,
    ) -> Result<Transfer, ClientError> {
        body.check()?;
        let transfer: Transfer = self
            .execute(
                ApiRequest::post(TRANSFERS)
                    .query("account_id", account_id)
                    .json(body)?,
            )
            .await?;
        info!(
            id = transfer.id,
            from = transfer.from_account_id,
            to = transfer.to_account_id,
            amount = %transfer.amount,
            "Transfer created"
        );
        Ok(transfer)
    }

    /// Any transfer by id (staff)
    #[instrument(skip(self))]
    pub async fn get_transfer(&self, transfer_id: i64) -> Result<Transfer, ClientError> {
        self.execute(ApiRequest::get(format!("/transfers/{}", transfer_id)))
            .await
    }

    /// Reverses a completed transfer (staff)
    #[instrument(skip(self))]
    pub async fn reverse_transfer(&self, transfer_id: i64) -> Result<Transfer, ClientError> {
        let transfer: Transfer = self
            .execute(ApiRequest::post(format!("/transfers/{}", transfer_id)))
            .await?;
        info!(id = transfer.id, status = %transfer.status, "Transfer reversed");
        Ok(transfer)
    }
}
