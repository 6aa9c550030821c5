//! Deposit accounts API

use bank_core::models::{DepositAccount, DepositAccountCreate};
use bank_core::ClientError;
use tracing::{info, instrument};

use crate::client::ApiClient;
use crate::request::ApiRequest;

impl ApiClient {
    /// Opens a deposit funded from an existing account
    #[instrument(skip(self))]
    pub async fn create_deposit_account(
        &self,
        body: &DepositAccountCreate,
    ) -> Result<DepositAccount, ClientError> {
        body.check()?;
        let deposit: DepositAccount = self
            .execute(ApiRequest::post("/profile/accounts/deposit_accounts/").json(body)?)
            .await?;
        info!(id = deposit.id, rate = %deposit.interest_rate, "Deposit account created");
        Ok(deposit)
    }

    #[instrument(skip(self))]
    pub async fn get_deposit_account(
        &self,
        deposit_account_id: i64,
    ) -> Result<DepositAccount, ClientError> {
        self.execute(ApiRequest::get(format!(
            "/profile/accounts/deposit_accounts/{}",
            deposit_account_id
        )))
        .await
    }
}
