//! Accounts API

use bank_core::models::{Account, AccountCreate, AccountStatus, AccountUpdate};
use bank_core::ClientError;
use tracing::{info, instrument};

use crate::client::ApiClient;
use crate::request::ApiRequest;

impl ApiClient {
    /// Accounts of the logged-in user
    #[instrument(skip(self))]
    pub async fn list_accounts(&self) -> Result<Vec<Account>, ClientError> {
        self.execute(ApiRequest::get("/profile/accounts")).await
    }

    /// One account of the logged-in user
    #[instrument(skip(self))]
    pub async fn get_account(&self, account_id: i64) -> Result<Account, ClientError> {
        self.execute(ApiRequest::get(format!("/profile/accounts/{}", account_id)))
            .await
    }

    /// Opens an account in a bank
    #[instrument(skip(self))]
    pub async fn create_account(&self, body: &AccountCreate) -> Result<Account, ClientError> {
        body.check()?;
        let account: Account = self
            .execute(ApiRequest::post("/profile/accounts").json(body)?)
            .await?;
        info!(id = account.id, bank_id = account.bank_id, "Account created");
        Ok(account)
    }

    /// Changes the status of an account
    #[instrument(skip(self))]
    pub async fn update_account_status(
        &self,
        account_id: i64,
        status: AccountStatus,
    ) -> Result<Account, ClientError> {
        let body = AccountUpdate { status };
        let account: Account = self
            .execute(ApiRequest::patch(format!("/profile/accounts/{}", account_id)).json(&body)?)
            .await?;
        info!(id = account.id, status = %account.status, "Account status updated");
        Ok(account)
    }

    /// Accounts of any user (staff)
    #[instrument(skip(self))]
    pub async fn list_user_accounts(&self, user_id: i64) -> Result<Vec<Account>, ClientError> {
        self.execute(ApiRequest::get("/staff/accounts/").query("user_id", user_id))
            .await
    }
}
