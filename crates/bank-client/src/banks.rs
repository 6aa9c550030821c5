//! Banks API

use bank_core::models::{Bank, BankCreate};
use bank_core::ClientError;
use tracing::{info, instrument};

use crate::client::ApiClient;
use crate::request::ApiRequest;

impl ApiClient {
    /// Lists every bank (public route)
    #[instrument(skip(self))]
    pub async fn list_banks(&self) -> Result<Vec<Bank>, ClientError> {
        self.execute(ApiRequest::get("/banks").anonymous()).await
    }

    /// Fetches one bank (public route)
    #[instrument(skip(self))]
    pub async fn get_bank(&self, bank_id: i64) -> Result<Bank, ClientError> {
        self.execute(ApiRequest::get(format!("/banks/{}", bank_id)).anonymous())
            .await
    }

    /// Registers a bank (staff)
    #[instrument(skip(self))]
    pub async fn create_bank(&self, body: &BankCreate) -> Result<Bank, ClientError> {
        body.check()?;
        let bank: Bank = self.execute(ApiRequest::post("/banks").json(body)?).await?;
        info!(id = bank.id, name = %bank.name, "Bank created");
        Ok(bank)
    }
}
