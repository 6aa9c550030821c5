//! Enterprises API (staff)

use bank_core::models::{Enterprise, EnterpriseCreate};
use bank_core::ClientError;
use tracing::{info, instrument};

use crate::client::ApiClient;
use crate::request::ApiRequest;

impl ApiClient {
    #[instrument(skip(self))]
    pub async fn get_enterprise(&self, enterprise_id: i64) -> Result<Enterprise, ClientError> {
        self.execute(ApiRequest::get(format!("/staff/enterprises/{}", enterprise_id)))
            .await
    }

    /// Registers an enterprise; the API opens its account
    #[instrument(skip(self))]
    pub async fn create_enterprise(
        &self,
        body: &EnterpriseCreate,
    ) -> Result<Enterprise, ClientError> {
        body.check()?;
        let enterprise: Enterprise = self
            .execute(ApiRequest::post("/staff/enterprises/").json(body)?)
            .await?;
        info!(id = enterprise.id, unp = %enterprise.unp, "Enterprise created");
        Ok(enterprise)
    }
}
