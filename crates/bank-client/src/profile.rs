//! Profile API

use bank_core::models::{EnterpriseSpecialist, Profile, ProfileUpdate};
use bank_core::ClientError;
use tracing::{info, instrument};

use crate::client::ApiClient;
use crate::request::ApiRequest;

impl ApiClient {
    /// Profile of the logged-in user
    #[instrument(skip(self))]
    pub async fn get_profile(&self) -> Result<Profile, ClientError> {
        self.execute(ApiRequest::get("/profile")).await
    }

    /// Updates name, passport number and e-mail
    #[instrument(skip(self, body))]
    pub async fn update_profile(&self, body: &ProfileUpdate) -> Result<Profile, ClientError> {
        body.check()?;
        let profile: Profile = self.execute(ApiRequest::patch("/profile").json(body)?).await?;
        info!(id = profile.id, "Profile updated");
        Ok(profile)
    }

    /// Deletes the profile and ends the session
    #[instrument(skip(self))]
    pub async fn delete_profile(&self) -> Result<(), ClientError> {
        self.execute_empty(ApiRequest::delete("/profile")).await?;
        self.session().clear()?;
        info!("Profile deleted");
        Ok(())
    }

    /// Specialist record of the logged-in user
    #[instrument(skip(self))]
    pub async fn get_specialist_profile(&self) -> Result<EnterpriseSpecialist, ClientError> {
        self.execute(ApiRequest::get("/enterprises/specialists/profile"))
            .await
    }
}
