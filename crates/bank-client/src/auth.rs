//! Login and registration

use bank_core::models::{AccessToken, LoginForm, Profile, Registration};
use bank_core::ClientError;
use tracing::{info, instrument};

use crate::client::ApiClient;
use crate::request::ApiRequest;

impl ApiClient {
    /// Exchanges credentials for a bearer token and stores it in the session
    #[instrument(skip(self, form), fields(username = %form.username))]
    pub async fn login(&self, form: &LoginForm) -> Result<AccessToken, ClientError> {
        form.check()?;

        let request = ApiRequest::post("/login")
            .form(&[
                ("username", form.username.as_str()),
                ("password", form.password.as_str()),
            ])
            .anonymous();

        let token: AccessToken = self.execute(request).await?;
        self.session().store_token(&token.access_token)?;

        info!("Login successful");
        Ok(token)
    }

    /// Forgets the stored token
    pub fn logout(&self) -> Result<(), ClientError> {
        self.session().clear()
    }

    /// Creates a user account
    #[instrument(skip(self, registration))]
    pub async fn register(&self, registration: &Registration) -> Result<Profile, ClientError> {
        registration.check()?;

        let request = ApiRequest::post("/registration/")
            .json(registration)?
            .anonymous();

        let profile: Profile = self.execute(request).await?;
        info!(id = profile.id, "User registered");
        Ok(profile)
    }
}
