//! Login request and response

use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Credentials posted form-encoded to `/login`
///
/// The API expects the phone number in the `username` field.
#[derive(Clone, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn check(&self) -> Result<(), ClientError> {
        if self.username.trim().is_empty() {
            return Err(ClientError::Validation("phone number is required".to_string()));
        }
        if self.password.is_empty() {
            return Err(ClientError::Validation("password is required".to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Response of `/login`
#[derive(Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"***")
            .field("token_type", &self.token_type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_secrets() {
        let form = LoginForm::new("+375291234567", "hunter2");
        let printed = format!("{:?}", form);
        assert!(printed.contains("+375291234567"));
        assert!(!printed.contains("hunter2"));

        let token: AccessToken = serde_json::from_str(r#"{"access_token":"abc.def"}"#).unwrap();
        assert_eq!(token.token_type, "bearer");
        assert!(!format!("{:?}", token).contains("abc.def"));
    }

    #[test]
    fn test_login_form_check() {
        assert!(LoginForm::new("", "x").check().is_err());
        assert!(LoginForm::new("123", "").check().is_err());
        assert!(LoginForm::new("123", "x").check().is_ok());
    }
}
