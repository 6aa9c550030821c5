//! User profile model

use crate::error::ClientError;
use crate::traits::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

api_enum! {
    /// User role enumeration
    pub enum UserRole {
        Client => "CLIENT",
        Operator => "OPERATOR",
        Manager => "MANAGER",
        Administrator => "ADMINISTRATOR",
        /// Acts on behalf of an enterprise
        Specialist => "SPECIALIST",
    }
}

/// Profile of the authenticated user (also the user record embedded elsewhere)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub passport_number: String,
    pub phone_number: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub is_foreign: bool,
    #[serde(default, with = "super::timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "super::timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Profile {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Body of `PATCH /profile`
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct ProfileUpdate {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 32, message = "Passport number is required"))]
    pub passport_number: String,

    #[validate(email(message = "Invalid email"))]
    pub email: String,
}

impl ProfileUpdate {
    pub fn check(&self) -> Result<(), ClientError> {
        self.validate()?;
        Ok(())
    }
}

/// Body of `POST /registration/`
#[derive(Clone, PartialEq, Serialize, Validate)]
pub struct Registration {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 32, message = "Passport number is required"))]
    pub passport_number: String,

    #[validate(length(min = 5, max = 20, message = "Invalid phone number"))]
    pub phone_number: String,

    #[validate(email(message = "Invalid email"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    pub role: UserRole,

    pub is_foreign: bool,
}

impl Registration {
    pub fn check(&self) -> Result<(), ClientError> {
        self.validate()?;
        Ok(())
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("phone_number", &self.phone_number)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("is_foreign", &self.is_foreign)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_profile() {
        let profile: Profile = serde_json::from_value(json!({
            "id": 5, "name": "Ivan", "passport_number": "MP1234567",
            "phone_number": "+375291112233", "email": "ivan@example.com",
            "role": "CLIENT", "is_active": true, "is_foreign": false,
            "created_at": "2025-01-01T00:00:00.000001", "updated_at": null
        }))
        .unwrap();
        assert_eq!(profile.role, UserRole::Client);
        assert!(profile.created_at.is_some());
        assert!(profile.updated_at.is_none());
    }

    #[test]
    fn test_profile_update_rejects_bad_email() {
        let update = ProfileUpdate {
            name: "Ivan".to_string(),
            passport_number: "MP1234567".to_string(),
            email: "not-an-email".to_string(),
        };
        assert!(update.check().is_err());
    }

    #[test]
    fn test_registration_debug_hides_password() {
        let reg = Registration {
            name: "Ivan".to_string(),
            passport_number: "MP1234567".to_string(),
            phone_number: "+375291112233".to_string(),
            email: "ivan@example.com".to_string(),
            password: "s3cret-pass".to_string(),
            role: UserRole::Client,
            is_foreign: false,
        };
        assert!(reg.check().is_ok());
        assert!(!format!("{:?}", reg).contains("s3cret-pass"));
        assert_eq!(serde_json::to_value(&reg).unwrap()["role"], json!("CLIENT"));
    }
}
