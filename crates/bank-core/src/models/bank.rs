//! Bank model

use crate::error::ClientError;
use crate::traits::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Bank entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub id: i64,
    pub name: String,
    /// Bank identifier code
    pub bic: String,
    pub address: String,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "super::timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Entity for Bank {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Body of `POST /banks`
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct BankCreate {
    #[validate(length(min = 1, max = 255, message = "Bank name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 32, message = "BIC is required"))]
    pub bic: String,

    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
}

impl BankCreate {
    pub fn check(&self) -> Result<(), ClientError> {
        self.validate()?;
        Ok(())
    }
}
