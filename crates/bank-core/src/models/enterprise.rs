//! Enterprise model

use crate::error::ClientError;
use crate::models::account::Account;
use crate::models::user::Profile;
use crate::traits::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

api_enum! {
    /// Legal form of an enterprise
    pub enum EnterpriseType {
        /// Limited liability company
        Llc => "LLC",
        /// Sole proprietor
        Sp => "SP",
        /// Limited liability partnership
        Llp => "LLP",
    }
}

/// Enterprise served by a bank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enterprise {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub enterprise_type: EnterpriseType,
    /// Taxpayer registration number
    pub unp: String,
    pub bank_id: i64,
    pub address: String,
    #[serde(default)]
    pub account: Option<Account>,
    #[serde(default, with = "super::timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "super::timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Enterprise {
    fn id(&self) -> i64 {
        self.id
    }
}

/// User acting on behalf of an enterprise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnterpriseSpecialist {
    pub id: i64,
    pub user: Profile,
    pub enterprise: Enterprise,
}

/// Body of `POST /staff/enterprises/`
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct EnterpriseCreate {
    #[validate(length(min = 1, max = 255, message = "Enterprise name is required"))]
    pub name: String,

    #[serde(rename = "type")]
    pub enterprise_type: EnterpriseType,

    #[validate(length(min = 1, max = 32, message = "UNP is required"))]
    pub unp: String,

    #[validate(range(min = 1, message = "bank_id must be positive"))]
    pub bank_id: i64,

    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
}

impl EnterpriseCreate {
    pub fn check(&self) -> Result<(), ClientError> {
        self.validate()?;
        Ok(())
    }
}
