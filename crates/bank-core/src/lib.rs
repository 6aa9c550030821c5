//! Bank Console Core Library
//!
//! This crate provides the foundational types, traits, and error handling
//! shared by the bank console crates. It includes:
//!
//! - Data model of the banking API (Bank, Account, Loan, Transfer, etc.)
//! - Request bodies with client-side validation
//! - Typed client error enumeration
//! - Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod traits;
pub mod validation;

pub use config::AppConfig;
pub use error::{ClientError, ErrorKind};

/// Result type alias using ClientError
pub type ClientResult<T> = Result<T, ClientError>;
