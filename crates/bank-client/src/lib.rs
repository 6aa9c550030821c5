//! Banking API client
//!
//! One request path ([`ApiClient::execute`]) plus a typed method per API
//! route, grouped by resource:
//!
//! - Auth: login, registration
//! - Banks, profile, accounts
//! - Operations: additions, withdrawals, transfers
//! - Loans, deposits, enterprises
//!
//! # Usage
//!
//! ```rust,ignore
//! use bank_auth::{MemoryTokenStore, Session};
//! use bank_client::ApiClient;
//!
//! let client = ApiClient::new(
//!     "http://localhost:8000",
//!     Session::new(MemoryTokenStore::new()),
//!     None,
//! )?;
//!
//! let banks = client.list_banks().await?;
//! ```

mod accounts;
mod auth;
mod banks;
mod client;
mod deposits;
mod enterprises;
mod loans;
mod operations;
mod profile;
mod request;

pub use client::{extract_detail, ApiClient};
pub use request::{ApiRequest, Method, RequestBody};
