//! Session handling for the bank console
//!
//! This crate keeps the bearer token issued by the banking API between
//! runs and hands it to the API client on every request.
//!
//! # Features
//!
//! - File-backed token store that survives restarts
//! - In-memory token store for tests and one-off runs
//! - `Session` handle passed explicitly to the API client
//!
//! # Examples
//!
//! ```no_run
//! use bank_auth::{FileTokenStore, Session};
//!
//! let session = Session::new(FileTokenStore::new(".bank-console/session.json"));
//! session.store_token("eyJhbGciOi...")?;
//! assert_eq!(
//!     session.authorization()?.as_deref(),
//!     Some("Bearer eyJhbGciOi...")
//! );
//! session.clear()?;
//! # Ok::<(), bank_core::ClientError>(())
//! ```

pub mod session;
pub mod store;

pub use session::Session;
pub use store::{FileTokenStore, MemoryTokenStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_session_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let first = Session::new(FileTokenStore::new(&path));
        assert!(first.token().unwrap().is_none());
        first.store_token("token-1").unwrap();

        let second = Session::new(FileTokenStore::new(&path));
        assert_eq!(second.token().unwrap().as_deref(), Some("token-1"));

        second.clear().unwrap();
        assert!(first.token().unwrap().is_none());
    }
}
