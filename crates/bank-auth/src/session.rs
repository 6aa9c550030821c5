//! Session handle shared by the API client and the views

use bank_core::traits::TokenStore;
use bank_core::ClientError;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Explicit session object
///
/// Cheap to clone; all clones share one token store. No expiry checking
/// is done here: a stale token is discovered when the API answers 401.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new<S: TokenStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Current bearer token, if logged in
    pub fn token(&self) -> Result<Option<String>, ClientError> {
        self.store.token()
    }

    /// Check if a token is present (not whether it is still valid)
    pub fn is_authenticated(&self) -> Result<bool, ClientError> {
        Ok(self.token()?.is_some())
    }

    /// `Authorization` header value, if logged in
    pub fn authorization(&self) -> Result<Option<String>, ClientError> {
        Ok(self.token()?.map(|token| format!("Bearer {}", token)))
    }

    /// Remember the token issued by login
    pub fn store_token(&self, token: &str) -> Result<(), ClientError> {
        self.store.set_token(token)?;
        info!("Session started");
        Ok(())
    }

    /// Forget the token (logout, profile deletion)
    pub fn clear(&self) -> Result<(), ClientError> {
        self.store.clear_token()?;
        debug!("Session cleared");
        Ok(())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.store.token() {
            Ok(Some(_)) => "authenticated",
            Ok(None) => "anonymous",
            Err(_) => "unreadable",
        };
        f.debug_struct("Session").field("state", &state).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryTokenStore;

    #[test]
    fn test_authorization_header() {
        let session = Session::new(MemoryTokenStore::new());
        assert!(session.authorization().unwrap().is_none());
        assert!(!session.is_authenticated().unwrap());

        session.store_token("t0k3n").unwrap();
        assert_eq!(session.authorization().unwrap().as_deref(), Some("Bearer t0k3n"));
        assert!(session.is_authenticated().unwrap());
    }

    #[test]
    fn test_clones_share_store() {
        let session = Session::new(MemoryTokenStore::with_token("shared"));
        let clone = session.clone();

        clone.clear().unwrap();
        assert!(session.token().unwrap().is_none());
    }

    #[test]
    fn test_debug_hides_token() {
        let session = Session::new(MemoryTokenStore::with_token("very-secret"));
        let printed = format!("{:?}", session);
        assert!(printed.contains("authenticated"));
        assert!(!printed.contains("very-secret"));
    }
}
