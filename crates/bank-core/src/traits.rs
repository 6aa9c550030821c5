//! Common traits shared by the client and view layers

use crate::error::ClientError;

/// An API record with a server-assigned identifier
///
/// List views use the identifier to merge a submitted entity back into
/// their local state: replace the item with the same id, else append.
pub trait Entity {
    /// Server-assigned identifier
    fn id(&self) -> i64;
}

/// Storage for the bearer token
///
/// Written only by login, cleared by logout and profile deletion, read
/// before every authenticated request. Implementations do no expiry
/// checking.
pub trait TokenStore: Send + Sync {
    /// Current token, if one has been stored
    fn token(&self) -> Result<Option<String>, ClientError>;

    /// Replace the stored token
    fn set_token(&self, token: &str) -> Result<(), ClientError>;

    /// Forget the stored token; clearing an empty store is not an error
    fn clear_token(&self) -> Result<(), ClientError>;
}
