//! Token store implementations

use bank_core::traits::TokenStore;
use bank_core::ClientError;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// On-disk layout of the session file
#[derive(Serialize, Deserialize)]
struct StoredSession {
    access_token: String,
}

/// Token store backed by a JSON file
///
/// The file is created (with its parent directories) on the first write
/// and removed on clear. On unix it is readable by the owner only.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, contents: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        #[cfg(unix)]
        {
            use std::io::Write;
            use std::os::unix::fs::OpenOptionsExt;

            let mut file = fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)?;
            file.write_all(contents)
        }

        #[cfg(not(unix))]
        {
            fs::write(&self.path, contents)
        }
    }
}

impl TokenStore for FileTokenStore {
    fn token(&self) -> Result<Option<String>, ClientError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == IoErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<StoredSession>(&raw) {
            Ok(stored) => Ok(Some(stored.access_token)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable session file");
                Ok(None)
            }
        }
    }

    fn set_token(&self, token: &str) -> Result<(), ClientError> {
        let stored = StoredSession {
            access_token: token.to_string(),
        };
        let contents = serde_json::to_vec(&stored)?;
        self.write(&contents)?;
        debug!(path = %self.path.display(), "Session token stored");
        Ok(())
    }

    fn clear_token(&self) -> Result<(), ClientError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Session token cleared");
                Ok(())
            }
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Token store that lives as long as the process
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Result<Option<String>, ClientError> {
        Ok(self.token.read().clone())
    }

    fn set_token(&self, token: &str) -> Result<(), ClientError> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), ClientError> {
        *self.token.write() = None;
        Ok(())
    }
}
