//! View state and the shared loading flag

use bank_core::ClientError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// What a view currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Failed(ClientError),
    Empty,
    Ready(T),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            ViewState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

/// Shared "request in flight" indicator
///
/// Clones observe the same flag, so a front end can hold one while the
/// view runs.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Raise the flag until the returned guard is dropped
    pub fn raise(&self) -> LoadingGuard {
        self.0.store(true, Ordering::SeqCst);
        LoadingGuard {
            flag: Arc::clone(&self.0),
        }
    }
}

/// Lowers the loading flag on drop
#[must_use = "the loading flag is lowered as soon as the guard is dropped"]
pub struct LoadingGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
