//! Unified error handling for the bank console
//!
//! Every failure a view can run into is one of the variants below. The
//! variant decides the [`ErrorKind`]; the text shown to the user is picked
//! later, at the presentation boundary.

use std::fmt;
use thiserror::Error;

/// Coarse classification of a [`ClientError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input rejected before any request was sent
    Validation,
    /// 401
    Unauthorized,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 409
    Conflict,
    /// 5xx
    Server,
    /// Any other non-2xx status
    Http,
    /// Transport failure, no response received
    Network,
    /// A 2xx response whose body could not be decoded
    Decode,
    /// Token store could not be read or written
    Session,
    /// Invalid configuration
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Server => "server_error",
            ErrorKind::Http => "http_error",
            ErrorKind::Network => "network_error",
            ErrorKind::Decode => "decode_error",
            ErrorKind::Session => "session_error",
            ErrorKind::Config => "config_error",
        };
        f.write_str(name)
    }
}

/// Main client error type
///
/// HTTP failures keep the server-supplied `detail` string, if the response
/// body carried one, so the renderer can show it verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    // ==================== Client-side Errors ====================
    #[error("Validation error: {0}")]
    Validation(String),

    // ==================== HTTP Errors ====================
    #[error("Unauthorized: {}", .detail.as_deref().unwrap_or("no detail"))]
    Unauthorized { detail: Option<String> },

    #[error("Forbidden: {}", .detail.as_deref().unwrap_or("no detail"))]
    Forbidden { detail: Option<String> },

    #[error("Not found: {}", .detail.as_deref().unwrap_or("no detail"))]
    NotFound { detail: Option<String> },

    #[error("Conflict: {}", .detail.as_deref().unwrap_or("no detail"))]
    Conflict { detail: Option<String> },

    #[error("Server error: status {status}")]
    Server { status: u16, detail: Option<String> },

    #[error("HTTP error: status {status}")]
    Http { status: u16, detail: Option<String> },

    // ==================== Transport Errors ====================
    #[error("Connection error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Decode(String),

    // ==================== Local Errors ====================
    #[error("Session error: {0}")]
    Session(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Builds the error for a non-2xx HTTP status
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        match status {
            401 => ClientError::Unauthorized { detail },
            403 => ClientError::Forbidden { detail },
            404 => ClientError::NotFound { detail },
            409 => ClientError::Conflict { detail },
            500..=599 => ClientError::Server { status, detail },
            _ => ClientError::Http { status, detail },
        }
    }

    /// Returns the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Validation(_) => ErrorKind::Validation,
            ClientError::Unauthorized { .. } => ErrorKind::Unauthorized,
            ClientError::Forbidden { .. } => ErrorKind::Forbidden,
            ClientError::NotFound { .. } => ErrorKind::NotFound,
            ClientError::Conflict { .. } => ErrorKind::Conflict,
            ClientError::Server { .. } => ErrorKind::Server,
            ClientError::Http { .. } => ErrorKind::Http,
            ClientError::Network(_) => ErrorKind::Network,
            ClientError::Decode(_) => ErrorKind::Decode,
            ClientError::Session(_) => ErrorKind::Session,
            ClientError::Config(_) => ErrorKind::Config,
        }
    }

    /// Server-supplied `detail` message, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Unauthorized { detail }
            | ClientError::Forbidden { detail }
            | ClientError::NotFound { detail }
            | ClientError::Conflict { detail }
            | ClientError::Server { detail, .. }
            | ClientError::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// HTTP status that produced this error, if it came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Unauthorized { .. } => Some(401),
            ClientError::Forbidden { .. } => Some(403),
            ClientError::NotFound { .. } => Some(404),
            ClientError::Conflict { .. } => Some(409),
            ClientError::Server { status, .. } | ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the error code used in logs
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Validation(_) => "validation_error",
            ClientError::Unauthorized { .. } => "unauthorized",
            ClientError::Forbidden { .. } => "forbidden",
            ClientError::NotFound { .. } => "not_found",
            ClientError::Conflict { .. } => "conflict",
            ClientError::Server { .. } => "server_error",
            ClientError::Http { .. } => "http_error",
            ClientError::Network(_) => "network_error",
            ClientError::Decode(_) => "decode_error",
            ClientError::Session(_) => "session_error",
            ClientError::Config(_) => "config_error",
        }
    }
}

// ==================== From implementations ====================

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Session(err.to_string())
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        ClientError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(err: validator::ValidationErrors) -> Self {
        ClientError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_kinds() {
        assert_eq!(ClientError::from_status(401, None).kind(), ErrorKind::Unauthorized);
        assert_eq!(ClientError::from_status(403, None).kind(), ErrorKind::Forbidden);
        assert_eq!(ClientError::from_status(404, None).kind(), ErrorKind::NotFound);
        assert_eq!(ClientError::from_status(409, None).kind(), ErrorKind::Conflict);
        assert_eq!(ClientError::from_status(500, None).kind(), ErrorKind::Server);
        assert_eq!(ClientError::from_status(503, None).kind(), ErrorKind::Server);
        assert_eq!(ClientError::from_status(422, None).kind(), ErrorKind::Http);
    }

    #[test]
    fn test_detail_and_status_survive() {
        let err = ClientError::from_status(400, Some("Insufficient funds".to_string()));
        assert_eq!(err.detail(), Some("Insufficient funds"));
        assert_eq!(err.status(), Some(400));

        let err = ClientError::Network("refused".to_string());
        assert_eq!(err.detail(), None);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ClientError::Validation("bad id".to_string()).error_code(),
            "validation_error"
        );
        assert_eq!(
            ClientError::from_status(502, None).error_code(),
            "server_error"
        );
        assert_eq!(ErrorKind::NotFound.to_string(), "not_found");
    }

    #[test]
    fn test_display_includes_detail() {
        let err = ClientError::from_status(404, Some("Account not found".to_string()));
        assert_eq!(err.to_string(), "Not found: Account not found");

        let err = ClientError::from_status(401, None);
        assert_eq!(err.to_string(), "Unauthorized: no detail");
    }
}
