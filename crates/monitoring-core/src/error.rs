//! Shared error type across monitoring crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed body.
    BadRequest,
    /// Unknown route or invalid resource identifier.
    NotFound,
    /// Resource already exists.
    Conflict,
    /// Method not supported on this route.
    MethodNotAllowed,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Conflict => "CONFLICT",
            ClientCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MonitoringError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum MonitoringError {
    #[error("{0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("device {0} already exists")]
    Conflict(i64),
    #[error("method not allowed (allow: {allow})")]
    MethodNotAllowed { allow: &'static str },
    #[error("invalid config: {0}")]
    Config(String),
    #[error("metrics: {0}")]
    Metrics(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl MonitoringError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            MonitoringError::BadRequest(_) => ClientCode::BadRequest,
            MonitoringError::NotFound(_) => ClientCode::NotFound,
            MonitoringError::Conflict(_) => ClientCode::Conflict,
            MonitoringError::MethodNotAllowed { .. } => ClientCode::MethodNotAllowed,
            MonitoringError::Config(_) => ClientCode::BadRequest,
            MonitoringError::Metrics(_) => ClientCode::Internal,
            MonitoringError::Internal(_) => ClientCode::Internal,
        }
    }
}
