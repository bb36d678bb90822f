//! Shared error type across stepper crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed config file.
    BadRequest,
    /// Stored settings cannot drive the mapping (e.g. `max <= 0`).
    InvalidConfig,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::InvalidConfig => "INVALID_CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, StepperError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum StepperError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl StepperError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            StepperError::BadRequest(_) => ClientCode::BadRequest,
            StepperError::InvalidConfig(_) => ClientCode::InvalidConfig,
            StepperError::Internal(_) => ClientCode::Internal,
        }
    }
}
