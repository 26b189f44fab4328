use dh_app::{DeviceUseCaseError, ErrorKind};
use serde_json::{json, Value};

/// Failure as seen from outside the process.
///
/// Carries an HTTP-style status, a JSON error body and an exit code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// The cause is logged, never shown.
    #[error("Internal server error")]
    Internal,
}

impl CommandError {
    pub fn status(&self) -> u16 {
        match self {
            CommandError::NotFound(_) => 404,
            CommandError::BadRequest(_) => 400,
            CommandError::Internal => 500,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            CommandError::Internal => 1,
            CommandError::BadRequest(_) => 2,
            CommandError::NotFound(_) => 3,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({ "error": self.to_string(), "status": self.status() })
    }
}

/// Centralized error mapping for commands.
pub fn map_err(err: DeviceUseCaseError) -> CommandError {
    match err.kind() {
        ErrorKind::NotFound => CommandError::NotFound("Device not found".to_string()),
        ErrorKind::RuleViolation | ErrorKind::InvalidInput => {
            CommandError::BadRequest(err.to_string())
        }
        ErrorKind::StoreFailure => {
            tracing::error!(error = %err, "Device store failure");
            CommandError::Internal
        }
    }
}

impl From<DeviceUseCaseError> for CommandError {
    fn from(err: DeviceUseCaseError) -> Self {
        map_err(err)
    }
}
