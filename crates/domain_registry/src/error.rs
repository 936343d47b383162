//! Registry domain errors
//!
//! Every operation of the facade fails with a [`RegistryError`]. Local
//! validation failures never reach the transport; transport failures are
//! wrapped as they are, except decoding problems, which are reported as
//! invalid server responses.

use core_kernel::{CoreError, PortError};
use thiserror::Error;

/// Errors that can occur while talking to the registry service
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The service refused the user key (login returned no session)
    #[error("Invalid user key")]
    InvalidUserKey,

    /// A report name outside the known set was requested
    #[error("Invalid report type: \"{report}\", use one of allowed type: ({allowed})")]
    InvalidReportType { report: String, allowed: String },

    /// The service answered with something that cannot be decoded
    #[error("Invalid server response: {0}")]
    InvalidServerResponse(String),

    /// A caller supplied argument was rejected before dispatch
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation needs a session and none is open
    #[error("Not logged in: call login() first")]
    NotLoggedIn,

    /// Client configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The transport failed
    #[error("Transport error: {0}")]
    Transport(#[source] PortError),
}

impl RegistryError {
    /// Creates an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        RegistryError::InvalidArgument(message.into())
    }

    /// Creates an InvalidServerResponse error
    pub fn invalid_response(message: impl Into<String>) -> Self {
        RegistryError::InvalidServerResponse(message.into())
    }

    /// Returns true if the failure was detected locally, before any transport call
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            RegistryError::InvalidReportType { .. }
                | RegistryError::InvalidArgument(_)
                | RegistryError::NotLoggedIn
                | RegistryError::Configuration(_)
        )
    }
}

impl From<PortError> for RegistryError {
    fn from(error: PortError) -> Self {
        match error {
            PortError::Transformation { message } => RegistryError::InvalidServerResponse(message),
            other => RegistryError::Transport(other),
        }
    }
}

impl From<CoreError> for RegistryError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => RegistryError::InvalidArgument(message),
            invalid @ CoreError::InvalidDate { .. } => {
                RegistryError::InvalidServerResponse(invalid.to_string())
            }
            CoreError::Configuration(message) => RegistryError::Configuration(message),
        }
    }
}

impl From<config::ConfigError> for RegistryError {
    fn from(error: config::ConfigError) -> Self {
        RegistryError::Configuration(error.to_string())
    }
}

impl From<validator::ValidationErrors> for RegistryError {
    fn from(errors: validator::ValidationErrors) -> Self {
        RegistryError::Configuration(errors.to_string())
    }
}
