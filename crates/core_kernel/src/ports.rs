//! Port infrastructure
//!
//! The registry domain talks to the remote service through a port trait
//! and never sees the adapter behind it:
//!
//! ```text
//!     GusApi facade ──▶ RegistryTransport ◀── SOAP adapter (application)
//!                                       ◀── mock adapter (tests)
//! ```
//!
//! Adapters report every failure as a [`PortError`]. The variants follow
//! what a SOAP client can actually observe: the endpoint could not be
//! reached, the service answered with a fault, it refused the credentials,
//! or its answer could not be decoded.

use thiserror::Error;
use serde::{Deserialize, Serialize};

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Failure reported by a port adapter
#[derive(Debug, Error)]
pub enum PortError {
    /// The endpoint could not be reached or the exchange broke off
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// The service answered with a SOAP fault
    #[error("Service fault {code}: {message}")]
    Fault { code: String, message: String },

    /// The service refused the user key or the session
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// The answer could not be decoded into the expected shape
    #[error("Transformation error: {message}")]
    Transformation { message: String },

    /// The adapter itself failed
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },
}

impl PortError {
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Connection error keeping the underlying cause
    pub fn connection_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PortError::Connection {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn fault(code: impl Into<String>, message: impl Into<String>) -> Self {
        PortError::Fault {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        PortError::Unauthorized {
            message: message.into(),
        }
    }

    pub fn transformation(message: impl Into<String>) -> Self {
        PortError::Transformation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Whether the service rejected the credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, PortError::Unauthorized { .. })
    }
}

/// Marker trait for domain ports; adapters are shared across tasks
pub trait DomainPort: Send + Sync + 'static {}

/// Coarse availability of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    Healthy,
    /// Working with limitations, e.g. during a technical break
    Degraded,
    Unhealthy,
    /// The check itself failed
    Unknown,
}

/// Outcome of a single health check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    pub adapter_id: String,
    pub status: AdapterHealth,
    /// Time spent on the check
    pub latency_ms: u64,
    pub message: Option<String>,
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

/// Components that can report their availability
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    async fn health_check(&self) -> HealthCheckResult;
}
