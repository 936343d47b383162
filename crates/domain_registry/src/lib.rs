//! REGON Registry Domain
//!
//! This crate is a typed client for the BIR 1.1 service of the Polish
//! business registry (REGON). It keeps the session, validates arguments,
//! and turns searches and report requests into calls on an injected
//! transport.
//!
//! # Operations
//!
//! - **Session**: login with a user key, logout, session status
//! - **Diagnostics**: service status and message, data status date, last message
//! - **Search**: by NIP, REGON or KRS, singly or in batches of up to 20
//! - **Reports**: full reports for one entity, bulk reports for a day
//!
//! The SOAP encoding lives behind the [`RegistryTransport`] port; tests use
//! [`MockRegistryTransport`] (feature `mock`).
//!
//! # Examples
//!
//! ```rust
//! use domain_registry::{ReportType, SearchReport};
//!
//! let row = SearchReport {
//!     regon: "610188201".to_string(),
//!     entity_type_code: "P".to_string(),
//!     silo_id: "6".to_string(),
//!     ..SearchReport::default()
//! };
//!
//! assert_eq!(ReportType::for_search_report(&row), Some(ReportType::LegalEntity));
//! assert_eq!(row.regon14(), "61018820100000");
//! assert!("BIR11Unknown".parse::<ReportType>().is_err());
//! ```

pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod full_report;
pub mod ports;
pub mod report_types;
pub mod search;
pub mod search_report;
pub mod session;
pub mod validation;

pub use client::GusApi;
pub use config::{Environment, RegistryConfig, DEVELOPMENT_USER_KEY};
pub use dto::ValueParameter;
pub use error::RegistryError;
pub use full_report::{FullReport, ReportRow};
pub use ports::RegistryTransport;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{MockRegistryTransport, TransportCall, TransportReply};
pub use report_types::{BulkReportType, ReportType};
pub use search::SearchParameters;
pub use search_report::{EntityType, SearchReport, Silo};
pub use session::Session;
pub use validation::{IdentifierValidator, ValidationResult, MAX_IDENTIFIERS};
