//! Core Kernel - Foundational types and utilities for the registry client
//!
//! This crate provides the building blocks shared by the registry domain:
//! - Error types for local validation and for transport ports
//! - Port infrastructure (marker traits, health checks)
//! - Registry identifiers (NIP, REGON, KRS)
//! - Date handling for the formats the registry service speaks
//! - The JSON serialization capability

pub mod error;
pub mod identifiers;
pub mod json;
pub mod ports;
pub mod temporal;

pub use error::CoreError;
pub use identifiers::{Krs, Nip, Regon14, Regon9};
pub use json::{to_json_string, JsonSerializable};
pub use ports::{AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError};
pub use temporal::{format_report_date, parse_data_status_date};
