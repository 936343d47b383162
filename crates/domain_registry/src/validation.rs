//! Argument validation
//!
//! Everything here runs before a request is built, so a rejected argument
//! never reaches the transport.
//!
//! # Validation Rules
//!
//! ## Identifiers
//! - NIP: 10 digits
//! - REGON: 9 or 14 digits depending on the search
//! - KRS: 1 to 10 digits
//! - Spaces and dashes are ignored
//!
//! ## Batches
//! - At least one identifier
//! - At most [`MAX_IDENTIFIERS`] identifiers
//! - Duplicates are allowed but reported as warnings

use std::collections::HashSet;
use std::str::FromStr;

use core_kernel::CoreError;

use crate::error::RegistryError;

/// Largest batch the service accepts in a single search
pub const MAX_IDENTIFIERS: usize = 20;

/// Result of validating a batch of arguments
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the arguments are valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Converts the result into an error when invalid
    pub fn into_result(self) -> Result<(), RegistryError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(RegistryError::InvalidArgument(self.errors.join("; ")))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for identifier arguments
pub struct IdentifierValidator;

impl IdentifierValidator {
    /// Checks the size of a batch
    pub fn check_count(count: usize) -> Result<(), RegistryError> {
        if count == 0 {
            return Err(RegistryError::invalid_argument(
                "At least one identifier is required.",
            ));
        }
        if count > MAX_IDENTIFIERS {
            return Err(RegistryError::invalid_argument(format!(
                "Too many identifiers. Maximum allowed is {MAX_IDENTIFIERS}."
            )));
        }
        Ok(())
    }

    /// Parses a single identifier
    pub fn parse<T>(raw: &str) -> Result<T, RegistryError>
    where
        T: FromStr<Err = CoreError>,
    {
        Ok(raw.parse::<T>()?)
    }

    /// Validates a batch without parsing it
    ///
    /// Reports every malformed entry rather than stopping at the first one.
    pub fn validate_batch<T, S>(raw: &[S]) -> ValidationResult
    where
        T: FromStr<Err = CoreError>,
        S: AsRef<str>,
    {
        let mut result = ValidationResult::ok();

        if let Err(error) = Self::check_count(raw.len()) {
            result.add_error(error.to_string());
            return result;
        }

        let mut seen = HashSet::new();
        for value in raw {
            let value = value.as_ref();
            if let Err(error) = value.parse::<T>() {
                result.add_error(error.to_string());
            } else if !seen.insert(value) {
                result.add_warning(format!("Duplicate identifier: {value}"));
            }
        }

        result
    }

    /// Parses a batch, failing with every problem found
    pub fn parse_batch<T, S>(raw: &[S]) -> Result<Vec<T>, RegistryError>
    where
        T: FromStr<Err = CoreError>,
        S: AsRef<str>,
    {
        let result = Self::validate_batch::<T, S>(raw);
        for warning in &result.warnings {
            tracing::warn!(warning = %warning, "Identifier batch accepted with warning");
        }
        result.into_result()?;

        raw.iter()
            .map(|value| Self::parse::<T>(value.as_ref()))
            .collect()
    }
}
