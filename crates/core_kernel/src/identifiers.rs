//! Strongly-typed registry identifiers
//!
//! Newtype wrappers around the digit strings the registry service accepts,
//! so a tax ID can never be passed where a REGON is expected. Parsing strips
//! spaces and dashes (`774-000-14-54`) and checks that what remains is made of
//! digits and has the expected length. Checksums are left to the service.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Removes the separators people commonly type into identifiers
fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

fn validate_digits(digits: &str, label: &str, min: usize, max: usize) -> Result<(), CoreError> {
    let length_ok = (min..=max).contains(&digits.len());
    if !length_ok || !digits.bytes().all(|b| b.is_ascii_digit()) {
        let expected = if min == max {
            format!("{min}")
        } else {
            format!("{min} to {max}")
        };
        return Err(CoreError::validation(format!(
            "{label} must consist of {expected} digits, got '{digits}'"
        )));
    }
    Ok(())
}

macro_rules! define_identifier {
    ($name:ident, $label:literal, $min:expr, $max:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parses and normalizes a raw identifier
            pub fn parse(raw: &str) -> Result<Self, CoreError> {
                let digits = normalize(raw);
                validate_digits(&digits, $label, $min, $max)?;
                Ok(Self(digits))
            }

            /// Returns the normalized digits
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the human readable name of the identifier kind
            pub fn label() -> &'static str {
                $label
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_identifier!(Nip, "NIP", 10, 10);
define_identifier!(Regon9, "REGON", 9, 9);
define_identifier!(Regon14, "REGON-14", 14, 14);
define_identifier!(Krs, "KRS", 1, 10);

impl Regon9 {
    /// Widens a 9-digit REGON to the 14-digit form used by local units
    pub fn to_regon14(&self) -> Regon14 {
        Regon14(format!("{}00000", self.0))
    }
}

impl Regon14 {
    /// The 9-digit REGON of the parent entity
    pub fn parent(&self) -> Regon9 {
        Regon9(self.0[..9].to_string())
    }

    /// Whether this number identifies the entity itself rather than a local unit
    pub fn is_parent_entity(&self) -> bool {
        self.0.ends_with("00000")
    }
}

/// Joins identifiers into the comma separated form used by batch searches
pub fn join_batch<T: AsRef<str>>(ids: &[T]) -> String {
    ids.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}
