//! Search parameters
//!
//! A search sends exactly one parameter. The enum makes that a property of
//! the type: each variant is one wire field (`Nip`, `Nipy`, `Regony9zn`, ...)
//! and serializes as a single-key map, which is the shape of
//! `pParametryWyszukiwania`. Batch variants carry comma-joined identifiers.

use core_kernel::identifiers::join_batch;
use core_kernel::{Krs, Nip, Regon14, Regon9};
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::validation::IdentifierValidator;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchParameters {
    #[serde(rename = "Krs")]
    Krs(String),
    #[serde(rename = "Krsy")]
    Krses(String),
    #[serde(rename = "Nip")]
    Nip(String),
    #[serde(rename = "Nipy")]
    Nips(String),
    #[serde(rename = "Regon")]
    Regon(String),
    #[serde(rename = "Regony9zn")]
    Regons9(String),
    #[serde(rename = "Regony14zn")]
    Regons14(String),
}

impl SearchParameters {
    pub fn by_nip(nip: &Nip) -> Self {
        SearchParameters::Nip(nip.to_string())
    }

    pub fn by_krs(krs: &Krs) -> Self {
        SearchParameters::Krs(krs.to_string())
    }

    pub fn by_regon(regon: &Regon9) -> Self {
        SearchParameters::Regon(regon.to_string())
    }

    /// Single search by a local unit's 14-digit REGON; sent in the same `Regon` field
    pub fn by_regon14(regon: &Regon14) -> Self {
        SearchParameters::Regon(regon.to_string())
    }

    /// Batch search by tax IDs; at most [`crate::validation::MAX_IDENTIFIERS`]
    pub fn by_nips(nips: &[Nip]) -> Result<Self, RegistryError> {
        IdentifierValidator::check_count(nips.len())?;
        Ok(SearchParameters::Nips(join_batch(nips)))
    }

    pub fn by_krses(krses: &[Krs]) -> Result<Self, RegistryError> {
        IdentifierValidator::check_count(krses.len())?;
        Ok(SearchParameters::Krses(join_batch(krses)))
    }

    pub fn by_regons9(regons: &[Regon9]) -> Result<Self, RegistryError> {
        IdentifierValidator::check_count(regons.len())?;
        Ok(SearchParameters::Regons9(join_batch(regons)))
    }

    pub fn by_regons14(regons: &[Regon14]) -> Result<Self, RegistryError> {
        IdentifierValidator::check_count(regons.len())?;
        Ok(SearchParameters::Regons14(join_batch(regons)))
    }

    /// Wire name of the parameter that is set
    pub fn name(&self) -> &'static str {
        match self {
            SearchParameters::Krs(_) => "Krs",
            SearchParameters::Krses(_) => "Krsy",
            SearchParameters::Nip(_) => "Nip",
            SearchParameters::Nips(_) => "Nipy",
            SearchParameters::Regon(_) => "Regon",
            SearchParameters::Regons9(_) => "Regony9zn",
            SearchParameters::Regons14(_) => "Regony14zn",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            SearchParameters::Krs(value)
            | SearchParameters::Krses(value)
            | SearchParameters::Nip(value)
            | SearchParameters::Nips(value)
            | SearchParameters::Regon(value)
            | SearchParameters::Regons9(value)
            | SearchParameters::Regons14(value) => value,
        }
    }

    pub fn is_batch(&self) -> bool {
        matches!(
            self,
            SearchParameters::Krses(_)
                | SearchParameters::Nips(_)
                | SearchParameters::Regons9(_)
                | SearchParameters::Regons14(_)
        )
    }

    /// Number of identifiers carried
    pub fn identifier_count(&self) -> usize {
        self.value().split(',').filter(|id| !id.is_empty()).count()
    }
}
