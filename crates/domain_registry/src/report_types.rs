//! Report type codes
//!
//! The service names every report with a fixed string code. Codes arrive
//! from callers as strings and are checked against these whitelists before
//! anything is sent; an unknown code is an [`RegistryError::InvalidReportType`].
//!
//! # Full reports
//!
//! | variant | code |
//! |---------|------|
//! | `PersonGeneral` | `BIR11OsFizycznaDaneOgolne` |
//! | `PersonCeidg` | `BIR11OsFizycznaDzialalnoscCeidg` |
//! | `PersonAgricultural` | `BIR11OsFizycznaDzialalnoscRolnicza` |
//! | `PersonOther` | `BIR11OsFizycznaDzialalnoscPozostala` |
//! | `PersonDeletedBefore20141108` | `BIR11OsFizycznaDzialalnoscSkreslonaDo20141108` |
//! | `PersonActivities` | `BIR11OsFizycznaPkd` |
//! | `PersonLocalUnits` | `BIR11OsFizycznaListaJednLokalnych` |
//! | `PersonLocalUnit` | `BIR11JednLokalnaOsFizycznej` |
//! | `PersonLocalUnitActivities` | `BIR11JednLokalnaOsFizycznejPkd` |
//! | `LegalEntity` | `BIR11OsPrawna` |
//! | `LegalEntityActivities` | `BIR11OsPrawnaPkd` |
//! | `LegalEntityLocalUnits` | `BIR11OsPrawnaListaJednLokalnych` |
//! | `LegalEntityLocalUnit` | `BIR11JednLokalnaOsPrawnej` |
//! | `LegalEntityLocalUnitActivities` | `BIR11JednLokalnaOsPrawnejPkd` |
//! | `CivilPartnershipPartners` | `BIR11OsPrawnaSpCywilnaWspolnicy` |
//! | `UnitType` | `BIR11TypPodmiotu` |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RegistryError;
use crate::search_report::{EntityType, SearchReport, Silo};

macro_rules! report_codes {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            /// Every known code, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The code as the service expects it
            pub fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            /// Looks a code up in the whitelist
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Comma separated list of all codes, for error messages
            pub fn allowed_codes() -> String {
                Self::ALL
                    .iter()
                    .map(|report| report.code())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $name {
            type Err = RegistryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_code(s).ok_or_else(|| RegistryError::InvalidReportType {
                    report: s.to_string(),
                    allowed: Self::allowed_codes(),
                })
            }
        }
    };
}

report_codes! {
    /// Detailed report about a single entity
    ReportType {
        PersonGeneral => "BIR11OsFizycznaDaneOgolne",
        PersonCeidg => "BIR11OsFizycznaDzialalnoscCeidg",
        PersonAgricultural => "BIR11OsFizycznaDzialalnoscRolnicza",
        PersonOther => "BIR11OsFizycznaDzialalnoscPozostala",
        PersonDeletedBefore20141108 => "BIR11OsFizycznaDzialalnoscSkreslonaDo20141108",
        PersonActivities => "BIR11OsFizycznaPkd",
        PersonLocalUnits => "BIR11OsFizycznaListaJednLokalnych",
        PersonLocalUnit => "BIR11JednLokalnaOsFizycznej",
        PersonLocalUnitActivities => "BIR11JednLokalnaOsFizycznejPkd",
        LegalEntity => "BIR11OsPrawna",
        LegalEntityActivities => "BIR11OsPrawnaPkd",
        LegalEntityLocalUnits => "BIR11OsPrawnaListaJednLokalnych",
        LegalEntityLocalUnit => "BIR11JednLokalnaOsPrawnej",
        LegalEntityLocalUnitActivities => "BIR11JednLokalnaOsPrawnejPkd",
        CivilPartnershipPartners => "BIR11OsPrawnaSpCywilnaWspolnicy",
        UnitType => "BIR11TypPodmiotu",
    }
}

report_codes! {
    /// Report listing identifiers changed on a given day
    BulkReportType {
        NewLegalEntitiesAndNaturalPersons => "BIR11NowePodmiotyPrawneOrazDzialalnosciOsFizycznych",
        UpdatedLegalEntitiesAndNaturalPersons => "BIR11AktualizowanePodmiotyPrawneOrazDzialalnosciOsFizycznych",
        DeletedLegalEntitiesAndNaturalPersons => "BIR11SkreslonePodmiotyPrawneOrazDzialalnosciOsFizycznych",
        NewLocalUnits => "BIR11NoweJednostkiLokalne",
        UpdatedLocalUnits => "BIR11AktualizowaneJednostkiLokalne",
        DeletedLocalUnits => "BIR11SkresloneJednostkiLokalne",
    }
}

impl ReportType {
    /// Whether the report is keyed by the 14-digit REGON
    ///
    /// Local unit reports address the unit itself, and the entity type
    /// report accepts either form; both are sent the long number.
    pub fn requires_regon14(&self) -> bool {
        matches!(
            self,
            ReportType::PersonLocalUnit
                | ReportType::PersonLocalUnitActivities
                | ReportType::LegalEntityLocalUnit
                | ReportType::LegalEntityLocalUnitActivities
                | ReportType::UnitType
        )
    }

    /// Picks the natural full report for a search row
    ///
    /// Returns `None` when the row's type or silo is not one the service documents.
    pub fn for_search_report(report: &SearchReport) -> Option<ReportType> {
        match report.entity_type()? {
            EntityType::LegalEntity => Some(ReportType::LegalEntity),
            EntityType::LegalEntityLocalUnit => Some(ReportType::LegalEntityLocalUnit),
            EntityType::NaturalPersonLocalUnit => Some(ReportType::PersonLocalUnit),
            EntityType::NaturalPerson => match report.silo()? {
                Silo::Ceidg => Some(ReportType::PersonCeidg),
                Silo::Agricultural => Some(ReportType::PersonAgricultural),
                Silo::Other => Some(ReportType::PersonOther),
                Silo::DeletedBefore20141108 => Some(ReportType::PersonDeletedBefore20141108),
                Silo::LegalEntity => None,
            },
        }
    }
}
