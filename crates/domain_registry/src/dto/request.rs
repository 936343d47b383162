//! Request DTOs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::report_types::{BulkReportType, ReportType};
use crate::search::SearchParameters;

/// `Zaloguj`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    #[serde(rename = "pKluczUzytkownika")]
    pub user_key: String,
}

impl Login {
    pub fn new(user_key: impl Into<String>) -> Self {
        Self {
            user_key: user_key.into(),
        }
    }
}

/// `Wyloguj`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logout {
    #[serde(rename = "pIdentyfikatorSesji")]
    pub session_id: String,
}

impl Logout {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }
}

/// Names accepted by `GetValue`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueParameter {
    /// Date the registry data is current as of
    #[serde(rename = "StanDanych")]
    DataStatus,
    /// Code of the last message for the session
    #[serde(rename = "KomunikatKod")]
    MessageCode,
    /// Text of the last message for the session
    #[serde(rename = "KomunikatTresc")]
    Message,
    /// 1 when the session is alive, 0 otherwise
    #[serde(rename = "StatusSesji")]
    SessionStatus,
    /// Availability of the service
    #[serde(rename = "StatusUslugi")]
    ServiceStatus,
    /// Free-form service announcement
    #[serde(rename = "KomunikatUslugi")]
    ServiceMessage,
}

impl ValueParameter {
    pub fn name(&self) -> &'static str {
        match self {
            ValueParameter::DataStatus => "StanDanych",
            ValueParameter::MessageCode => "KomunikatKod",
            ValueParameter::Message => "KomunikatTresc",
            ValueParameter::SessionStatus => "StatusSesji",
            ValueParameter::ServiceStatus => "StatusUslugi",
            ValueParameter::ServiceMessage => "KomunikatUslugi",
        }
    }
}

impl fmt::Display for ValueParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `GetValue`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetValue {
    #[serde(rename = "pNazwaParametru")]
    pub parameter: ValueParameter,
}

impl GetValue {
    pub fn new(parameter: ValueParameter) -> Self {
        Self { parameter }
    }
}

/// `DaneSzukajPodmioty`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchData {
    #[serde(rename = "pParametryWyszukiwania")]
    pub parameters: SearchParameters,
}

impl SearchData {
    pub fn new(parameters: SearchParameters) -> Self {
        Self { parameters }
    }
}

/// `DanePobierzPelnyRaport`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetFullReport {
    #[serde(rename = "pRegon")]
    pub regon: String,
    #[serde(rename = "pNazwaRaportu")]
    pub report_name: ReportType,
}

impl GetFullReport {
    pub fn new(regon: impl Into<String>, report_name: ReportType) -> Self {
        Self {
            regon: regon.into(),
            report_name,
        }
    }
}

/// `DanePobierzRaportZbiorczy`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBulkReport {
    /// Report day as `YYYY-mm-dd`
    #[serde(rename = "pDataRaportu")]
    pub date: String,
    #[serde(rename = "pNazwaRaportu")]
    pub report_name: BulkReportType,
}

impl GetBulkReport {
    pub fn new(date: impl Into<String>, report_name: BulkReportType) -> Self {
        Self {
            date: date.into(),
            report_name,
        }
    }
}
