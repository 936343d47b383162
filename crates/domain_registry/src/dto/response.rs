//! Response DTOs

use serde::{Deserialize, Serialize};

use crate::full_report::ReportRow;
use crate::search_report::SearchReport;

/// `ZalogujResult`; an empty session ID means the key was refused
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "ZalogujResult", default)]
    pub session_id: String,
}

impl LoginResponse {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }
}

/// `WylogujResult`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutResponse {
    #[serde(rename = "WylogujResult", default)]
    pub success: bool,
}

impl LogoutResponse {
    pub fn new(success: bool) -> Self {
        Self { success }
    }
}

/// `GetValueResult`; always a string on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetValueResponse {
    #[serde(rename = "GetValueResult", default)]
    pub value: String,
}

impl GetValueResponse {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// `DaneSzukajPodmiotyResult`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDataResponse {
    #[serde(rename = "DaneSzukajPodmiotyResult", default)]
    pub rows: Vec<SearchReport>,
}

impl SearchDataResponse {
    pub fn new(rows: Vec<SearchReport>) -> Self {
        Self { rows }
    }
}

/// `DanePobierzPelnyRaportResult`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetFullReportResponse {
    #[serde(rename = "DanePobierzPelnyRaportResult", default)]
    pub rows: Vec<ReportRow>,
}

impl GetFullReportResponse {
    pub fn new(rows: Vec<ReportRow>) -> Self {
        Self { rows }
    }
}
