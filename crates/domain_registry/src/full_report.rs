//! Full report decoding
//!
//! Full reports come back as a list of flat rows (field name to string
//! value). The field set depends on the report type and is owned by the
//! service, so rows are kept as maps instead of one struct per schema.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use core_kernel::temporal::parse_optional_report_date;
use core_kernel::JsonSerializable;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::RegistryError;
use crate::report_types::ReportType;

/// One row of a full report
pub type ReportRow = BTreeMap<String, String>;

/// A decoded full report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullReport {
    /// The report that was requested
    pub report_type: ReportType,
    /// REGON the report was requested for
    pub regon: String,
    /// Rows in the order the service returned them
    pub rows: Vec<ReportRow>,
}

impl FullReport {
    pub fn new(report_type: ReportType, regon: impl Into<String>, rows: Vec<ReportRow>) -> Self {
        Self {
            report_type,
            regon: regon.into(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first row; single-entity reports have exactly one
    pub fn first(&self) -> Option<&ReportRow> {
        self.rows.first()
    }

    /// Field value from the first row, `None` when absent or empty
    pub fn field(&self, name: &str) -> Option<&str> {
        self.first()
            .and_then(|row| row.get(name))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Date field from the first row (`YYYY-mm-dd`)
    pub fn date_field(&self, name: &str) -> Result<Option<NaiveDate>, RegistryError> {
        match self.first().and_then(|row| row.get(name)) {
            Some(value) => Ok(parse_optional_report_date(value)?),
            None => Ok(None),
        }
    }
}

impl JsonSerializable for FullReport {
    fn json_serialize(&self) -> Value {
        json!({
            "reportType": self.report_type.code(),
            "regon": self.regon,
            "rows": self.rows,
        })
    }
}
