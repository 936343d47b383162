//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data built around one real entity, the fuel
//! company PKN Orlen, whose identifiers are public and stable. These fixtures
//! are designed to be consistent and predictable for unit tests.

use chrono::NaiveDate;
use domain_registry::{ReportRow, SearchReport};
use serde_json::{json, Value};

/// User key used by facade tests
pub const USER_KEY: &str = "123absdefg123";

/// Session ID the mock transport hands out
pub const SESSION_ID: &str = "12sessionid21";

/// Fixture for the example company
pub struct CompanyFixtures;

impl CompanyFixtures {
    pub const NIP: &'static str = "7740001454";
    pub const REGON: &'static str = "610188201";
    pub const REGON14: &'static str = "61018820100000";
    pub const KRS: &'static str = "28860";
    pub const NAME: &'static str = "POLSKI KONCERN NAFTOWY ORLEN SPÓŁKA AKCYJNA";

    /// The company as a search returns it
    pub fn search_report() -> SearchReport {
        SearchReport {
            regon: Self::REGON.to_string(),
            nip: Self::NIP.to_string(),
            nip_status: String::new(),
            name: Self::NAME.to_string(),
            province: "MAZOWIECKIE".to_string(),
            district: "m. Płock".to_string(),
            community: "M. Płock".to_string(),
            city: "Płock".to_string(),
            zip_code: "09-411".to_string(),
            street: "ul. Chemików".to_string(),
            property_number: "7".to_string(),
            apartment_number: String::new(),
            entity_type_code: "P".to_string(),
            silo_id: "6".to_string(),
            activity_end_date: String::new(),
            post_city: "Płock".to_string(),
        }
    }

    /// The same row in the shape the service encodes it
    pub fn search_payload() -> Value {
        json!({
            "Regon": Self::REGON,
            "Nip": Self::NIP,
            "StatusNip": "",
            "Nazwa": Self::NAME,
            "Wojewodztwo": "MAZOWIECKIE",
            "Powiat": "m. Płock",
            "Gmina": "M. Płock",
            "Miejscowosc": "Płock",
            "KodPocztowy": "09-411",
            "Ulica": "ul. Chemików",
            "NrNieruchomosci": "7",
            "NrLokalu": "",
            "Typ": "P",
            "SilosID": "6",
            "DataZakonczeniaDzialalnosci": "",
            "MiejscowoscPoczty": "Płock"
        })
    }

    /// First row of the `BIR11OsPrawna` report for the company
    pub fn legal_entity_row() -> ReportRow {
        [
            ("praw_regon9", Self::REGON),
            ("praw_nip", Self::NIP),
            ("praw_nazwa", Self::NAME),
            ("praw_numerWRejestrzeEwidencji", "0000028860"),
            ("praw_dataPowstania", "1993-06-29"),
            ("praw_dataRozpoczeciaDzialalnosci", "1993-07-01"),
            ("praw_dataZakonczeniaDzialalnosci", ""),
            ("praw_adSiedzKodPocztowy", "09411"),
            ("praw_adSiedzMiejscowosc_Nazwa", "Płock"),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
    }

    /// A local unit of the company
    pub fn local_unit() -> SearchReport {
        SearchReport {
            regon: "61018820100031".to_string(),
            name: Self::NAME.to_string(),
            entity_type_code: "LP".to_string(),
            silo_id: "6".to_string(),
            ..SearchReport::default()
        }
    }
}

/// Fixture for identifiers
pub struct IdentifierFixtures;

impl IdentifierFixtures {
    /// `count` distinct, well-formed NIPs
    pub fn nips(count: usize) -> Vec<String> {
        (0..count).map(|n| format!("{:010}", 7_740_001_454u64 + n as u64)).collect()
    }

    /// `count` distinct, well-formed 9-digit REGONs
    pub fn regons9(count: usize) -> Vec<String> {
        (0..count).map(|n| format!("{:09}", 610_188_201u64 + n as u64)).collect()
    }
}

/// Fixture for dates
pub struct DateFixtures;

impl DateFixtures {
    /// Data status as the service sends it
    pub const DATA_STATUS: &'static str = "31-12-2014";

    pub fn data_status() -> NaiveDate {
        NaiveDate::from_ymd_opt(2014, 12, 31).expect("valid date")
    }

    /// Day used for bulk report requests
    pub fn bulk_report_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 1, 1).expect("valid date")
    }
}
