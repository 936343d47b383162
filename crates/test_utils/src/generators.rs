//! Property-Based Test Generators
//!
//! Provides proptest strategies for identifiers and `fake` based generators
//! for search rows with plausible, random content.

use fake::faker::address::en::{CityName, StateName, ZipCode};
use fake::faker::company::en::CompanyName;
use fake::Fake;
use proptest::prelude::*;

use domain_registry::SearchReport;

/// Strategy for well-formed NIPs
pub fn nip_strategy() -> impl Strategy<Value = String> {
    "[0-9]{10}"
}

/// Strategy for well-formed 9-digit REGONs
pub fn regon9_strategy() -> impl Strategy<Value = String> {
    "[0-9]{9}"
}

/// Strategy for well-formed 14-digit REGONs
pub fn regon14_strategy() -> impl Strategy<Value = String> {
    "[0-9]{14}"
}

/// Strategy for KRS numbers, with and without leading zeros
pub fn krs_strategy() -> impl Strategy<Value = String> {
    "[0-9]{1,10}"
}

/// Strategy for NIPs written with the usual dash grouping
pub fn dashed_nip_strategy() -> impl Strategy<Value = (String, String)> {
    nip_strategy().prop_map(|nip| {
        let dashed = format!("{}-{}-{}-{}", &nip[0..3], &nip[3..6], &nip[6..8], &nip[8..10]);
        (dashed, nip)
    })
}

/// Strategy for batches that stay within the service limit
pub fn nip_batch_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(nip_strategy(), 1..=20)
}

/// Strategy for batches over the service limit
pub fn oversized_nip_batch_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(nip_strategy(), 21..=40)
}

/// Strategy for report names the service does not know
pub fn unknown_report_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,24}".prop_filter("must not be a known code", |name| {
        name.parse::<domain_registry::ReportType>().is_err()
            && name.parse::<domain_registry::BulkReportType>().is_err()
    })
}

/// A legal entity row with random name and address
pub fn fake_search_report() -> SearchReport {
    let regon: u64 = (100_000_000..999_999_999u64).fake();
    let nip: u64 = (1_000_000_000..9_999_999_999u64).fake();

    SearchReport {
        regon: regon.to_string(),
        nip: nip.to_string(),
        name: CompanyName().fake(),
        province: StateName().fake::<String>().to_uppercase(),
        city: CityName().fake(),
        zip_code: ZipCode().fake(),
        entity_type_code: "P".to_string(),
        silo_id: "6".to_string(),
        ..SearchReport::default()
    }
}

/// `count` random legal entity rows
pub fn fake_search_reports(count: usize) -> Vec<SearchReport> {
    (0..count).map(|_| fake_search_report()).collect()
}
