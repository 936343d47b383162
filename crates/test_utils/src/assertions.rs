//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use domain_registry::{MockRegistryTransport, RegistryError, SearchReport, TransportCall};

use crate::fixtures::CompanyFixtures;

/// Asserts that a row describes the example company
///
/// # Panics
///
/// Panics naming the first field that differs
pub fn assert_valid_example_company(report: &SearchReport) {
    let expected = CompanyFixtures::search_report();
    assert_eq!(report.regon, expected.regon, "REGON differs");
    assert_eq!(report.nip, expected.nip, "NIP differs");
    assert_eq!(report.name, expected.name, "name differs");
    assert_eq!(report.province, expected.province, "province differs");
    assert_eq!(report.city, expected.city, "city differs");
    assert_eq!(report.zip_code, expected.zip_code, "zip code differs");
    assert_eq!(report.entity_type_code, expected.entity_type_code, "type differs");
}

/// Asserts that an error was raised before the transport was used
pub fn assert_local_error(error: &RegistryError) {
    assert!(
        error.is_local(),
        "Expected a locally detected error, got {error:?}"
    );
}

/// Asserts that the mock received no calls at all
pub async fn assert_no_transport_calls(transport: &MockRegistryTransport) {
    let calls = transport.calls().await;
    assert!(calls.is_empty(), "Expected no transport calls, got {calls:?}");
}

/// Asserts that every scripted call happened and nothing else
pub async fn assert_transport_satisfied(transport: &MockRegistryTransport) {
    if let Err(message) = transport.verify().await {
        panic!("{message}");
    }
}

/// Asserts that the only search sent used the given parameter
///
/// # Arguments
///
/// * `calls` - Calls recorded by the mock
/// * `name` - Wire name of the parameter, e.g. `Nipy`
/// * `value` - Expected parameter value
pub fn assert_single_search(calls: &[TransportCall], name: &str, value: &str) {
    let searches: Vec<_> = calls
        .iter()
        .filter_map(|call| match call {
            TransportCall::SearchData { request, .. } => Some(&request.parameters),
            _ => None,
        })
        .collect();

    assert_eq!(searches.len(), 1, "Expected exactly one search, got {searches:?}");
    assert_eq!(searches[0].name(), name, "Unexpected search parameter");
    assert_eq!(searches[0].value(), value, "Unexpected search value");
}
