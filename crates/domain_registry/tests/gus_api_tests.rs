//! Integration tests for the registry client facade
//!
//! Every test scripts the mock transport with the exact calls the client is
//! expected to make and checks both the returned value and the call log.

use std::sync::Arc;

use core_kernel::PortError;
use domain_registry::dto::{GetValue, Login, ValueParameter};
use domain_registry::{
    BulkReportType, GusApi, MockRegistryTransport, RegistryConfig, RegistryError, ReportType,
    SearchParameters, TransportCall,
};
use proptest::prelude::*;
use test_utils::{
    assert_local_error, assert_no_transport_calls, assert_single_search,
    assert_transport_satisfied, assert_valid_example_company, init_test_tracing, nip_batch_strategy,
    oversized_nip_batch_strategy, CompanyFixtures,
    DateFixtures, GusApiBuilder, IdentifierFixtures, SearchReportBuilder, SESSION_ID, USER_KEY,
};

async fn logged_in() -> (GusApi, Arc<MockRegistryTransport>) {
    init_test_tracing();
    let (mut api, transport) = GusApiBuilder::new().build();
    transport.expect_login(USER_KEY, SESSION_ID).await;
    assert!(api.login().await.unwrap());
    (api, transport)
}

// ============================================================================
// Session
// ============================================================================

mod session_tests {
    use super::*;

    #[tokio::test]
    async fn test_login() {
        let (api, transport) = logged_in().await;
        assert_eq!(api.user_key(), USER_KEY);
        assert_eq!(api.session_id(), Some(SESSION_ID));
        assert_transport_satisfied(&transport).await;
    }

    #[tokio::test]
    async fn test_invalid_login() {
        let (mut api, transport) = GusApiBuilder::new().with_user_key("invalid-key").build();
        transport.expect_login("invalid-key", "").await;

        let result = api.login().await;
        assert!(matches!(result, Err(RegistryError::InvalidUserKey)));
        assert_eq!(api.session_id(), None);
        assert_transport_satisfied(&transport).await;
    }

    #[tokio::test]
    async fn test_set_user_key_is_used_on_next_login() {
        let (mut api, transport) = GusApiBuilder::new().build();
        api.set_user_key("other-key");
        transport.expect_login("other-key", SESSION_ID).await;

        assert!(api.login().await.unwrap());
        assert_eq!(api.user_key(), "other-key");
        assert_transport_satisfied(&transport).await;
    }

    #[tokio::test]
    async fn test_logout() {
        let (mut api, transport) = GusApiBuilder::new().logged_in().build();
        transport.expect_logout(SESSION_ID, true).await;

        assert!(api.logout().await.unwrap());
        assert_eq!(api.session_id(), None);
        assert_transport_satisfied(&transport).await;
    }

    #[tokio::test]
    async fn test_logout_without_session() {
        let (mut api, transport) = GusApiBuilder::new().build();
        let error = api.logout().await.unwrap_err();
        assert!(matches!(error, RegistryError::NotLoggedIn));
        assert_no_transport_calls(&transport).await;
    }

    #[tokio::test]
    async fn test_session_status() {
        let (api, transport) = GusApiBuilder::new().logged_in().build();
        for _ in 0..2 {
            transport
                .expect_get_value(ValueParameter::SessionStatus, Some(SESSION_ID), "1")
                .await;
        }

        assert_eq!(api.session_status().await.unwrap(), 1);
        assert!(api.is_logged().await.unwrap());
        assert_transport_satisfied(&transport).await;
    }

    #[tokio::test]
    async fn test_expired_session_is_not_logged() {
        let (api, transport) = GusApiBuilder::new().logged_in().build();
        transport
            .expect_get_value(ValueParameter::SessionStatus, Some(SESSION_ID), "0")
            .await;

        assert!(!api.is_logged().await.unwrap());
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces() {
        let (mut api, transport) = GusApiBuilder::new().build();
        transport
            .expect_failure(
                TransportCall::Login(Login::new(USER_KEY)),
                PortError::connection("connection refused"),
            )
            .await;

        let error = api.login().await.unwrap_err();
        assert!(matches!(error, RegistryError::Transport(PortError::Connection { .. })));
        assert!(!error.is_local());
        assert_eq!(transport.call_count().await, 1);
    }

    #[tokio::test]
    async fn test_refused_credentials_are_invalid_user_key() {
        let (mut api, transport) = GusApiBuilder::new().logged_in().build();
        transport
            .expect_failure(
                TransportCall::Login(Login::new(USER_KEY)),
                PortError::unauthorized("key revoked"),
            )
            .await;

        let error = api.login().await.unwrap_err();
        assert!(matches!(error, RegistryError::InvalidUserKey));
        assert_eq!(api.session_id(), None);
    }

    #[tokio::test]
    async fn test_service_fault_surfaces_as_transport_error() {
        let (api, transport) = GusApiBuilder::new().logged_in().build();
        transport
            .expect_failure(
                TransportCall::GetValue {
                    request: GetValue::new(ValueParameter::SessionStatus),
                    session_id: Some(SESSION_ID.to_string()),
                },
                PortError::fault("a:InternalServiceFault", "Object reference not set"),
            )
            .await;

        let error = api.session_status().await.unwrap_err();
        assert!(matches!(error, RegistryError::Transport(PortError::Fault { .. })));
    }

    #[tokio::test]
    async fn test_from_config() {
        let transport = Arc::new(MockRegistryTransport::new());
        let api = GusApi::from_config(&RegistryConfig::development(), transport).unwrap();
        assert_eq!(api.user_key(), domain_registry::DEVELOPMENT_USER_KEY);
    }

    #[tokio::test]
    async fn test_from_config_rejects_missing_key() {
        let transport = Arc::new(MockRegistryTransport::new());
        let result = GusApi::from_config(&RegistryConfig::default(), transport);
        assert!(matches!(result, Err(RegistryError::Configuration(_))));
    }
}

// ============================================================================
// Diagnostic values
// ============================================================================

mod value_tests {
    use super::*;

    async fn api_expecting(parameter: ValueParameter, value: &str) -> (GusApi, Arc<MockRegistryTransport>) {
        let (api, transport) = GusApiBuilder::new().build();
        transport.expect_get_value(parameter, None, value).await;
        (api, transport)
    }

    #[tokio::test]
    async fn test_data_status() {
        let (api, _transport) =
            api_expecting(ValueParameter::DataStatus, DateFixtures::DATA_STATUS).await;
        assert_eq!(api.data_status().await.unwrap(), DateFixtures::data_status());
    }

    #[tokio::test]
    async fn test_data_status_with_invalid_date_format() {
        let (api, _transport) = api_expecting(ValueParameter::DataStatus, "random-format").await;
        let error = api.data_status().await.unwrap_err();
        assert!(matches!(error, RegistryError::InvalidServerResponse(_)));
    }

    #[tokio::test]
    async fn test_service_status() {
        let (api, _transport) = api_expecting(ValueParameter::ServiceStatus, "1").await;
        assert_eq!(api.service_status().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_service_status_not_a_number() {
        let (api, _transport) = api_expecting(ValueParameter::ServiceStatus, "").await;
        let error = api.service_status().await.unwrap_err();
        assert!(matches!(error, RegistryError::InvalidServerResponse(_)));
    }

    #[tokio::test]
    async fn test_service_message() {
        let (api, _transport) =
            api_expecting(ValueParameter::ServiceMessage, "Example service message").await;
        assert_eq!(api.service_message().await.unwrap(), "Example service message");
    }

    #[tokio::test]
    async fn test_message() {
        let (api, _transport) = api_expecting(ValueParameter::Message, "Example message").await;
        assert_eq!(api.message().await.unwrap(), "Example message");
    }

    #[tokio::test]
    async fn test_message_code() {
        let (api, transport) = api_expecting(ValueParameter::MessageCode, "1").await;
        assert_eq!(api.message_code().await.unwrap(), 1);
        assert_eq!(
            transport.calls().await,
            vec![TransportCall::GetValue {
                request: GetValue::new(ValueParameter::MessageCode),
                session_id: None,
            }]
        );
    }

    #[tokio::test]
    async fn test_result_search_message() {
        let (api, transport) = GusApiBuilder::new().logged_in().build();
        transport
            .expect_get_value(ValueParameter::SessionStatus, Some(SESSION_ID), "1")
            .await;
        transport
            .expect_get_value(ValueParameter::MessageCode, Some(SESSION_ID), "1")
            .await;
        transport
            .expect_get_value(ValueParameter::Message, Some(SESSION_ID), "Server Test Error")
            .await;

        assert_eq!(
            api.result_search_message().await.unwrap(),
            "StatusSesji:1\nKomunikatKod:1\nKomunikatTresc:Server Test Error\n"
        );
        assert_transport_satisfied(&transport).await;
    }
}

// ============================================================================
// Searches
// ============================================================================

mod search_tests {
    use super::*;

    async fn expect_search(transport: &MockRegistryTransport, parameters: SearchParameters) {
        transport
            .expect_search(parameters, SESSION_ID, vec![CompanyFixtures::search_report()])
            .await;
    }

    async fn check_single_result(
        result: Result<Vec<domain_registry::SearchReport>, RegistryError>,
        transport: &MockRegistryTransport,
        name: &str,
        value: &str,
    ) {
        let rows = result.unwrap();
        assert_eq!(rows.len(), 1);
        assert_valid_example_company(&rows[0]);
        assert_single_search(&transport.calls().await, name, value);
        assert_transport_satisfied(transport).await;
    }

    #[tokio::test]
    async fn test_get_by_krs() {
        let (api, transport) = logged_in().await;
        expect_search(&transport, SearchParameters::Krs("28860".into())).await;
        let result = api.get_by_krs(CompanyFixtures::KRS).await;
        check_single_result(result, &transport, "Krs", "28860").await;
    }

    #[tokio::test]
    async fn test_get_by_krses() {
        let (api, transport) = logged_in().await;
        expect_search(&transport, SearchParameters::Krses("28860".into())).await;
        let result = api.get_by_krses(&[CompanyFixtures::KRS]).await;
        check_single_result(result, &transport, "Krsy", "28860").await;
    }

    #[tokio::test]
    async fn test_get_by_nip() {
        let (api, transport) = logged_in().await;
        expect_search(&transport, SearchParameters::Nip("7740001454".into())).await;
        let result = api.get_by_nip(CompanyFixtures::NIP).await;
        check_single_result(result, &transport, "Nip", "7740001454").await;
    }

    #[tokio::test]
    async fn test_get_by_nips() {
        let (api, transport) = logged_in().await;
        expect_search(&transport, SearchParameters::Nips("7740001454".into())).await;
        let result = api.get_by_nips(&[CompanyFixtures::NIP]).await;
        check_single_result(result, &transport, "Nipy", "7740001454").await;
    }

    #[tokio::test]
    async fn test_get_by_regon() {
        let (api, transport) = logged_in().await;
        expect_search(&transport, SearchParameters::Regon("610188201".into())).await;
        let result = api.get_by_regon(CompanyFixtures::REGON).await;
        check_single_result(result, &transport, "Regon", "610188201").await;
    }

    #[tokio::test]
    async fn test_get_by_regon_accepts_local_unit_regon() {
        let (api, transport) = logged_in().await;
        expect_search(&transport, SearchParameters::Regon("61018820100031".into())).await;
        let result = api.get_by_regon("61018820100031").await;
        check_single_result(result, &transport, "Regon", "61018820100031").await;
    }

    #[tokio::test]
    async fn test_get_by_regon_rejects_other_lengths() {
        let (api, transport) = GusApiBuilder::new().logged_in().build();

        let error = api.get_by_regon("6101882010").await.unwrap_err();
        match error {
            RegistryError::InvalidArgument(message) => assert!(message.contains("9 or 14 digits")),
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
        assert_no_transport_calls(&transport).await;
    }

    #[tokio::test]
    async fn test_get_by_regons9() {
        let (api, transport) = logged_in().await;
        expect_search(&transport, SearchParameters::Regons9("610188201".into())).await;
        let result = api.get_by_regons9(&[CompanyFixtures::REGON]).await;
        check_single_result(result, &transport, "Regony9zn", "610188201").await;
    }

    #[tokio::test]
    async fn test_get_by_regons14() {
        let (api, transport) = logged_in().await;
        expect_search(&transport, SearchParameters::Regons14("61018820100000".into())).await;
        let result = api.get_by_regons14(&[CompanyFixtures::REGON14]).await;
        check_single_result(result, &transport, "Regony14zn", "61018820100000").await;
    }

    #[tokio::test]
    async fn test_batch_is_comma_joined() {
        let (api, transport) = logged_in().await;
        let nips = IdentifierFixtures::nips(3);
        expect_search(&transport, SearchParameters::Nips(nips.join(","))).await;

        api.get_by_nips(&nips).await.unwrap();
        assert_transport_satisfied(&transport).await;
    }

    #[tokio::test]
    async fn test_dashed_nip_is_normalized() {
        let (api, transport) = logged_in().await;
        expect_search(&transport, SearchParameters::Nip("7740001454".into())).await;

        api.get_by_nip("774-000-14-54").await.unwrap();
        assert_transport_satisfied(&transport).await;
    }

    #[tokio::test]
    async fn test_too_many_nips_raises_an_error() {
        let (api, transport) = GusApiBuilder::new().logged_in().build();
        let nips = vec![CompanyFixtures::NIP; 21];

        let error = api.get_by_nips(&nips).await.unwrap_err();
        assert!(matches!(error, RegistryError::InvalidArgument(_)));
        assert_no_transport_calls(&transport).await;
    }

    #[tokio::test]
    async fn test_twenty_identifiers_are_accepted() {
        let (api, transport) = logged_in().await;
        let regons = IdentifierFixtures::regons9(20);
        expect_search(&transport, SearchParameters::Regons9(regons.join(","))).await;

        assert!(api.get_by_regons9(&regons).await.is_ok());
    }

    #[tokio::test]
    async fn test_malformed_identifier_is_rejected_locally() {
        let (api, transport) = GusApiBuilder::new().logged_in().build();

        let error = api.get_by_nip("77400014").await.unwrap_err();
        assert!(matches!(error, RegistryError::InvalidArgument(_)));
        assert_no_transport_calls(&transport).await;
    }

    #[tokio::test]
    async fn test_search_without_session() {
        let (api, transport) = GusApiBuilder::new().build();

        let error = api.get_by_krs(CompanyFixtures::KRS).await.unwrap_err();
        assert!(matches!(error, RegistryError::NotLoggedIn));
        assert_no_transport_calls(&transport).await;
    }

    #[tokio::test]
    async fn test_validation_precedes_session_check() {
        let (api, _transport) = GusApiBuilder::new().build();
        let nips = IdentifierFixtures::nips(21);

        let error = api.get_by_nips(&nips).await.unwrap_err();
        assert!(matches!(error, RegistryError::InvalidArgument(_)));
    }
}

// ============================================================================
// Reports
// ============================================================================

mod report_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_full_report() {
        let (api, transport) = logged_in().await;
        transport
            .expect_full_report(
                CompanyFixtures::REGON,
                ReportType::LegalEntity,
                SESSION_ID,
                vec![CompanyFixtures::legal_entity_row()],
            )
            .await;

        let report = api
            .get_full_report(&CompanyFixtures::search_report(), "BIR11OsPrawna")
            .await
            .unwrap();

        assert_eq!(report.report_type, ReportType::LegalEntity);
        assert_eq!(report.regon, CompanyFixtures::REGON);
        assert_eq!(report.len(), 1);
        assert_eq!(report.field("praw_nip"), Some(CompanyFixtures::NIP));
        assert_eq!(report.field("praw_dataZakonczeniaDzialalnosci"), None);
        assert_transport_satisfied(&transport).await;
    }

    #[tokio::test]
    async fn test_get_full_report_with_regon14_report_type() {
        let (api, transport) = logged_in().await;
        transport
            .expect_full_report(
                CompanyFixtures::REGON14,
                ReportType::UnitType,
                SESSION_ID,
                vec![],
            )
            .await;

        let report = api
            .get_full_report(&CompanyFixtures::search_report(), "BIR11TypPodmiotu")
            .await
            .unwrap();
        assert!(report.is_empty());
        assert_eq!(report.regon, CompanyFixtures::REGON14);
        assert_transport_satisfied(&transport).await;
    }

    #[tokio::test]
    async fn test_get_full_report_with_invalid_report_type() {
        let (api, transport) = GusApiBuilder::new().logged_in().build();

        let error = api
            .get_full_report(&CompanyFixtures::search_report(), "invalid-report-name")
            .await
            .unwrap_err();
        match &error {
            RegistryError::InvalidReportType { report, allowed } => {
                assert_eq!(report, "invalid-report-name");
                assert!(allowed.contains("BIR11OsPrawna"));
            }
            other => panic!("Expected InvalidReportType, got {other:?}"),
        }
        assert_local_error(&error);
        assert_no_transport_calls(&transport).await;
    }

    #[tokio::test]
    async fn test_invalid_report_type_checked_before_session() {
        let (api, _transport) = GusApiBuilder::new().build();
        let error = api
            .get_full_report(&CompanyFixtures::search_report(), "invalid-report-name")
            .await
            .unwrap_err();
        assert!(matches!(error, RegistryError::InvalidReportType { .. }));
    }

    #[tokio::test]
    async fn test_full_report_without_session() {
        let (api, transport) = GusApiBuilder::new().build();
        let error = api
            .full_report(&CompanyFixtures::search_report(), ReportType::LegalEntity)
            .await
            .unwrap_err();
        assert!(matches!(error, RegistryError::NotLoggedIn));
        assert_no_transport_calls(&transport).await;
    }

    #[tokio::test]
    async fn test_natural_full_report_for_person() {
        let (api, transport) = logged_in().await;
        let person = SearchReportBuilder::natural_person(1).build();
        transport
            .expect_full_report(&person.regon, ReportType::PersonCeidg, SESSION_ID, vec![])
            .await;

        let report = api.natural_full_report(&person).await.unwrap();
        assert_eq!(report.report_type, ReportType::PersonCeidg);
    }

    #[tokio::test]
    async fn test_natural_full_report_for_local_unit_uses_regon14() {
        let (api, transport) = logged_in().await;
        let unit = CompanyFixtures::local_unit();
        transport
            .expect_full_report(
                "61018820100031",
                ReportType::LegalEntityLocalUnit,
                SESSION_ID,
                vec![],
            )
            .await;

        api.natural_full_report(&unit).await.unwrap();
        assert_transport_satisfied(&transport).await;
    }

    #[tokio::test]
    async fn test_natural_full_report_without_match() {
        let (api, transport) = GusApiBuilder::new().logged_in().build();
        let unknown = SearchReportBuilder::new().with_entity_type("X").build();

        let error = api.natural_full_report(&unknown).await.unwrap_err();
        assert!(matches!(error, RegistryError::InvalidArgument(_)));
        assert_no_transport_calls(&transport).await;
    }

    #[tokio::test]
    async fn test_get_bulk_report() {
        let (api, transport) = logged_in().await;
        transport
            .expect_bulk_report(
                "2019-01-01",
                BulkReportType::NewLocalUnits,
                SESSION_ID,
                vec!["000111234".to_string(), "111999023".to_string()],
            )
            .await;

        let identifiers = api
            .get_bulk_report(DateFixtures::bulk_report_date(), "BIR11NoweJednostkiLokalne")
            .await
            .unwrap();
        assert_eq!(identifiers, vec!["000111234", "111999023"]);
        assert_transport_satisfied(&transport).await;
    }

    #[tokio::test]
    async fn test_get_bulk_report_with_invalid_report_name() {
        let (api, transport) = GusApiBuilder::new().logged_in().build();

        let error = api
            .get_bulk_report(DateFixtures::bulk_report_date(), "invalid-report-name")
            .await
            .unwrap_err();
        assert!(matches!(error, RegistryError::InvalidReportType { .. }));
        assert_no_transport_calls(&transport).await;
    }

    #[tokio::test]
    async fn test_bulk_report_without_session() {
        let (api, transport) = GusApiBuilder::new().build();
        let error = api
            .bulk_report(DateFixtures::bulk_report_date(), BulkReportType::NewLocalUnits)
            .await
            .unwrap_err();
        assert!(matches!(error, RegistryError::NotLoggedIn));
        assert_no_transport_calls(&transport).await;
    }

    #[test]
    fn test_report_type_for() {
        assert_eq!(
            GusApi::report_type_for(&CompanyFixtures::search_report()),
            Some(ReportType::LegalEntity)
        );
        assert_eq!(
            GusApi::report_type_for(&SearchReportBuilder::natural_person(2).build()),
            Some(ReportType::PersonAgricultural)
        );
    }
}

// ============================================================================
// Batch properties
// ============================================================================

mod batch_property_tests {
    use super::*;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn batches_within_limit_send_one_joined_search(nips in nip_batch_strategy()) {
            runtime().block_on(async {
                let (api, transport) = GusApiBuilder::new().logged_in().build();
                transport
                    .expect_search(SearchParameters::Nips(nips.join(",")), SESSION_ID, vec![])
                    .await;

                assert!(api.get_by_nips(&nips).await.unwrap().is_empty());
                assert_single_search(&transport.calls().await, "Nipy", &nips.join(","));
            });
        }

        #[test]
        fn oversized_batches_never_reach_transport(nips in oversized_nip_batch_strategy()) {
            runtime().block_on(async {
                let (api, transport) = GusApiBuilder::new().logged_in().build();

                let error = api.get_by_nips(&nips).await.unwrap_err();
                assert!(matches!(error, RegistryError::InvalidArgument(_)));
                assert_no_transport_calls(&transport).await;
            });
        }
    }
}
