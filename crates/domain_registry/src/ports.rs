//! Registry Domain Ports
//!
//! This module defines the port the registry facade talks through. The
//! SOAP/XML encoding is not part of this workspace; an application plugs in
//! an adapter that implements [`RegistryTransport`] against the real service.
//!
//! # Architecture
//!
//! - **SOAP Adapter**: supplied by the application, speaks to
//!   [`crate::config::Environment::server_location_url`]
//! - **Mock Adapter**: scripted in-memory transport for tests (feature `mock`)
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_registry::{GusApi, RegistryTransport};
//! use std::sync::Arc;
//!
//! let transport: Arc<dyn RegistryTransport> = Arc::new(SoapTransport::new(&config));
//! let mut api = GusApi::create_with_api_client(config.user_key.clone(), transport);
//! api.login().await?;
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};

use crate::dto::{
    GetBulkReport, GetFullReport, GetFullReportResponse, GetValue, GetValueResponse, Login,
    LoginResponse, Logout, LogoutResponse, SearchData, SearchDataResponse,
};

/// The operations of the registry service
///
/// Each method performs exactly one remote call. Implementations must not
/// retry; failures are reported as `PortError` and surface to the caller.
#[async_trait]
pub trait RegistryTransport: DomainPort {
    /// Opens a session for the user key
    ///
    /// # Returns
    ///
    /// The response carrying the session ID, empty when the key is refused
    async fn login(&self, request: Login) -> Result<LoginResponse, PortError>;

    /// Closes the session named in the request
    async fn logout(&self, request: Logout) -> Result<LogoutResponse, PortError>;

    /// Reads a named diagnostic value
    ///
    /// # Arguments
    ///
    /// * `request` - The parameter to read
    /// * `session_id` - The session, when one is open; service-level values do not need one
    async fn get_value(
        &self,
        request: GetValue,
        session_id: Option<&str>,
    ) -> Result<GetValueResponse, PortError>;

    /// Searches entities by a single identifier parameter
    async fn search_data(
        &self,
        request: SearchData,
        session_id: &str,
    ) -> Result<SearchDataResponse, PortError>;

    /// Fetches a detailed report for one REGON
    async fn get_full_report(
        &self,
        request: GetFullReport,
        session_id: &str,
    ) -> Result<GetFullReportResponse, PortError>;

    /// Fetches the identifiers listed in a bulk report
    async fn get_bulk_report(
        &self,
        request: GetBulkReport,
        session_id: &str,
    ) -> Result<Vec<String>, PortError>;
}

/// Mock implementation of RegistryTransport for testing
///
/// Expectations are consumed in the order they were registered; a call that
/// does not match the next expectation fails with `PortError::Internal`.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use tokio::sync::Mutex;

    use crate::full_report::ReportRow;
    use crate::report_types::{BulkReportType, ReportType};
    use crate::search::SearchParameters;
    use crate::search_report::SearchReport;
    use crate::dto::ValueParameter;

    /// A call as the transport received it
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum TransportCall {
        Login(Login),
        Logout(Logout),
        GetValue {
            request: GetValue,
            session_id: Option<String>,
        },
        SearchData {
            request: SearchData,
            session_id: String,
        },
        GetFullReport {
            request: GetFullReport,
            session_id: String,
        },
        GetBulkReport {
            request: GetBulkReport,
            session_id: String,
        },
    }

    impl TransportCall {
        pub fn operation(&self) -> &'static str {
            match self {
                TransportCall::Login(_) => "login",
                TransportCall::Logout(_) => "logout",
                TransportCall::GetValue { .. } => "get_value",
                TransportCall::SearchData { .. } => "search_data",
                TransportCall::GetFullReport { .. } => "get_full_report",
                TransportCall::GetBulkReport { .. } => "get_bulk_report",
            }
        }
    }

    /// What the mock answers with
    #[derive(Debug)]
    pub enum TransportReply {
        Login(LoginResponse),
        Logout(LogoutResponse),
        Value(GetValueResponse),
        Search(SearchDataResponse),
        FullReport(GetFullReportResponse),
        BulkReport(Vec<String>),
        Error(PortError),
    }

    #[derive(Debug)]
    struct Expectation {
        call: TransportCall,
        reply: TransportReply,
    }

    /// Scripted in-memory transport
    #[derive(Debug, Default)]
    pub struct MockRegistryTransport {
        expectations: Mutex<VecDeque<Expectation>>,
        calls: Mutex<Vec<TransportCall>>,
    }

    impl MockRegistryTransport {
        /// Creates a mock with no expectations
        pub fn new() -> Self {
            Self::default()
        }

        /// Registers the next expected call and its reply
        pub async fn expect(&self, call: TransportCall, reply: TransportReply) {
            self.expectations
                .lock()
                .await
                .push_back(Expectation { call, reply });
        }

        pub async fn expect_login(&self, user_key: &str, session_id: &str) {
            self.expect(
                TransportCall::Login(Login::new(user_key)),
                TransportReply::Login(LoginResponse::new(session_id)),
            )
            .await;
        }

        pub async fn expect_logout(&self, session_id: &str, success: bool) {
            self.expect(
                TransportCall::Logout(Logout::new(session_id)),
                TransportReply::Logout(LogoutResponse::new(success)),
            )
            .await;
        }

        pub async fn expect_get_value(
            &self,
            parameter: ValueParameter,
            session_id: Option<&str>,
            value: &str,
        ) {
            self.expect(
                TransportCall::GetValue {
                    request: GetValue::new(parameter),
                    session_id: session_id.map(str::to_string),
                },
                TransportReply::Value(GetValueResponse::new(value)),
            )
            .await;
        }

        pub async fn expect_search(
            &self,
            parameters: SearchParameters,
            session_id: &str,
            rows: Vec<SearchReport>,
        ) {
            self.expect(
                TransportCall::SearchData {
                    request: SearchData::new(parameters),
                    session_id: session_id.to_string(),
                },
                TransportReply::Search(SearchDataResponse::new(rows)),
            )
            .await;
        }

        pub async fn expect_full_report(
            &self,
            regon: &str,
            report_type: ReportType,
            session_id: &str,
            rows: Vec<ReportRow>,
        ) {
            self.expect(
                TransportCall::GetFullReport {
                    request: GetFullReport::new(regon, report_type),
                    session_id: session_id.to_string(),
                },
                TransportReply::FullReport(GetFullReportResponse::new(rows)),
            )
            .await;
        }

        pub async fn expect_bulk_report(
            &self,
            date: &str,
            report_type: BulkReportType,
            session_id: &str,
            identifiers: Vec<String>,
        ) {
            self.expect(
                TransportCall::GetBulkReport {
                    request: GetBulkReport::new(date, report_type),
                    session_id: session_id.to_string(),
                },
                TransportReply::BulkReport(identifiers),
            )
            .await;
        }

        /// Registers a call that fails with the given error
        pub async fn expect_failure(&self, call: TransportCall, error: PortError) {
            self.expect(call, TransportReply::Error(error)).await;
        }

        /// Every call received so far, in order
        pub async fn calls(&self) -> Vec<TransportCall> {
            self.calls.lock().await.clone()
        }

        pub async fn call_count(&self) -> usize {
            self.calls.lock().await.len()
        }

        /// Number of registered expectations not yet consumed
        pub async fn pending(&self) -> usize {
            self.expectations.lock().await.len()
        }

        /// Fails when expectations are left over
        pub async fn verify(&self) -> Result<(), String> {
            let expectations = self.expectations.lock().await;
            if expectations.is_empty() {
                return Ok(());
            }
            let missing: Vec<String> = expectations
                .iter()
                .map(|expectation| format!("{:?}", expectation.call))
                .collect();
            Err(format!("Expected calls not received: {}", missing.join(", ")))
        }

        async fn answer(&self, call: TransportCall) -> Result<TransportReply, PortError> {
            self.calls.lock().await.push(call.clone());

            let expectation = self
                .expectations
                .lock()
                .await
                .pop_front()
                .ok_or_else(|| PortError::internal(format!("Unexpected transport call: {call:?}")))?;

            if expectation.call != call {
                return Err(PortError::internal(format!(
                    "Transport call mismatch: expected {:?}, got {:?}",
                    expectation.call, call
                )));
            }

            match expectation.reply {
                TransportReply::Error(error) => Err(error),
                reply => Ok(reply),
            }
        }

        fn wrong_reply(operation: &str, reply: &TransportReply) -> PortError {
            PortError::internal(format!("Scripted reply {reply:?} does not fit {operation}"))
        }
    }

    impl DomainPort for MockRegistryTransport {}

    #[async_trait]
    impl RegistryTransport for MockRegistryTransport {
        async fn login(&self, request: Login) -> Result<LoginResponse, PortError> {
            match self.answer(TransportCall::Login(request)).await? {
                TransportReply::Login(response) => Ok(response),
                other => Err(Self::wrong_reply("login", &other)),
            }
        }

        async fn logout(&self, request: Logout) -> Result<LogoutResponse, PortError> {
            match self.answer(TransportCall::Logout(request)).await? {
                TransportReply::Logout(response) => Ok(response),
                other => Err(Self::wrong_reply("logout", &other)),
            }
        }

        async fn get_value(
            &self,
            request: GetValue,
            session_id: Option<&str>,
        ) -> Result<GetValueResponse, PortError> {
            let call = TransportCall::GetValue {
                request,
                session_id: session_id.map(str::to_string),
            };
            match self.answer(call).await? {
                TransportReply::Value(response) => Ok(response),
                other => Err(Self::wrong_reply("get_value", &other)),
            }
        }

        async fn search_data(
            &self,
            request: SearchData,
            session_id: &str,
        ) -> Result<SearchDataResponse, PortError> {
            let call = TransportCall::SearchData {
                request,
                session_id: session_id.to_string(),
            };
            match self.answer(call).await? {
                TransportReply::Search(response) => Ok(response),
                other => Err(Self::wrong_reply("search_data", &other)),
            }
        }

        async fn get_full_report(
            &self,
            request: GetFullReport,
            session_id: &str,
        ) -> Result<GetFullReportResponse, PortError> {
            let call = TransportCall::GetFullReport {
                request,
                session_id: session_id.to_string(),
            };
            match self.answer(call).await? {
                TransportReply::FullReport(response) => Ok(response),
                other => Err(Self::wrong_reply("get_full_report", &other)),
            }
        }

        async fn get_bulk_report(
            &self,
            request: GetBulkReport,
            session_id: &str,
        ) -> Result<Vec<String>, PortError> {
            let call = TransportCall::GetBulkReport {
                request,
                session_id: session_id.to_string(),
            };
            match self.answer(call).await? {
                TransportReply::BulkReport(identifiers) => Ok(identifiers),
                other => Err(Self::wrong_reply("get_bulk_report", &other)),
            }
        }
    }
}
