//! Registry client facade
//!
//! [`GusApi`] owns the session and turns the typed operations of this crate
//! into transport calls. Every operation performs at most one remote call
//! per value it returns; validation happens before the transport is touched.
//!
//! # Session rules
//!
//! - `login` stores the session ID the service returns
//! - searches, reports, `logout` and `session_status` need an open session
//!   and fail with [`RegistryError::NotLoggedIn`] otherwise
//! - the service-level values (`data_status`, `service_status`, ...) are
//!   sent with the session when one is open and without it otherwise

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use core_kernel::temporal::format_report_date;
use core_kernel::{
    parse_data_status_date, AdapterHealth, HealthCheckResult, HealthCheckable, Krs, Nip, Regon14,
    Regon9,
};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::config::RegistryConfig;
use crate::dto::{GetBulkReport, GetFullReport, GetValue, Login, Logout, SearchData, ValueParameter};
use crate::error::RegistryError;
use crate::full_report::FullReport;
use crate::ports::RegistryTransport;
use crate::report_types::{BulkReportType, ReportType};
use crate::search::SearchParameters;
use crate::search_report::SearchReport;
use crate::session::Session;
use crate::validation::IdentifierValidator;

/// Identifier reported by the health check
pub const HEALTH_CHECK_ID: &str = "gus_bir11";

/// Client for the REGON registry service
pub struct GusApi {
    session: Session,
    transport: Arc<dyn RegistryTransport>,
}

impl fmt::Debug for GusApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GusApi")
            .field("session", &self.session.masked_id())
            .field("logged_in", &self.session.is_open())
            .finish_non_exhaustive()
    }
}

impl GusApi {
    /// Creates a client over an existing transport
    ///
    /// # Arguments
    ///
    /// * `user_key` - Key issued by the registry operator
    /// * `transport` - Adapter that performs the remote calls
    pub fn create_with_api_client(
        user_key: impl Into<String>,
        transport: Arc<dyn RegistryTransport>,
    ) -> Self {
        Self {
            session: Session::new(user_key),
            transport,
        }
    }

    /// Creates a client from validated configuration
    pub fn from_config(
        config: &RegistryConfig,
        transport: Arc<dyn RegistryTransport>,
    ) -> Result<Self, RegistryError> {
        let mut config = config.clone();
        config.apply_environment_defaults();
        config.validate()?;

        debug!(environment = %config.environment, "Creating registry client");
        Ok(Self::create_with_api_client(config.user_key, transport))
    }

    pub fn user_key(&self) -> &str {
        self.session.user_key()
    }

    pub fn set_user_key(&mut self, user_key: impl Into<String>) {
        self.session.set_user_key(user_key);
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session.session_id()
    }

    /// Resumes a session obtained elsewhere
    pub fn set_session_id(&mut self, session_id: impl Into<String>) {
        self.session.start(session_id);
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// Logs in with the configured user key
    ///
    /// # Returns
    ///
    /// `true` once a session is open; an empty answer from the service is
    /// reported as [`RegistryError::InvalidUserKey`]
    #[instrument(skip(self))]
    pub async fn login(&mut self) -> Result<bool, RegistryError> {
        debug!("Dispatching login");
        let response = match self.transport.login(Login::new(self.session.user_key())).await {
            Ok(response) => response,
            Err(error) if error.is_unauthorized() => {
                self.session.end();
                warn!(error = %error, "Login refused by the registry service");
                return Err(RegistryError::InvalidUserKey);
            }
            Err(error) => return Err(error.into()),
        };

        if response.session_id.is_empty() {
            self.session.end();
            warn!("Login rejected by the registry service");
            return Err(RegistryError::InvalidUserKey);
        }

        self.session.start(response.session_id);
        info!(session = %self.session.masked_id(), "Logged in to the registry service");
        Ok(true)
    }

    /// Ends the current session
    ///
    /// # Returns
    ///
    /// The answer of the service; the local session is cleared only on `true`
    #[instrument(skip(self), fields(session = %self.session.masked_id()))]
    pub async fn logout(&mut self) -> Result<bool, RegistryError> {
        let session_id = self.session.require_session_id()?.to_string();
        let response = self.transport.logout(Logout::new(session_id)).await?;

        if response.success {
            self.session.end();
            info!("Logged out of the registry service");
        } else {
            warn!("Registry service refused to end the session");
        }
        Ok(response.success)
    }

    /// Asks the service whether the session is still alive
    pub async fn is_logged(&self) -> Result<bool, RegistryError> {
        if !self.session.is_open() {
            return Ok(false);
        }
        Ok(self.session_status().await? != 0)
    }

    /// `StatusSesji`: 1 for a live session, 0 otherwise
    pub async fn session_status(&self) -> Result<i32, RegistryError> {
        let session_id = self.session.require_session_id()?;
        let raw = self
            .get_value(ValueParameter::SessionStatus, Some(session_id))
            .await?;
        parse_integer_value(ValueParameter::SessionStatus, &raw)
    }

    // ========================================================================
    // Diagnostic values
    // ========================================================================

    /// `StatusUslugi`: 1 available, 2 technical break, 0 unavailable
    pub async fn service_status(&self) -> Result<i32, RegistryError> {
        let raw = self.service_value(ValueParameter::ServiceStatus).await?;
        parse_integer_value(ValueParameter::ServiceStatus, &raw)
    }

    /// `KomunikatUslugi`, verbatim
    pub async fn service_message(&self) -> Result<String, RegistryError> {
        self.service_value(ValueParameter::ServiceMessage).await
    }

    /// `KomunikatKod`: code of the last message for the session
    pub async fn message_code(&self) -> Result<i32, RegistryError> {
        let raw = self.service_value(ValueParameter::MessageCode).await?;
        parse_integer_value(ValueParameter::MessageCode, &raw)
    }

    /// `KomunikatTresc`, verbatim
    pub async fn message(&self) -> Result<String, RegistryError> {
        self.service_value(ValueParameter::Message).await
    }

    /// `StanDanych`: the day the registry data is current as of
    pub async fn data_status(&self) -> Result<NaiveDate, RegistryError> {
        let raw = self.service_value(ValueParameter::DataStatus).await?;
        parse_data_status_date(&raw).map_err(|error| {
            warn!(value = %raw, "Unparseable data status");
            RegistryError::from(error)
        })
    }

    /// Summary of the last search, one `name:value` line per diagnostic
    pub async fn result_search_message(&self) -> Result<String, RegistryError> {
        let session_status = self.session_status().await?;
        let message_code = self.message_code().await?;
        let message = self.message().await?;

        Ok(format!(
            "{}:{}\n{}:{}\n{}:{}\n",
            ValueParameter::SessionStatus,
            session_status,
            ValueParameter::MessageCode,
            message_code,
            ValueParameter::Message,
            message
        ))
    }

    async fn service_value(&self, parameter: ValueParameter) -> Result<String, RegistryError> {
        self.get_value(parameter, self.session.session_id()).await
    }

    async fn get_value(
        &self,
        parameter: ValueParameter,
        session_id: Option<&str>,
    ) -> Result<String, RegistryError> {
        debug!(parameter = %parameter, with_session = session_id.is_some(), "Dispatching GetValue");
        let response = self
            .transport
            .get_value(GetValue::new(parameter), session_id)
            .await?;
        Ok(response.value)
    }

    // ========================================================================
    // Searches
    // ========================================================================

    pub async fn get_by_nip(&self, nip: &str) -> Result<Vec<SearchReport>, RegistryError> {
        let nip: Nip = IdentifierValidator::parse(nip)?;
        self.search(SearchParameters::by_nip(&nip)).await
    }

    /// Search by REGON in either its 9 or 14-digit form
    pub async fn get_by_regon(&self, regon: &str) -> Result<Vec<SearchReport>, RegistryError> {
        let parameters = match IdentifierValidator::parse::<Regon9>(regon) {
            Ok(regon) => SearchParameters::by_regon(&regon),
            Err(_) => {
                let regon: Regon14 = IdentifierValidator::parse(regon).map_err(|_| {
                    RegistryError::invalid_argument(format!(
                        "REGON must consist of 9 or 14 digits, got '{regon}'"
                    ))
                })?;
                SearchParameters::by_regon14(&regon)
            }
        };
        self.search(parameters).await
    }

    pub async fn get_by_krs(&self, krs: &str) -> Result<Vec<SearchReport>, RegistryError> {
        let krs: Krs = IdentifierValidator::parse(krs)?;
        self.search(SearchParameters::by_krs(&krs)).await
    }

    /// Batch search by tax IDs, at most 20 at a time
    pub async fn get_by_nips<S: AsRef<str>>(
        &self,
        nips: &[S],
    ) -> Result<Vec<SearchReport>, RegistryError> {
        let nips: Vec<Nip> = IdentifierValidator::parse_batch(nips)?;
        self.search(SearchParameters::by_nips(&nips)?).await
    }

    /// Batch search by 9-digit REGONs, at most 20 at a time
    pub async fn get_by_regons9<S: AsRef<str>>(
        &self,
        regons: &[S],
    ) -> Result<Vec<SearchReport>, RegistryError> {
        let regons: Vec<Regon9> = IdentifierValidator::parse_batch(regons)?;
        self.search(SearchParameters::by_regons9(&regons)?).await
    }

    /// Batch search by 14-digit REGONs, at most 20 at a time
    pub async fn get_by_regons14<S: AsRef<str>>(
        &self,
        regons: &[S],
    ) -> Result<Vec<SearchReport>, RegistryError> {
        let regons: Vec<Regon14> = IdentifierValidator::parse_batch(regons)?;
        self.search(SearchParameters::by_regons14(&regons)?).await
    }

    /// Batch search by court register numbers, at most 20 at a time
    pub async fn get_by_krses<S: AsRef<str>>(
        &self,
        krses: &[S],
    ) -> Result<Vec<SearchReport>, RegistryError> {
        let krses: Vec<Krs> = IdentifierValidator::parse_batch(krses)?;
        self.search(SearchParameters::by_krses(&krses)?).await
    }

    /// Runs a search with prepared parameters
    #[instrument(skip(self, parameters), fields(parameter = parameters.name()))]
    pub async fn search(
        &self,
        parameters: SearchParameters,
    ) -> Result<Vec<SearchReport>, RegistryError> {
        let session_id = self.session.require_session_id()?;
        debug!(
            identifiers = parameters.identifier_count(),
            "Dispatching search"
        );

        let response = self
            .transport
            .search_data(SearchData::new(parameters), session_id)
            .await?;
        debug!(rows = response.rows.len(), "Search finished");
        Ok(response.rows)
    }

    // ========================================================================
    // Reports
    // ========================================================================

    /// Fetches a full report by report name
    ///
    /// # Arguments
    ///
    /// * `search_report` - A row returned by one of the searches
    /// * `report_name` - Report type code, e.g. `BIR11OsPrawna`
    ///
    /// # Returns
    ///
    /// The report rows; an unknown name fails with
    /// [`RegistryError::InvalidReportType`] before anything is sent
    pub async fn get_full_report(
        &self,
        search_report: &SearchReport,
        report_name: &str,
    ) -> Result<FullReport, RegistryError> {
        let report_type: ReportType = report_name.parse()?;
        self.full_report(search_report, report_type).await
    }

    /// Fetches a full report of a known type
    #[instrument(skip(self, search_report), fields(report = %report_type))]
    pub async fn full_report(
        &self,
        search_report: &SearchReport,
        report_type: ReportType,
    ) -> Result<FullReport, RegistryError> {
        let session_id = self.session.require_session_id()?;
        let regon = if report_type.requires_regon14() {
            search_report.regon14()
        } else {
            search_report.regon.clone()
        };
        debug!(regon = %regon, "Dispatching full report");

        let response = self
            .transport
            .get_full_report(GetFullReport::new(regon.clone(), report_type), session_id)
            .await?;
        Ok(FullReport::new(report_type, regon, response.rows))
    }

    /// Fetches the report [`GusApi::report_type_for`] picks for the row
    pub async fn natural_full_report(
        &self,
        search_report: &SearchReport,
    ) -> Result<FullReport, RegistryError> {
        let report_type = Self::report_type_for(search_report).ok_or_else(|| {
            RegistryError::invalid_argument(format!(
                "No full report matches entity type '{}' in silo '{}'",
                search_report.entity_type_code, search_report.silo_id
            ))
        })?;
        self.full_report(search_report, report_type).await
    }

    /// Fetches the identifiers listed in a bulk report by report name
    pub async fn get_bulk_report(
        &self,
        date: NaiveDate,
        report_name: &str,
    ) -> Result<Vec<String>, RegistryError> {
        let report_type: BulkReportType = report_name.parse()?;
        self.bulk_report(date, report_type).await
    }

    /// Fetches the identifiers listed in a bulk report of a known type
    #[instrument(skip(self), fields(report = %report_type))]
    pub async fn bulk_report(
        &self,
        date: NaiveDate,
        report_type: BulkReportType,
    ) -> Result<Vec<String>, RegistryError> {
        let session_id = self.session.require_session_id()?;
        let date = format_report_date(date);
        debug!(date = %date, "Dispatching bulk report");

        let identifiers = self
            .transport
            .get_bulk_report(GetBulkReport::new(date, report_type), session_id)
            .await?;
        Ok(identifiers)
    }

    /// The full report that describes a search row best
    pub fn report_type_for(search_report: &SearchReport) -> Option<ReportType> {
        ReportType::for_search_report(search_report)
    }
}

fn parse_integer_value(parameter: ValueParameter, raw: &str) -> Result<i32, RegistryError> {
    raw.trim().parse::<i32>().map_err(|_| {
        warn!(parameter = %parameter, value = %raw, "Non-integer value from GetValue");
        RegistryError::invalid_response(format!(
            "{parameter} returned '{raw}', expected an integer"
        ))
    })
}

#[async_trait]
impl HealthCheckable for GusApi {
    async fn health_check(&self) -> HealthCheckResult {
        let started = Instant::now();
        let (status, message) = match self.service_status().await {
            Ok(1) => (AdapterHealth::Healthy, None),
            Ok(2) => (
                AdapterHealth::Degraded,
                Some("Technical break".to_string()),
            ),
            Ok(0) => (
                AdapterHealth::Unhealthy,
                Some("Service unavailable".to_string()),
            ),
            Ok(other) => (
                AdapterHealth::Unknown,
                Some(format!("Unexpected service status {other}")),
            ),
            Err(error) => (AdapterHealth::Unknown, Some(error.to_string())),
        };

        HealthCheckResult {
            adapter_id: HEALTH_CHECK_ID.to_string(),
            status,
            latency_ms: started.elapsed().as_millis() as u64,
            message,
            checked_at: Utc::now(),
        }
    }
}
