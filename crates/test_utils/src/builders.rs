//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use std::sync::Arc;

use domain_registry::{GusApi, MockRegistryTransport, SearchReport};

use crate::fixtures::{CompanyFixtures, SESSION_ID, USER_KEY};

/// Builder for search rows
pub struct SearchReportBuilder {
    report: SearchReport,
}

impl Default for SearchReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchReportBuilder {
    /// Creates a builder starting from the example company
    pub fn new() -> Self {
        Self {
            report: CompanyFixtures::search_report(),
        }
    }

    /// Starts from a natural person running a business in the given silo
    pub fn natural_person(silo_id: u8) -> Self {
        Self::new()
            .with_name("JAN KOWALSKI")
            .with_nip("")
            .with_entity_type("F")
            .with_silo(silo_id)
    }

    pub fn with_regon(mut self, regon: impl Into<String>) -> Self {
        self.report.regon = regon.into();
        self
    }

    pub fn with_nip(mut self, nip: impl Into<String>) -> Self {
        self.report.nip = nip.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.report.name = name.into();
        self
    }

    /// Sets the `Typ` code (`P`, `F`, `LP`, `LF`)
    pub fn with_entity_type(mut self, code: impl Into<String>) -> Self {
        self.report.entity_type_code = code.into();
        self
    }

    pub fn with_silo(mut self, silo_id: u8) -> Self {
        self.report.silo_id = silo_id.to_string();
        self
    }

    /// Marks the entity as closed on the given `YYYY-mm-dd` day
    pub fn with_activity_end_date(mut self, date: impl Into<String>) -> Self {
        self.report.activity_end_date = date.into();
        self
    }

    pub fn build(self) -> SearchReport {
        self.report
    }
}

/// Builder for a client wired to a mock transport
pub struct GusApiBuilder {
    user_key: String,
    session_id: Option<String>,
    transport: Arc<MockRegistryTransport>,
}

impl Default for GusApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GusApiBuilder {
    /// Creates a builder with the fixture user key and no session
    pub fn new() -> Self {
        Self {
            user_key: USER_KEY.to_string(),
            session_id: None,
            transport: Arc::new(MockRegistryTransport::new()),
        }
    }

    pub fn with_user_key(mut self, user_key: impl Into<String>) -> Self {
        self.user_key = user_key.into();
        self
    }

    /// Opens the fixture session without a login call
    pub fn logged_in(self) -> Self {
        self.with_session_id(SESSION_ID)
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Builds the client and hands back the transport for scripting
    pub fn build(self) -> (GusApi, Arc<MockRegistryTransport>) {
        let mut api = GusApi::create_with_api_client(self.user_key, self.transport.clone());
        if let Some(session_id) = self.session_id {
            api.set_session_id(session_id);
        }
        (api, self.transport)
    }
}
