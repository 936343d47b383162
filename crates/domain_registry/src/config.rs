//! Registry client configuration
//!
//! Settings are read from `GUS_*` environment variables (a `.env` file is
//! honoured) and validated before a client is built.
//!
//! | variable            | default      |
//! |---------------------|--------------|
//! | `GUS_USER_KEY`      | test key in development, required in production |
//! | `GUS_ENVIRONMENT`   | `production` |
//! | `GUS_TIMEOUT_SECS`  | `30`         |
//! | `GUS_LOG_LEVEL`     | `info`       |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use validator::Validate;

use crate::error::RegistryError;

/// Public key accepted by the test instance of the service
pub const DEVELOPMENT_USER_KEY: &str = "abcde12345abcde12345";

const PRODUCTION_SERVER_URL: &str =
    "https://wyszukiwarkaregon.stat.gov.pl/wsBIR/UslugaBIRzewnPubl.svc";
const DEVELOPMENT_SERVER_URL: &str =
    "https://wyszukiwarkaregontest.stat.gov.pl/wsBIR/UslugaBIRzewnPubl.svc";
const PRODUCTION_WSDL_URL: &str =
    "https://wyszukiwarkaregon.stat.gov.pl/wsBIR/wsdl/UslugaBIRzewnPubl-ver11-prod.wsdl";
const DEVELOPMENT_WSDL_URL: &str =
    "https://wyszukiwarkaregontest.stat.gov.pl/wsBIR/wsdl/UslugaBIRzewnPubl-ver11-test.wsdl";

/// Service instance to talk to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    #[serde(alias = "prod")]
    Production,
    #[serde(alias = "dev", alias = "test")]
    Development,
}

impl Environment {
    /// SOAP endpoint of the instance
    pub fn server_location_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_SERVER_URL,
            Environment::Development => DEVELOPMENT_SERVER_URL,
        }
    }

    /// WSDL describing the endpoint
    pub fn wsdl_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_WSDL_URL,
            Environment::Development => DEVELOPMENT_WSDL_URL,
        }
    }

    /// Key to use when none is configured; production has none
    pub fn default_user_key(&self) -> Option<&'static str> {
        match self {
            Environment::Production => None,
            Environment::Development => Some(DEVELOPMENT_USER_KEY),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Development => "development",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "development" | "dev" | "test" => Ok(Environment::Development),
            other => Err(RegistryError::Configuration(format!(
                "Unknown environment '{other}', expected production or development"
            ))),
        }
    }
}

/// Registry client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegistryConfig {
    /// User key issued by the registry operator
    #[serde(default)]
    #[validate(length(min = 1, message = "user key must not be empty"))]
    pub user_key: String,
    /// Service instance
    #[serde(default)]
    pub environment: Environment,
    /// Timeout the transport should apply to each call
    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1, max = 300))]
    pub timeout_secs: u64,
    /// Log filter directive for the embedding application
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            user_key: String::new(),
            environment: Environment::Production,
            timeout_secs: default_timeout_secs(),
            log_level: default_log_level(),
        }
    }
}

impl RegistryConfig {
    /// Prefix of the environment variables read by [`RegistryConfig::from_env`]
    pub const ENV_PREFIX: &'static str = "GUS";

    /// Configuration for the test instance with its public key
    pub fn development() -> Self {
        Self {
            user_key: DEVELOPMENT_USER_KEY.to_string(),
            environment: Environment::Development,
            ..Self::default()
        }
    }

    /// Loads configuration from the process environment and `.env`
    pub fn from_env() -> Result<Self, RegistryError> {
        dotenvy::dotenv().ok();
        Self::load(config::Environment::with_prefix(Self::ENV_PREFIX))
    }

    /// Loads configuration from explicit `GUS_*` variables instead of the process environment
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let source: config::Map<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        Self::load(
            config::Environment::with_prefix(Self::ENV_PREFIX).source(Some(source)),
        )
    }

    fn load(source: config::Environment) -> Result<Self, RegistryError> {
        let mut loaded: RegistryConfig = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;

        loaded.apply_environment_defaults();
        loaded.validate()?;
        Ok(loaded)
    }

    /// Fills in the user key the environment provides when none is set
    pub fn apply_environment_defaults(&mut self) {
        if self.user_key.trim().is_empty() {
            if let Some(key) = self.environment.default_user_key() {
                self.user_key = key.to_string();
            }
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn server_location_url(&self) -> &'static str {
        self.environment.server_location_url()
    }

    pub fn wsdl_url(&self) -> &'static str {
        self.environment.wsdl_url()
    }
}
