use crate::domain::{AqiStandard, Unit};
use crate::error::ConfigError;
use config::{Config, Environment};
use serde::Deserialize;
use std::fmt::{Debug, Formatter};

pub const DEFAULT_BASE_URL: &str = "https://api.kaiterra.cn";

/// The two mutually exclusive ways of authorizing requests.
#[derive(Clone, PartialEq)]
pub enum Credentials {
    ApiKey(String),
    HmacSecret(String),
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::ApiKey(_) => f.write_str("ApiKey(***)"),
            Credentials::HmacSecret(_) => f.write_str("HmacSecret(***)"),
        }
    }
}

/// Read-only client configuration, fixed at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    credentials: Credentials,
    preferred_units: Vec<Unit>,
    aqi_standard: Option<AqiStandard>,
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Loads the configuration from `kaiterra.*`, `kaiterra_local.*` and `KAITERRA_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(environment())
    }

    fn load_with(environment: Environment) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(config::File::with_name("kaiterra").required(false))
            .add_source(config::File::with_name("kaiterra_local").required(false))
            .add_source(environment)
            .build()?;

        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings = config.try_deserialize::<Settings>()?;

        let mut builder = ClientConfig::builder()
            .preferred_units(settings.preferred_units)
            .aqi_standard(settings.aqi_standard);
        if let Some(base_url) = settings.base_url {
            builder = builder.base_url(base_url);
        }
        if let Some(api_key) = settings.api_key {
            builder = builder.api_key(api_key);
        }
        if let Some(hmac_secret) = settings.hmac_secret {
            builder = builder.hmac_secret(hmac_secret);
        }
        builder.build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn preferred_units(&self) -> &[Unit] {
        &self.preferred_units
    }

    pub fn aqi_standard(&self) -> Option<AqiStandard> {
        self.aqi_standard
    }
}

// Values stay strings, credentials like `00123` or `1e10` must not be parsed as numbers
fn environment() -> Environment {
    Environment::with_prefix("KAITERRA")
        .list_separator(",")
        .with_list_parse_key("preferred_units")
}

#[derive(Deserialize)]
struct Settings {
    base_url: Option<String>,
    api_key: Option<String>,
    hmac_secret: Option<String>,
    #[serde(default)]
    preferred_units: Vec<Unit>,
    aqi_standard: Option<AqiStandard>,
}

#[derive(Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    hmac_secret: Option<String>,
    preferred_units: Vec<Unit>,
    aqi_standard: Option<AqiStandard>,
}

impl ClientConfigBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn hmac_secret(mut self, hmac_secret: impl Into<String>) -> Self {
        self.hmac_secret = Some(hmac_secret.into());
        self
    }

    pub fn preferred_unit(mut self, unit: Unit) -> Self {
        self.preferred_units.push(unit);
        self
    }

    pub fn preferred_units(mut self, units: impl IntoIterator<Item = Unit>) -> Self {
        self.preferred_units.extend(units);
        self
    }

    pub fn aqi_standard(mut self, aqi_standard: Option<AqiStandard>) -> Self {
        self.aqi_standard = aqi_standard;
        self
    }

    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let credentials = match (self.api_key, self.hmac_secret) {
            (Some(api_key), None) => Credentials::ApiKey(api_key),
            (None, Some(hmac_secret)) => Credentials::HmacSecret(hmac_secret),
            (None, None) => return Err(ConfigError::MissingCredentials),
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingCredentials),
        };

        let base_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL).trim_end_matches('/').to_string();

        let mut preferred_units = Vec::with_capacity(self.preferred_units.len());
        for unit in self.preferred_units {
            if !preferred_units.contains(&unit) {
                preferred_units.push(unit);
            }
        }

        Ok(ClientConfig {
            base_url,
            credentials,
            preferred_units,
            aqi_standard: self.aqi_standard,
        })
    }
}
