use crate::client_config::{ClientConfig, Credentials};
use crate::domain::BatchResult;
use crate::error::{FormatError, InputError, KaiterraError};
use crate::kaiterra::batch_request::{BatchOptions, build_batch};
use crate::kaiterra::executor::{HttpExecutor, HttpRequest, ReqwestExecutor};
use crate::kaiterra::normalize::normalize;
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use std::fmt::{Debug, Formatter};
use tracing::{debug, info, instrument};

pub const BATCH_ENDPOINT: &str = "/v1/batch";
const RESERVED_QUERY_KEY: &str = "key";

/// Client for the Kaiterra REST API.
///
/// The client owns its HTTP executor and the connections pooled by it. They are released
/// by [`KaiterraClient::close`], or when the client is dropped.
pub struct KaiterraClient {
    config: ClientConfig,
    executor: Box<dyn HttpExecutor>,
}

impl KaiterraClient {
    pub fn new(config: ClientConfig) -> Result<Self, KaiterraError> {
        Ok(Self::with_executor(config, ReqwestExecutor::new()?))
    }

    pub fn with_executor(config: ClientConfig, executor: impl HttpExecutor + 'static) -> Self {
        debug!(base_url = config.base_url(), "Opened client");
        KaiterraClient {
            config,
            executor: Box::new(executor),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Retrieves the latest readings of up to 100 sensors in a single batch call.
    ///
    /// Ids look like `/lasereggs/00000000-0001-0001-0000-00007e57c0de` or
    /// `/sensedges/00000000-0031-0001-0000-00007e57c0de`. The result has one entry per id,
    /// in the same order, which is `None` for sensors that don't exist or never reported data.
    #[instrument(skip_all, fields(sensors = sensor_ids.len()))]
    pub async fn get_latest_readings<S: AsRef<str>>(&self, sensor_ids: &[S]) -> Result<BatchResult, KaiterraError> {
        let options = BatchOptions {
            preferred_units: self.config.preferred_units(),
            aqi_standard: self.config.aqi_standard(),
        };
        let requests = build_batch(sensor_ids, &options)?;
        let body = serde_json::to_value(&requests).map_err(FormatError::from)?;

        info!("Retrieving latest readings...");
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let response = self.request(Method::POST, BATCH_ENDPOINT, Vec::new(), headers, Some(body)).await?;

        let readings = normalize(response)?;
        info!(
            "Retrieving latest readings... OK, {} of {} sensors reported data",
            readings.iter().flatten().count(),
            readings.len()
        );

        Ok(readings)
    }

    /// Executes a request against `relative_url`, authorized with the configured credentials.
    ///
    /// The `key` query parameter is reserved for the API key and rejected when passed in `query`.
    pub async fn request(
        &self,
        method: Method,
        relative_url: &str,
        mut query: Vec<(String, String)>,
        headers: HeaderMap,
        body: Option<Value>,
    ) -> Result<Value, KaiterraError> {
        if let Some((key, _)) = query.iter().find(|(key, _)| key == RESERVED_QUERY_KEY) {
            return Err(InputError::ReservedQueryKey { key: key.clone() }.into());
        }

        if let Credentials::ApiKey(api_key) = self.config.credentials() {
            query.push((RESERVED_QUERY_KEY.to_string(), api_key.clone()));
        }

        let request = HttpRequest {
            method,
            url: format!("{}/{}", self.config.base_url(), relative_url.trim_start_matches('/')),
            query,
            headers,
            body,
        };

        Ok(self.executor.execute(request).await?)
    }

    /// Releases the executor and its pooled connections.
    pub fn close(self) {}
}

impl Drop for KaiterraClient {
    fn drop(&mut self) {
        debug!(base_url = self.config.base_url(), "Closed client");
    }
}

impl Debug for KaiterraClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KaiterraClient").field("config", &self.config).finish_non_exhaustive()
    }
}
