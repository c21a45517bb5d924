use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

/// Performs the actual network call. Non-2xx responses are errors; the decoded JSON body is returned.
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<Value, TransportError>;
}

/// Executor backed by a pooled reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    client: Client,
}

impl ReqwestExecutor {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder().user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))).build()?;
        Ok(ReqwestExecutor { client })
    }

    pub fn with_client(client: Client) -> Self {
        ReqwestExecutor { client }
    }
}

#[async_trait]
impl HttpExecutor for ReqwestExecutor {
    #[instrument(skip_all, fields(method = %request.method))]
    async fn execute(&self, request: HttpRequest) -> Result<Value, TransportError> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .query(&request.query)
            .headers(request.headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?.error_for_status()?;
        debug!(status = %response.status(), "Received response");

        Ok(response.json::<Value>().await?)
    }
}
