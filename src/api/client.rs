//! ProxyPool API Client
//!
//! A reqwest client for the ProxyPool admin endpoints.

use crate::api::ProxyPoolApi;
use crate::api::error::ApiError;
use crate::api::types::{ProxyPage, StatsSnapshot};
use crate::consts::dashboard_consts::{API_KEY_HEADER, PROXIES_ENDPOINT, STATS_ENDPOINT, refresh};
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, Response};
use serde_json::Value;

// Build timestamp in milliseconds since epoch
const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP", "Build timestamp not available");

// User-Agent string with dashboard version
const USER_AGENT: &str = concat!("proxypool-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ProxyPoolClient {
    client: Client,
    environment: Environment,
    api_key: Option<String>,
}

impl ProxyPoolClient {
    pub fn new(environment: Environment, api_key: Option<String>) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(refresh::http_timeout())
            .timeout(refresh::http_timeout())
            .build()?;
        Ok(Self {
            client,
            environment,
            api_key: api_key.filter(|key| !key.is_empty()),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Starts a request against `endpoint` with the standard headers attached.
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, self.build_url(endpoint))
            .header("User-Agent", USER_AGENT)
            .header("X-Build-Timestamp", BUILD_TIMESTAMP);
        match &self.api_key {
            Some(key) => builder.header(API_KEY_HEADER, key),
            None => builder,
        }
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        let response = self
            .request(Method::GET, endpoint)
            .query(query)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait::async_trait]
impl ProxyPoolApi for ProxyPoolClient {
    async fn get_stats(&self) -> Result<StatsSnapshot, ApiError> {
        let value = self.get_json(STATS_ENDPOINT, &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn get_proxies(&self, limit: u32, offset: u64) -> Result<ProxyPage, ApiError> {
        let query = [("limit", limit.to_string()), ("offset", offset.to_string())];
        let value = self.get_json(PROXIES_ENDPOINT, &query).await?;
        ProxyPage::from_value(value)
    }
}
