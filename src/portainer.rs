//! Thin client for the parts of the Portainer API the exporter reads.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use crate::metrics::{containers_from_response, endpoints_from_response};
use crate::types::{Config, Endpoint, RawContainerRecord};

pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, thiserror::Error)]
pub enum PortainerError {
    #[error("API token is not a valid header value: {0}")]
    InvalidToken(#[from] InvalidHeaderValue),
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("{status} for url ({url})")]
    Status { url: String, status: StatusCode },
    #[error("invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

pub type Result<T> = std::result::Result<T, PortainerError>;

/// Authenticated Portainer client. Cheap to clone; configuration is fixed at construction.
#[derive(Debug, Clone)]
pub struct PortainerClient {
    http: reqwest::Client,
    base_url: String,
}

impl PortainerClient {
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(token)?;
        api_key.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::new(&cfg.portainer_url, &cfg.portainer_token, cfg.request_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/endpoints`
    pub async fn list_endpoints(&self) -> Result<Vec<Endpoint>> {
        let body = self.get_json("/api/endpoints").await?;
        Ok(endpoints_from_response(body))
    }

    /// `GET /api/endpoints/{id}/docker/containers/json?all=true`, stopped containers included.
    pub async fn list_containers(&self, endpoint_id: i64) -> Result<Vec<RawContainerRecord>> {
        let path = format!("/api/endpoints/{}/docker/containers/json?all=true", endpoint_id);
        let body = self.get_json(&path).await?;
        Ok(containers_from_response(body))
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "GET");
        let res = self.http.get(&url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(PortainerError::Status { url, status });
        }
        res.json::<Value>().await.map_err(|source| {
            if source.is_decode() {
                PortainerError::Decode { url, source }
            } else {
                PortainerError::Request(source)
            }
        })
    }
}
