use std::time::Duration;

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct Config {
    pub portainer_url: String,
    pub portainer_token: String,
    pub scrape_interval: Duration,
    pub listen_port: u16,
    pub log_level: String,
    pub request_timeout: Duration,
}

/// A Docker host registered in Portainer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub id: i64,
    pub name: String,
}

/// One entry of the Docker "list containers" response as proxied by Portainer.
///
/// Every field is optional and tolerant of wrong types: a field that does not
/// decode into the expected type is treated as absent. `Names` entries are kept
/// as raw JSON so one bad entry does not discard the others.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawContainerRecord {
    #[serde(rename = "Names", default, deserialize_with = "lenient")]
    pub names: Option<Vec<serde_json::Value>>,
    #[serde(rename = "Image", default, deserialize_with = "lenient")]
    pub image: Option<String>,
    #[serde(rename = "State", default, deserialize_with = "lenient")]
    pub state: Option<String>,
    #[serde(rename = "Status", default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(rename = "RestartCount", default, deserialize_with = "lenient")]
    pub restart_count: Option<u64>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Normalized per-container gauges published on `/metrics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerMetric {
    pub name: String,
    pub hostname: String,
    pub image: String,
    pub state: i64,
    pub health: i64,
    pub restart_count: u64,
}

/// Result of the most recent collection cycle.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub metrics: Vec<ContainerMetric>,
    pub last_error: Option<String>,
    pub last_update: f64,
}

impl Snapshot {
    pub fn is_up(&self) -> bool {
        self.last_error.is_none()
    }
}

#[derive(Debug, Serialize)]
pub struct HealthPayload<'a> {
    pub status: &'static str,
    pub last_error: Option<&'a str>,
}
