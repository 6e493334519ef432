use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::time::Duration;
use crate::types::Config;

pub const DEFAULT_PORTAINER_URL: &str = "http://localhost:9000";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Trait for abstracting environment variable access
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Production implementation using std::env
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Mock implementation for testing
#[derive(Debug, Default)]
pub struct MockEnvironment {
    vars: HashMap<String, String>,
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn set_var<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn with_var<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.set_var(key, value);
        self
    }
}

impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

pub fn load_config() -> Result<Config> {
    load_config_with_env(&SystemEnvironment)
}

pub fn load_config_with_env<E: EnvironmentProvider>(env: &E) -> Result<Config> {
    let portainer_url = env.get_var("PORTAINER_URL")
        .unwrap_or_else(|| DEFAULT_PORTAINER_URL.to_string())
        .trim_end_matches('/')
        .to_string();

    let portainer_token = env.get_var("PORTAINER_TOKEN")
        .filter(|t| !t.is_empty())
        .ok_or_else(|| anyhow!("PORTAINER_TOKEN environment variable is required"))?;

    let interval_secs: u64 = env.get_var("SCRAPE_INTERVAL")
        .unwrap_or_else(|| "30".to_string())
        .trim()
        .parse()
        .context("Invalid SCRAPE_INTERVAL")?;
    if interval_secs == 0 {
        return Err(anyhow!("SCRAPE_INTERVAL must be at least 1 second"));
    }

    let listen_port: u16 = env.get_var("LISTEN_PORT")
        .unwrap_or_else(|| "8081".to_string())
        .trim()
        .parse()
        .context("Invalid LISTEN_PORT")?;

    let log_level = normalize_log_level(
        env.get_var("LOG_LEVEL").as_deref().unwrap_or("info"),
    );

    Ok(Config {
        portainer_url,
        portainer_token,
        scrape_interval: Duration::from_secs(interval_secs),
        listen_port,
        log_level,
        request_timeout: DEFAULT_REQUEST_TIMEOUT,
    })
}

/// Maps Python-style level names (`WARNING`, `CRITICAL`) onto tracing directives.
pub fn normalize_log_level(raw: &str) -> String {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => "info".to_string(),
        "warning" => "warn".to_string(),
        "critical" | "fatal" => "error".to_string(),
        other => other.to_string(),
    }
}
