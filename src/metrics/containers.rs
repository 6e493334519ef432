use serde_json::Value;

use crate::parsing::{health_code, parse_health_label, state_code};
use crate::types::{ContainerMetric, RawContainerRecord};

/// Turns one raw container record into the exported metric.
///
/// Never fails: missing or malformed fields fall back to `"unknown"` (name,
/// image, state), an empty status (health `none`) or a zero restart count.
pub fn normalize(raw: &RawContainerRecord, hostname: &str) -> ContainerMetric {
    let name = raw
        .names
        .as_ref()
        .and_then(|names| names.first())
        .and_then(Value::as_str)
        .map(|first| first.strip_prefix('/').unwrap_or(first).to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let state = raw.state.as_deref().unwrap_or("unknown");
    let health = parse_health_label(raw.status.as_deref().unwrap_or(""));

    ContainerMetric {
        name,
        hostname: hostname.to_lowercase(),
        image: raw.image.clone().unwrap_or_else(|| "unknown".to_string()),
        state: state_code(state),
        health: health_code(health),
        restart_count: raw.restart_count.unwrap_or(0),
    }
}
