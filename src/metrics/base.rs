use serde_json::Value;

use crate::types::{Endpoint, RawContainerRecord};

/// Reads the endpoint list out of a `/api/endpoints` response.
///
/// Portainer answers either with a bare array or, on paginated setups, with
/// `{"results": [...]}`. Any other shape is treated as "no endpoints".
pub fn endpoints_from_response(body: Value) -> Vec<Endpoint> {
    let items = match body {
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        Value::Array(items) => items,
        _ => return Vec::new(),
    };

    items
        .into_iter()
        .filter(Value::is_object)
        .map(|item| Endpoint {
            id: item.get("Id").and_then(Value::as_i64).unwrap_or(0),
            name: item
                .get("Name")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string(),
        })
        .collect()
}

/// Reads container records out of a `docker/containers/json` response,
/// skipping anything that is not a JSON object.
pub fn containers_from_response(body: Value) -> Vec<RawContainerRecord> {
    let Value::Array(items) = body else {
        return Vec::new();
    };

    items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}
