// Upstream response handling and per-container normalization
pub mod base;
pub mod containers;

pub use base::{containers_from_response, endpoints_from_response};
pub use containers::normalize;
