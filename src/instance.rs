use axum::http::HeaderValue;
use std::fmt;

/// Response header carrying the id of the instance that served a request.
pub const INSTANCE_HEADER: &str = "x-instance-id";

/// Identity of one running replica of the service.
///
/// Generated at startup; watching it change across responses shows a load
/// balancer spreading requests over instances.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceId(pub String);

impl InstanceId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn header_value(&self) -> HeaderValue {
        HeaderValue::from_str(&self.0).unwrap_or_else(|_| HeaderValue::from_static("unknown"))
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
