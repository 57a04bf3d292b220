use serde::Deserialize;

// API response envelopes

/// Success envelope: `{"data": ...}`.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Failure envelope: `{"error": {"code", "message", "data"}}`. Every part may be absent.
#[derive(Debug, Deserialize, Default)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}
