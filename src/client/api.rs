use log::debug;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::client::transport::{ApiRequest, HttpMethod, RawResponse, ReqwestTransport, Transport};
use crate::error::{ApiError, ApiResult};
use crate::models::*;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const STATUS_OK: u16 = 200;
const STATUS_CREATED: u16 = 201;
const STATUS_NOT_FOUND: u16 = 404;
const STATUS_UNPROCESSABLE: u16 = 422;

/// Connection settings, fixed for the whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub bearer_token: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            bearer_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct SpaceTradersClient<T: Transport = ReqwestTransport> {
    transport: T,
    base_url: String,
    timeout: Duration,
}

impl SpaceTradersClient<ReqwestTransport> {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> SpaceTradersClient<T> {
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        SpaceTradersClient {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // Account operations
    /// Creates a new agent. Only `201 Created` counts as success.
    pub async fn register(&self, name: &str, faction: &str) -> ApiResult<Registration> {
        let url = format!("{}/register", self.base_url);
        let payload = RegisterRequest {
            symbol: name.to_string(),
            faction: faction.to_string(),
        };
        let body = serde_json::to_value(&payload).map_err(|e| {
            ApiError::DataFormat(format!("register request for '{}' could not be encoded: {}", name, e))
        })?;

        let request = ApiRequest {
            method: HttpMethod::Post,
            url,
            bearer_token: None,
            body: Some(body),
        };
        let response = self.execute(request).await?;
        let data: RegisterData = classify("register", STATUS_CREATED, response)?;
        Ok(data.into())
    }

    // Agent operations
    pub async fn get_agent(&self, token: &str) -> ApiResult<AgentInfo> {
        let url = format!("{}/my/agent", self.base_url);
        let request = ApiRequest {
            method: HttpMethod::Get,
            url,
            bearer_token: Some(token.to_string()),
            body: None,
        };
        let response = self.execute(request).await?;
        classify("get_agent", STATUS_OK, response)
    }

    // Waypoint operations
    pub async fn get_waypoint(
        &self,
        token: &str,
        system_symbol: &str,
        waypoint_symbol: &str,
    ) -> ApiResult<SystemInfo> {
        let url = format!(
            "{}/systems/{}/waypoints/{}",
            self.base_url, system_symbol, waypoint_symbol
        );
        let request = ApiRequest {
            method: HttpMethod::Get,
            url,
            bearer_token: Some(token.to_string()),
            body: None,
        };
        let response = self.execute(request).await?;
        let waypoint: Waypoint = classify("get_waypoint", STATUS_OK, response)?;
        Ok(waypoint.into())
    }

    /// Exactly one round trip, bounded by the configured timeout.
    async fn execute(&self, request: ApiRequest) -> ApiResult<RawResponse> {
        let method = request.method;
        let url = request.url.clone();
        match &request.body {
            Some(body) => debug!("API: {} {} - Body: {}", method, url, body),
            None => debug!("API: {} {}", method, url),
        }

        let response = tokio::time::timeout(self.timeout, self.transport.send(request))
            .await
            .map_err(|_| {
                ApiError::Network(format!(
                    "{} {} timed out after {}s",
                    method,
                    url,
                    self.timeout.as_secs_f64()
                ))
            })??;

        debug!("API: {} {} -> {} {}", method, url, response.status, response.body);
        Ok(response)
    }
}

/// Maps every status to an outcome. `expected` is the endpoint's documented success code.
fn classify<D: DeserializeOwned>(operation: &str, expected: u16, response: RawResponse) -> ApiResult<D> {
    match response.status {
        status if status == expected => decode_data(operation, &response.body),
        // Only registration has a distinct "created" code; a plain 200 there is the wrong success.
        STATUS_OK if expected == STATUS_CREATED => Err(ApiError::SemanticMismatch {
            expected,
            actual: STATUS_OK,
        }),
        STATUS_NOT_FOUND => Err(ApiError::NotFound {
            body: response.body,
        }),
        STATUS_UNPROCESSABLE => Err(validation_error(operation, &response.body)),
        status => Err(ApiError::UnexpectedStatus { status }),
    }
}

fn decode_data<D: DeserializeOwned>(operation: &str, body: &str) -> ApiResult<D> {
    serde_json::from_str::<DataEnvelope<D>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| ApiError::Decode(format!("{}: {}", operation, e)))
}

fn validation_error(operation: &str, body: &str) -> ApiError {
    let decoded: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => return ApiError::Decode(format!("{}: {}", operation, e)),
    };

    // A malformed `error` member is treated like a missing one.
    let error = serde_json::from_value::<ErrorEnvelope>(decoded.clone())
        .unwrap_or_default()
        .error
        .unwrap_or_default();
    if let Some(message) = &error.message {
        debug!("{} rejected (code {:?}): {}", operation, error.code, message);
    }

    let detail = error.data.filter(has_content).unwrap_or(decoded);
    ApiError::Validation { detail }
}

fn has_content(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
