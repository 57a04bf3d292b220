//! Error types for stapictl

use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of an [`ApiError`], for callers that branch on kind only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Decode,
    Validation,
    NotFound,
    UnexpectedStatus,
    SemanticMismatch,
    DataFormat,
}

/// Classified failure of an API operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection failure or timeout; carries the underlying cause.
    #[error("network error: {0}")]
    Network(String),

    /// Body was not valid JSON or did not have the expected shape.
    #[error("error converting response to json: {0}")]
    Decode(String),

    /// HTTP 422. Carries `error.data` when the server sent one, else the whole body.
    #[error("missing/incorrect data in request: {detail}")]
    Validation { detail: serde_json::Value },

    /// HTTP 404 with the raw response text.
    #[error("not found: {body}")]
    NotFound { body: String },

    #[error("unhandled status code {status}")]
    UnexpectedStatus { status: u16 },

    /// Transport succeeded but the status contradicts what the endpoint documents.
    #[error("return code {actual} but expected a {expected}")]
    SemanticMismatch { expected: u16, actual: u16 },

    /// Locally held data does not have the expected shape.
    #[error("malformed data: {0}")]
    DataFormat(String),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network(_) => ErrorKind::Network,
            ApiError::Decode(_) => ErrorKind::Decode,
            ApiError::Validation { .. } => ErrorKind::Validation,
            ApiError::NotFound { .. } => ErrorKind::NotFound,
            ApiError::UnexpectedStatus { .. } => ErrorKind::UnexpectedStatus,
            ApiError::SemanticMismatch { .. } => ErrorKind::SemanticMismatch,
            ApiError::DataFormat(_) => ErrorKind::DataFormat,
        }
    }
}

/// Outcome of every API operation: `Ok` is success, `Err` a classified failure.
pub type ApiResult<T> = Result<T, ApiError>;

/// Problems with the configuration or credential files. These abort the run.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {} not found", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("no bearer token: set api.token in the config file or provide {}", path.display())]
    MissingToken { path: PathBuf },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
