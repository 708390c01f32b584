use reqwest::{Method, StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{method} {path} failed to send: {source}")]
    Transport {
        method: Method,
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{method} {path} returned {actual}, expected {}: {body}", format_statuses(.expected))]
    UnexpectedStatus {
        method: Method,
        path: String,
        expected: Vec<StatusCode>,
        actual: StatusCode,
        body: String,
    },

    #[error("{method} {path} returned a body that could not be parsed: {source} (body: {body})")]
    Decode {
        method: Method,
        path: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("field `{field}` mismatch: expected {expected}, got {actual}")]
    FieldMismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },

    #[error("invalid client configuration: {0}")]
    Config(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

fn format_statuses(statuses: &[StatusCode]) -> String {
    statuses
        .iter()
        .map(|s| s.as_u16().to_string())
        .collect::<Vec<_>>()
        .join(" or ")
}
