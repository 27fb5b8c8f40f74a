//! Error types.
//!
//! - `ClientError`: everything a gateway client call can fail with. Transport
//!   errors are wrapped as-is so callers still see the original cause.
//! - `AppError`: errors of the in-memory mock gateway, converted into HTTP
//!   responses with a JSON body or into gRPC statuses.
//! - `ConfigError`: settings that are missing, malformed or out of range.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Error returned by the HTTP and gRPC gateway clients and the seeding code.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP transport failure or non-2xx status (from `error_for_status`).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded into the expected schema.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// gRPC call returned a non-OK status.
    #[error("gRPC error: {0}")]
    Grpc(#[from] tonic::Status),

    /// gRPC channel could not be created.
    #[error("gRPC transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// Reading or writing seed dumps failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A reply lacked a field the caller depends on (e.g. the card of a card account).
    #[error("Missing field in response: {0}")]
    MissingField(&'static str),

    /// A reply field held a value the models cannot represent (unspecified enum, bad date).
    #[error("Invalid value for {field}: {value}")]
    Invalid { field: &'static str, value: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Request metrics could not be registered.
    #[error("Metrics error: {0}")]
    Metrics(String),
}

/// Settings error, raised while loading or when a value is used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment error: {0}")]
    Env(#[from] envy::Error),

    #[error("Invalid setting {field}: {value}")]
    Invalid { field: &'static str, value: String },
}

/// Mock gateway error type.
///
/// # Status Code Mapping
///
/// - `UserNotFound`, `AccountNotFound`, `CardNotFound`, `OperationNotFound` → 404 Not Found
/// - `InvalidRequest` → 400 Bad Request
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("User with ID {0} not found")]
    UserNotFound(String),

    #[error("Account with ID {0} not found")]
    AccountNotFound(String),

    #[error("Card with ID {0} not found")]
    CardNotFound(String),

    #[error("Operation with ID {0} not found")]
    OperationNotFound(String),

    #[error("Invalid request")]
    InvalidRequest(String),
}

/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::UserNotFound(_) => {
                (StatusCode::NOT_FOUND, "user_not_found", self.to_string())
            }
            AppError::AccountNotFound(_) => {
                (StatusCode::NOT_FOUND, "account_not_found", self.to_string())
            }
            AppError::CardNotFound(_) => {
                (StatusCode::NOT_FOUND, "card_not_found", self.to_string())
            }
            AppError::OperationNotFound(_) => (
                StatusCode::NOT_FOUND,
                "operation_not_found",
                self.to_string(),
            ),
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

/// gRPC status mapping used by the mock gateway services.
///
/// - not found errors → `NOT_FOUND`
/// - `InvalidRequest` → `INVALID_ARGUMENT`
impl From<AppError> for tonic::Status {
    fn from(err: AppError) -> Self {
        match err {
            AppError::InvalidRequest(msg) => tonic::Status::invalid_argument(msg),
            err => tonic::Status::not_found(err.to_string()),
        }
    }
}
