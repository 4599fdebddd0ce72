use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use cea_core::EvalError;

/// Error surface of the analysis API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no root node found")]
    NoRootNode,

    #[error("invalid model: {field} - {message}")]
    Validation { field: String, message: String },

    #[error(transparent)]
    Engine(#[from] EvalError),
}

impl ApiError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // All engine failures stem from the submitted model, so they map to
        // 4xx-equivalents rather than server faults.
        let status = match &self {
            ApiError::NoRootNode | ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Engine(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Helper type for API results
pub type ApiResult<T> = Result<T, ApiError>;
