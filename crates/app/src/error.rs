use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use codedoc_core::{PipelineError, SolutionError};
use serde::Serialize;

/// API-layer error, mapped to an HTTP status and a JSON body.
#[derive(Debug)]
pub enum ApiError {
    /// 400 - invalid upload or request shape
    BadRequest(String),

    /// 502 - the generation backend failed; distinct from this service's own
    /// failures so callers can tell them apart
    Backend(String),

    /// 500 - anything else
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, "bad_request", message),
            ApiError::Backend(message) => (StatusCode::BAD_GATEWAY, "backend_error", message),
            ApiError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
            }
        };

        (status, Json(ErrorBody { error, message })).into_response()
    }
}

impl From<SolutionError> for ApiError {
    fn from(error: SolutionError) -> Self {
        match error {
            SolutionError::Archive(_) | SolutionError::MissingSolution(_) => {
                ApiError::BadRequest(error.to_string())
            }
            SolutionError::ToolMissing(_)
            | SolutionError::AnalyzerFailed(_)
            | SolutionError::AnalyzerTimeout(_)
            | SolutionError::MissingSummary(_)
            | SolutionError::Facts(_)
            | SolutionError::Io(_) => ApiError::Internal(error.to_string()),
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(error: PipelineError) -> Self {
        match error {
            PipelineError::Backend(inner) => ApiError::Backend(inner.to_string()),
            PipelineError::Core(inner) => ApiError::Internal(inner.to_string()),
        }
    }
}
