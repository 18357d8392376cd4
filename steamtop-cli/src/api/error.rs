//! HTTP error responses.
//!
//! Every handler failure is answered with `{"detail": "<cause>"}`.

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use steamtop_core::CoreError;
use steamtop_fetch::PipelineError;
use thiserror::Error;
use tracing::warn;

/// Errors returned by route handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Query string missing a required parameter or not parseable.
    #[error("{}", .0.body_text())]
    BadQuery(#[from] QueryRejection),

    /// Query parameters out of range.
    #[error(transparent)]
    InvalidQuery(#[from] CoreError),

    /// The top list or a detail page could not be fetched.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadQuery(_) => StatusCode::BAD_REQUEST,
            Self::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Pipeline(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable cause.
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let Self::Pipeline(e) = &self {
            warn!(error = %e, "Games query failed");
        }
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
