//! Error responses.
//!
//! # Responsibilities
//! - Map store lookup failures to 404 with a JSON `{error}` body
//! - Map undecodable request bodies to 400 (or the extractor's own status)
//! - Map handler panics to 500 with the same body shape
//!
//! # Design Decisions
//! - Every error is turned into a response at the handler boundary
//! - Client errors log at debug, server errors at error

use std::any::Any;

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    NotFound(#[from] StoreError),

    #[error("Malformed JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("{}", .0.body_text())]
    Body(#[from] BytesRejection),

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        } else {
            tracing::debug!(status = %status, error = %self, "Request rejected");
        }

        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

/// Panic handler for `CatchPanicLayer`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Handler panicked");

    ApiError::Internal.into_response()
}
