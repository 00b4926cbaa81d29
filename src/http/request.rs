//! Request handling.
//!
//! # Responsibilities
//! - Generate unique request ID (UUID v4) for every request
//! - Decode JSON bodies into resource payloads
//! - Normalize request paths before routing
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing, echoed on the response
//! - Bodies are only decoded when the content type is JSON; anything else,
//!   or an empty body, is treated as `{}`
//! - A body that is JSON but does not fit the payload is a 400
//! - Route matching ignores case and trailing slashes, so `/Dealerships/`
//!   reaches the same handler as `/dealerships`

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, uri::PathAndQuery, HeaderMap, HeaderValue, Uri},
};
use serde::de::DeserializeOwned;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::http::response::ApiError;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates a fresh UUID v4 request ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV4;

impl MakeRequestId for MakeRequestUuidV4 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Lowercase the path and drop trailing slashes (except on `/`).
///
/// The query string is left untouched. If the rewritten URI cannot be
/// built the request goes through unchanged.
pub async fn normalize_path(mut request: Request) -> Request {
    if let Some(uri) = normalized_uri(request.uri()) {
        *request.uri_mut() = uri;
    }
    request
}

fn normalized_uri(uri: &Uri) -> Option<Uri> {
    let path = uri.path();
    let trimmed = path.trim_end_matches('/');
    let path = if trimmed.is_empty() { "/" } else { trimmed }.to_ascii_lowercase();
    if path == uri.path() {
        return None;
    }

    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path,
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query).ok()?);
    Uri::from_parts(parts).ok()
}

/// JSON payload extractor.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state).await?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        Ok(Self(serde_json::from_slice(&bytes)?))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
