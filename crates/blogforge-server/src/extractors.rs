//! Custom Axum extractors.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::request::Parts,
};
use blogforge_core::{trace::TRACE_ID_HEADER, TraceContext};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;

/// Extract the request's trace id.
///
/// The trace middleware stores a [`TraceContext`] in request extensions
/// for every request; the header and uuid fallbacks only matter for
/// handlers exercised without the full middleware stack (tests).
#[derive(Debug, Clone)]
pub struct TraceId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for TraceId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(ctx) = parts.extensions.get::<TraceContext>() {
            return Ok(Self(ctx.trace_id.clone()));
        }

        let id = parts
            .headers
            .get(TRACE_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map_or_else(|| TraceContext::new().trace_id, String::from);

        Ok(Self(id))
    }
}

/// JSON body extractor rendering failures as the API error envelope.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> axum::extract::FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let request_id = req
            .extensions()
            .get::<TraceContext>()
            .map(|ctx| ctx.trace_id.clone());

        let bytes = axum::body::Bytes::from_request(req, state)
            .await
            .map_err(|e| {
                ApiError::bad_request(
                    format!("Failed to read request body: {e}"),
                    request_id.clone(),
                )
            })?;

        let value: T = serde_json::from_slice(&bytes).map_err(|e| {
            debug!(error = %e, "JSON parse error");
            ApiError::bad_request(format!("Invalid JSON: {e}"), request_id)
        })?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn trace_id_prefers_extension() {
        let req = Request::builder()
            .uri("/test")
            .header(TRACE_ID_HEADER, "header-id")
            .body(())
            .unwrap();
        let (mut parts, ()) = req.into_parts();
        parts.extensions.insert(TraceContext::from_value("ext-id"));

        let TraceId(id) = TraceId::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(id, "ext-id");
    }

    #[tokio::test]
    async fn trace_id_falls_back_to_header() {
        let req = Request::builder()
            .uri("/test")
            .header(TRACE_ID_HEADER, "header-id")
            .body(())
            .unwrap();
        let (mut parts, ()) = req.into_parts();

        let TraceId(id) = TraceId::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(id, "header-id");
    }

    #[tokio::test]
    async fn trace_id_generates_when_absent() {
        let req = Request::builder().uri("/test").body(()).unwrap();
        let (mut parts, ()) = req.into_parts();

        let TraceId(id) = TraceId::from_request_parts(&mut parts, &()).await.unwrap();
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }
}
