//! Request IDs for tracing and error correlation.
//!
//! `tower-http` assigns the ID (keeping one sent by an upstream proxy) and
//! echoes it on the response. This module reads it back out for the request
//! span and tags the Sentry scope so error reports can be matched to logs.

use axum::{extract::Request, middleware::Next, response::Response};
use tower_http::request_id::{
    MakeRequestUuid, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Layer that assigns a UUID v4 to requests arriving without an ID.
#[must_use]
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Layer that copies the request ID onto the response.
#[must_use]
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}

/// The ID assigned to a request, if it is valid UTF-8.
#[must_use]
pub fn request_id_of<B>(request: &axum::http::Request<B>) -> Option<&str> {
    request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
}

/// Middleware that tags the Sentry scope with the request ID.
pub async fn sentry_request_id_middleware(request: Request, next: Next) -> Response {
    if let Some(request_id) = request_id_of(&request) {
        sentry::configure_scope(|scope| {
            scope.set_tag("request_id", request_id);
        });
    }

    next.run(request).await
}
