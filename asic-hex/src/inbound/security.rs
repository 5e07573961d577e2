//! HTTPS redirect and hardening headers.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderValue, Request, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use asic_types::SecuritySettings;

use super::hosts::request_host;

/// Set by TLS-terminating proxies (Render, nginx) on forwarded requests.
const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Applies `SecuritySettings` to every response.
pub async fn security_middleware(
    State(security): State<Arc<SecuritySettings>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if security.ssl_redirect && !is_secure(&request) {
        return https_redirect(&request);
    }

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    if security.content_type_nosniff {
        headers.insert(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        );
    }
    if security.browser_xss_filter {
        headers.insert(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        );
    }
    if let Some(frame) = security.x_frame_options {
        headers.insert(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static(frame.header_value()),
        );
    }

    response
}

fn is_secure(request: &Request<Body>) -> bool {
    if let Some(proto) = request
        .headers()
        .get(X_FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
    {
        return proto.trim().eq_ignore_ascii_case("https");
    }
    request.uri().scheme_str() == Some("https")
}

fn https_redirect(request: &Request<Body>) -> Response {
    let host = request_host(request).unwrap_or("localhost");
    let path = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let location = format!("https://{}{}", host, path);

    match HeaderValue::from_str(&location) {
        Ok(value) => (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, value)]).into_response(),
        Err(_) => StatusCode::BAD_REQUEST.into_response(),
    }
}
