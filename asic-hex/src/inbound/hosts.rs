//! Host header validation against the allow-list.

use std::sync::Arc;

use axum::{
    Json,
    body::Body,
    extract::State,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use asic_types::Settings;

use crate::defaults::DEBUG_LOCAL_HOSTS;

/// Compiled allow-list.
///
/// Patterns are lowercase. `*` matches any host, `.example.com` matches
/// `example.com` and all of its subdomains, anything else must match exactly.
#[derive(Debug, Clone)]
pub struct HostPolicy {
    patterns: Vec<String>,
}

impl HostPolicy {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| p.as_ref().trim().to_ascii_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// The allow-list in effect for `settings`. In debug mode an empty list
    /// falls back to the loopback names.
    pub fn from_settings(settings: &Settings) -> Self {
        if settings.debug && settings.allowed_hosts.is_empty() {
            Self::new(DEBUG_LOCAL_HOSTS)
        } else {
            Self::new(&settings.allowed_hosts)
        }
    }

    pub fn allows(&self, host: &str) -> bool {
        let host = normalize_host(host);
        if host.is_empty() {
            return false;
        }

        self.patterns.iter().any(|pattern| {
            if pattern == "*" {
                return true;
            }
            match pattern.strip_prefix('.') {
                Some(domain) => host == domain || host.ends_with(pattern.as_str()),
                None => host == *pattern,
            }
        })
    }
}

/// Lowercases a `Host` value and strips the port and any trailing dot.
fn normalize_host(raw: &str) -> String {
    let raw = raw.trim();
    let without_port = if raw.starts_with('[') {
        // IPv6 literal: keep the brackets, drop whatever follows them.
        match raw.find(']') {
            Some(end) => &raw[..=end],
            None => raw,
        }
    } else {
        match raw.rsplit_once(':') {
            Some((host, port)) if port.chars().all(|c| c.is_ascii_digit()) => host,
            _ => raw,
        }
    };
    without_port.trim_end_matches('.').to_ascii_lowercase()
}

/// Extracts the host from the `Host` header, or the URI authority (HTTP/2).
pub(crate) fn request_host(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| request.uri().authority().map(|a| a.as_str()))
}

/// Rejects requests whose host is not on the allow-list.
pub async fn allowed_hosts_middleware(
    State(policy): State<Arc<HostPolicy>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request_host(&request).is_some_and(|host| policy.allows(host)) {
        return next.run(request).await;
    }

    tracing::warn!(
        host = request_host(&request).unwrap_or("<none>"),
        "Rejected disallowed host"
    );
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({
            "error": "Invalid Host header",
            "code": 400
        })),
    )
        .into_response()
}
