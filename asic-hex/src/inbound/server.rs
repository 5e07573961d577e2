//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
    middleware,
    routing::get,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use asic_types::{CorsSettings, DatabaseProbe, Settings};

use super::handlers::{self, AppState};
use super::hosts::{HostPolicy, allowed_hosts_middleware};
use super::security::security_middleware;

const CORS_ALLOWED_METHODS: [Method; 6] = [
    Method::DELETE,
    Method::GET,
    Method::OPTIONS,
    Method::PATCH,
    Method::POST,
    Method::PUT,
];

/// HTTP Server for the school backend.
///
/// Holds the resolved settings; every layer is derived from them once, when
/// the router is built.
pub struct HttpServer<P: DatabaseProbe> {
    settings: Arc<Settings>,
    state: Arc<AppState<P>>,
}

impl<P: DatabaseProbe> HttpServer<P> {
    /// Creates a new HTTP server with the given settings and database probe.
    pub fn new(settings: Arc<Settings>, probe: P) -> Self {
        Self {
            settings,
            state: Arc::new(AppState { probe }),
        }
    }

    /// Builds the Axum router with all routes and settings-driven layers.
    pub fn router(&self) -> Router {
        let files = &self.settings.files;
        let host_policy = Arc::new(HostPolicy::from_settings(&self.settings));
        let security = Arc::new(self.settings.security);

        let mut router = Router::new().route("/health", get(handlers::health::<P>));

        if let Some(path) = mount_path(&files.static_url) {
            router = router.nest_service(path, ServeDir::new(&files.static_root));
        }
        if let Some(path) = mount_path(&files.media_url) {
            router = router.nest_service(path, ServeDir::new(&files.media_root));
        }

        router
            .layer(cors_layer(&self.settings.cors))
            .layer(middleware::from_fn_with_state(
                security,
                security_middleware,
            ))
            .layer(middleware::from_fn_with_state(
                host_policy,
                allowed_hosts_middleware,
            ))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

/// `/static/` -> `/static`. A URL prefix of `/` cannot be nested and is skipped.
fn mount_path(url: &str) -> Option<&str> {
    let trimmed = url.trim_end_matches('/');
    if trimmed.is_empty() || !trimmed.starts_with('/') {
        tracing::warn!(url, "File URL prefix cannot be mounted, skipping");
        return None;
    }
    Some(trimmed)
}

fn cors_layer(cors: &CorsSettings) -> CorsLayer {
    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(cors.allow_credentials)
        .allow_methods(CORS_ALLOWED_METHODS)
        .allow_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::USER_AGENT,
            HeaderName::from_static("x-csrftoken"),
            HeaderName::from_static("x-requested-with"),
        ])
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
