//! # ASIC Server
//!
//! Binary that wires together all the components:
//! - Capture the environment (process over `.env`)
//! - Resolve the settings and report deployment warnings
//! - Build the database pool
//! - Start the HTTP server

mod config;

use std::sync::Arc;

use opentelemetry::global;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use asic_db::build_pool;
use asic_env::load_environment;
use asic_hex::{SettingsResolver, deployment_warnings, inbound::HttpServer};

use config::{AppConfig, DEFAULT_LOG_FILTER};

const SERVICE_NAME: &str = "asic-server";

fn init_tracer(endpoint: &str) -> anyhow::Result<sdktrace::SdkTracerProvider> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());
    Ok(provider)
}

/// Installs the global subscriber from the loaded configuration. Returns the
/// OTLP provider when an endpoint is configured so it can be flushed on exit.
fn init_tracing(config: &AppConfig) -> anyhow::Result<Option<sdktrace::SdkTracerProvider>> {
    let provider = match &config.otlp_endpoint {
        Some(endpoint) => Some(init_tracer(endpoint)?),
        None => None,
    };

    let telemetry = provider.as_ref().map(|provider| {
        use opentelemetry::trace::TracerProvider as _;
        tracing_opentelemetry::layer().with_tracer(provider.tracer(SERVICE_NAME))
    });

    let filter = EnvFilter::try_new(&config.log_filter);
    let invalid_filter = filter.is_err();
    let json = config.json_logs;

    tracing_subscriber::registry()
        .with(filter.unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .with(telemetry)
        .init();

    if invalid_filter {
        tracing::warn!(filter = %config.log_filter, "Invalid RUST_LOG, using default filter");
    }

    Ok(provider)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Read the environment once; everything below works off this snapshot
    let base_dir = std::env::current_dir()?;
    let env = load_environment(&base_dir.join(".env"))?;
    let config = AppConfig::from_env(&env)?;

    let otel_provider = init_tracing(&config)?;

    // Platform variables come from the process only, never from `.env`
    let settings = Arc::new(
        SettingsResolver::new(&env, base_dir.clone())
            .with_platform(env.process())
            .resolve()?,
    );

    if !settings.debug {
        for warning in deployment_warnings(&settings) {
            tracing::warn!(id = warning.id, "{}", warning.message);
        }
    }

    // Lazy pool: the first request or health check opens the connection
    let pool = build_pool(&settings.database)?;
    tracing::info!(
        engine = %pool.engine(),
        database = %settings.database.redacted_location(),
        "Database pool ready"
    );

    let server = HttpServer::new(Arc::clone(&settings), pool.clone());
    let addr = config.listen_addr();
    tracing::info!("Starting ASIC server on {}", addr);

    server.run(&addr).await?;

    pool.close().await;

    // Ensure traces are flushed before exit
    if let Some(provider) = otel_provider {
        if let Err(e) = provider.shutdown() {
            tracing::warn!(error = %e, "Failed to flush traces");
        }
    }
    Ok(())
}
