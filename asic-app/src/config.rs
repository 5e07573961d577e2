//! Server configuration that sits outside `Settings`.

use asic_types::EnvSource;

const DEFAULT_PORT: u16 = 8000;

pub const DEFAULT_LOG_FILTER: &str = "info,asic_app=debug,asic_hex=debug";

/// Process-level knobs for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// `RUST_LOG` directives.
    pub log_filter: String,
    /// `LOG_FORMAT=json` switches to JSON lines.
    pub json_logs: bool,
    /// OTLP collector; tracing export is off when unset.
    pub otlp_endpoint: Option<String>,
}

impl AppConfig {
    /// Reads the server knobs from the same layered source the settings come
    /// from, so a `.env` entry counts as much as an exported variable.
    pub fn from_env<E: EnvSource>(env: &E) -> anyhow::Result<Self> {
        let port = match env.get_non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a port number, got {:?}", raw))?,
            None => DEFAULT_PORT,
        };

        let log_filter = env
            .get_non_empty("RUST_LOG")
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let json_logs = env
            .get_non_empty("LOG_FORMAT")
            .is_some_and(|format| format.trim().eq_ignore_ascii_case("json"));
        let otlp_endpoint = env
            .get_non_empty("OTEL_EXPORTER_OTLP_ENDPOINT")
            .map(|endpoint| endpoint.trim().to_string());

        Ok(Self {
            port,
            log_filter,
            json_logs,
            otlp_endpoint,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
