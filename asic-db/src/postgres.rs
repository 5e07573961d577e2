//! PostgreSQL connection options.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

use asic_types::{DatabaseSettings, DbError};

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5432;

/// Builds connect options from the typed fields; credentials are never
/// re-assembled into a URL string.
///
/// Recognised options: `sslmode`, `application_name`. A host starting with
/// `/` is treated as a Unix socket directory.
///
/// `~/.pgpass` is never consulted, and host, port and SSL mode are always set
/// here, so `PGHOST`, `PGPORT` and `PGSSLMODE` have no effect. sqlx still
/// fills a missing user or password from `PGUSER` / `PGPASSWORD`.
pub fn connect_options(settings: &DatabaseSettings) -> Result<PgConnectOptions, DbError> {
    let mut options = PgConnectOptions::new_without_pgpass()
        .database(&settings.name)
        .port(settings.port.unwrap_or(DEFAULT_PORT))
        .ssl_mode(PgSslMode::Prefer);

    let host = settings.host.as_deref().unwrap_or(DEFAULT_HOST);
    options = if host.starts_with('/') {
        options.socket(host)
    } else {
        options.host(host)
    };
    if let Some(user) = &settings.user {
        options = options.username(user);
    }
    if let Some(password) = &settings.password {
        options = options.password(password.expose());
    }
    if let Some(mode) = settings.options.get("sslmode") {
        let mode = PgSslMode::from_str(mode)
            .map_err(|e| DbError::Connection(format!("invalid sslmode: {}", e)))?;
        options = options.ssl_mode(mode);
    }
    if let Some(name) = settings.options.get("application_name") {
        options = options.application_name(name);
    }

    for key in settings.options.keys() {
        if !matches!(key.as_str(), "sslmode" | "application_name") {
            tracing::warn!(option = %key, "Ignoring unsupported PostgreSQL option");
        }
    }

    Ok(options)
}
