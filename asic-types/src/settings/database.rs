//! Database connection settings.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::secret::Secret;

/// Supported database backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseEngine {
    Postgresql,
    Mysql,
    Sqlite,
}

impl DatabaseEngine {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseEngine::Postgresql => "postgresql",
            DatabaseEngine::Mysql => "mysql",
            DatabaseEngine::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for DatabaseEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which input the connection was resolved from. Exactly one path is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseSource {
    /// `DATABASE_URL`
    Url,
    /// `DB_NAME`, `DB_USER`, `DB_PASSWORD`, `DB_HOST`, `DB_PORT`
    Discrete,
}

/// A resolved database connection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseSettings {
    pub engine: DatabaseEngine,
    /// Database name, or file path for SQLite.
    pub name: String,
    pub user: Option<String>,
    pub password: Option<Secret>,
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Backend-specific options (query parameters of the URL).
    pub options: BTreeMap<String, String>,
    /// How long a connection may be reused. Zero closes it after each use.
    #[serde(serialize_with = "super::as_secs::std")]
    pub conn_max_age: Duration,
    /// Verify a pooled connection before handing it out.
    pub conn_health_checks: bool,
    pub source: DatabaseSource,
}

impl DatabaseSettings {
    /// Connection age applied to `DATABASE_URL` connections.
    pub const URL_CONN_MAX_AGE: Duration = Duration::from_secs(600);

    /// A display-safe location string, e.g. `postgresql://asic_user@localhost:5432/asic_school_db`.
    pub fn redacted_location(&self) -> String {
        if self.engine == DatabaseEngine::Sqlite {
            return format!("sqlite:{}", self.name);
        }

        let mut out = format!("{}://", self.engine);
        if let Some(user) = &self.user {
            out.push_str(user);
            if self.password.is_some() {
                out.push_str(":********");
            }
            out.push('@');
        }
        out.push_str(self.host.as_deref().unwrap_or("localhost"));
        if let Some(port) = self.port {
            out.push_str(&format!(":{}", port));
        }
        out.push('/');
        out.push_str(&self.name);
        out
    }
}
