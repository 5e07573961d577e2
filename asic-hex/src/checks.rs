//! Deployment checks.
//!
//! Flags settings that are acceptable on a laptop but dangerous on a public
//! host. Nothing here changes the settings; callers decide what to do with
//! the warnings.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use asic_types::{DatabaseSource, Settings};

use crate::defaults::LEGACY_DB_PASSWORD;

const SECRET_KEY_MIN_LENGTH: usize = 50;
const SECRET_KEY_MIN_UNIQUE_CHARACTERS: usize = 5;
const INSECURE_KEY_MARKER: &str = "insecure";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployWarning {
    pub id: &'static str,
    pub message: String,
}

impl DeployWarning {
    fn new(id: &'static str, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }
}

impl fmt::Display for DeployWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.id, self.message)
    }
}

/// Returns every deployment problem found in `settings`, in a stable order.
pub fn deployment_warnings(settings: &Settings) -> Vec<DeployWarning> {
    let mut warnings = Vec::new();

    if settings.debug {
        warnings.push(DeployWarning::new(
            "security.W018",
            "DEBUG is enabled; it must be off in deployment",
        ));
    }

    let key = settings.secret_key.expose();
    let unique = key.chars().collect::<HashSet<_>>().len();
    if key.len() < SECRET_KEY_MIN_LENGTH
        || unique < SECRET_KEY_MIN_UNIQUE_CHARACTERS
        || key.contains(INSECURE_KEY_MARKER)
    {
        warnings.push(DeployWarning::new(
            "security.W009",
            format!(
                "SECRET_KEY is weak; use at least {} random characters",
                SECRET_KEY_MIN_LENGTH
            ),
        ));
    }

    if settings.allowed_hosts.is_empty() {
        warnings.push(DeployWarning::new(
            "security.W020",
            "ALLOWED_HOSTS is empty; every request will be rejected",
        ));
    }

    if !settings.security.ssl_redirect {
        warnings.push(DeployWarning::new(
            "security.W008",
            "SSL redirect is disabled; plain HTTP requests are served as-is",
        ));
    }

    let db = &settings.database;
    if db.source == DatabaseSource::Discrete && db.password.is_none() {
        warnings.push(DeployWarning::new(
            "asic.W001",
            "DB_PASSWORD is not set; the database connection has no password",
        ));
    }

    if db
        .password
        .as_ref()
        .is_some_and(|p| p.expose() == LEGACY_DB_PASSWORD)
    {
        warnings.push(DeployWarning::new(
            "asic.W002",
            "The database password is the publicly known development default; rotate it",
        ));
    }

    warnings
}
