//! The resolved settings value and its sub-configurations.

pub mod admin;
pub mod cors;
pub mod database;
pub mod files;
pub mod jwt;
pub mod rest;
pub mod security;

use indexmap::IndexSet;
use serde::Serialize;

use crate::secret::Secret;

pub use admin::{AdminTheme, NavGroup, NavItem, Sidebar};
pub use cors::CorsSettings;
pub use database::{DatabaseEngine, DatabaseSettings, DatabaseSource};
pub use files::FileSettings;
pub use jwt::JwtSettings;
pub use rest::{I18nSettings, PasswordValidator, RestFrameworkSettings};
pub use security::{FrameOptions, SecuritySettings};

/// Process-wide settings, built once at startup and never mutated.
///
/// Share it as `Arc<Settings>`; every field is plain data so concurrent reads
/// need no locking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub secret_key: Secret,
    pub debug: bool,
    pub allowed_hosts: IndexSet<String>,
    pub database: DatabaseSettings,
    pub cors: CorsSettings,
    pub security: SecuritySettings,
    pub jwt: JwtSettings,
    pub rest_framework: RestFrameworkSettings,
    pub password_validators: Vec<PasswordValidator>,
    pub i18n: I18nSettings,
    pub files: FileSettings,
    pub admin: AdminTheme,
}

/// Serializes durations as whole seconds.
pub(crate) mod as_secs {
    use serde::Serializer;

    pub fn std<S: Serializer>(value: &std::time::Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(value.as_secs())
    }

    pub fn delta<S: Serializer>(value: &chrono::TimeDelta, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_i64(value.num_seconds())
    }
}
