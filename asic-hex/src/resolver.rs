//! Settings Resolver
//!
//! Turns an environment snapshot into the immutable `Settings` value.
//! Contains NO I/O - the snapshot is injected through the `EnvSource` port.

use std::path::PathBuf;

use indexmap::IndexSet;

use asic_types::{
    ConfigError, DatabaseEngine, DatabaseSettings, DatabaseSource, EnvSource, FileSettings,
    I18nSettings, JwtSettings, PasswordValidator, RestFrameworkSettings, Secret, SecuritySettings,
    Settings,
};

use crate::cast::{parse_bool, parse_list};
use crate::database_url::parse_database_url;
use crate::defaults;

/// Names of the variables the resolver reads.
pub mod keys {
    pub const SECRET_KEY: &str = "SECRET_KEY";
    pub const DEBUG: &str = "DEBUG";
    pub const ALLOWED_HOSTS: &str = "ALLOWED_HOSTS";
    pub const RENDER_EXTERNAL_HOSTNAME: &str = "RENDER_EXTERNAL_HOSTNAME";
    pub const DATABASE_URL: &str = "DATABASE_URL";
    pub const DB_NAME: &str = "DB_NAME";
    pub const DB_USER: &str = "DB_USER";
    pub const DB_PASSWORD: &str = "DB_PASSWORD";
    pub const DB_HOST: &str = "DB_HOST";
    pub const DB_PORT: &str = "DB_PORT";
}

/// Resolves settings from an injected environment source.
///
/// Generic over `E: EnvSource` so tests can hand in a fixed snapshot.
/// Resolution is pure: the same snapshot and base directory always produce
/// equal settings.
///
/// `DATABASE_URL` and `RENDER_EXTERNAL_HOSTNAME` are platform variables. When
/// a platform source is attached with [`SettingsResolver::with_platform`] they
/// are read from it alone; otherwise they come from `env` like everything else.
pub struct SettingsResolver<E: EnvSource, P: EnvSource = E> {
    env: E,
    platform: Option<P>,
    base_dir: PathBuf,
}

impl<E: EnvSource> SettingsResolver<E> {
    pub fn new(env: E, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            env,
            platform: None,
            base_dir: base_dir.into(),
        }
    }

    /// Reads the platform variables from `platform` only, typically the
    /// process environment without the developer `.env` file.
    pub fn with_platform<P: EnvSource>(self, platform: P) -> SettingsResolver<E, P> {
        SettingsResolver {
            env: self.env,
            platform: Some(platform),
            base_dir: self.base_dir,
        }
    }
}

impl<E: EnvSource, P: EnvSource> SettingsResolver<E, P> {

    /// Builds the settings, or fails fast if a required key is missing.
    pub fn resolve(&self) -> Result<Settings, ConfigError> {
        let secret_key = self
            .env
            .get_non_empty(keys::SECRET_KEY)
            .map(Secret::new)
            .ok_or(ConfigError::MissingRequiredConfig {
                key: keys::SECRET_KEY,
            })?;

        let debug = self.bool_or(keys::DEBUG, false);
        let allowed_hosts = self.allowed_hosts();
        let database = self.database()?;

        let settings = Settings {
            secret_key,
            debug,
            allowed_hosts,
            database,
            cors: defaults::cors(),
            security: SecuritySettings::for_debug(debug),
            jwt: JwtSettings::default(),
            rest_framework: RestFrameworkSettings::default(),
            password_validators: PasswordValidator::standard_set(),
            i18n: I18nSettings::default(),
            files: FileSettings::under(&self.base_dir),
            admin: defaults::admin_theme(),
        };

        tracing::info!(
            debug = settings.debug,
            allowed_hosts = settings.allowed_hosts.len(),
            database = %settings.database.redacted_location(),
            database_source = ?settings.database.source,
            hardened = settings.security.is_hardened(),
            "Settings resolved"
        );

        Ok(settings)
    }

    fn platform_var(&self, key: &str) -> Option<String> {
        match &self.platform {
            Some(platform) => platform.get_non_empty(key),
            None => self.env.get_non_empty(key),
        }
    }

    fn bool_or(&self, key: &str, default: bool) -> bool {
        let Some(raw) = self.env.get_non_empty(key) else {
            return default;
        };
        match parse_bool(&raw) {
            Some(value) => value,
            None => {
                tracing::warn!(key, value = %raw, default, "Not a boolean, using default");
                default
            }
        }
    }

    fn allowed_hosts(&self) -> IndexSet<String> {
        let mut hosts: IndexSet<String> = self
            .env
            .get(keys::ALLOWED_HOSTS)
            .map(|raw| parse_list(&raw).collect())
            .unwrap_or_default();

        if let Some(platform_host) = self.platform_var(keys::RENDER_EXTERNAL_HOSTNAME) {
            hosts.insert(platform_host.trim().to_string());
        }

        hosts
    }

    fn database(&self) -> Result<DatabaseSettings, ConfigError> {
        match self.platform_var(keys::DATABASE_URL) {
            Some(url) => parse_database_url(&url),
            None => Ok(self.discrete_database()),
        }
    }

    fn discrete_database(&self) -> DatabaseSettings {
        let text_or = |key: &str, default: &str| {
            self.env
                .get_non_empty(key)
                .unwrap_or_else(|| default.to_string())
        };

        let password = self.env.get_non_empty(keys::DB_PASSWORD).map(Secret::new);
        if password.is_none() {
            tracing::warn!("DB_PASSWORD is not set; connecting without a password");
        }

        let port = match self.env.get_non_empty(keys::DB_PORT) {
            None => defaults::DEFAULT_DB_PORT,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "DB_PORT is not a valid port, using default");
                defaults::DEFAULT_DB_PORT
            }),
        };

        DatabaseSettings {
            engine: DatabaseEngine::Postgresql,
            name: text_or(keys::DB_NAME, defaults::DEFAULT_DB_NAME),
            user: Some(text_or(keys::DB_USER, defaults::DEFAULT_DB_USER)),
            password,
            host: Some(text_or(keys::DB_HOST, defaults::DEFAULT_DB_HOST)),
            port: Some(port),
            options: Default::default(),
            conn_max_age: std::time::Duration::ZERO,
            conn_health_checks: false,
            source: DatabaseSource::Discrete,
        }
    }
}

/// Convenience wrapper: resolve once from `env` with `base_dir`.
pub fn resolve_settings<E: EnvSource>(
    env: E,
    base_dir: impl Into<PathBuf>,
) -> Result<Settings, ConfigError> {
    SettingsResolver::new(env, base_dir).resolve()
}
