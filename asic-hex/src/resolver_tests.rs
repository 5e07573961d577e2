//! SettingsResolver unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use asic_env::{EnvSnapshot, Environment};
    use asic_types::{
        ConfigError, DatabaseEngine, DatabaseSource, FrameOptions, Secret, SecuritySettings,
        Settings,
    };
    use chrono::TimeDelta;

    use crate::SettingsResolver;

    fn resolve(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let env = EnvSnapshot::from_pairs(pairs.iter().copied());
        SettingsResolver::new(env, "/srv/asic").resolve()
    }

    /// Minimal environment that resolves successfully.
    pub fn base_env() -> Vec<(&'static str, &'static str)> {
        vec![("SECRET_KEY", "test-secret-key")]
    }

    fn with(extra: &[(&'static str, &'static str)]) -> Vec<(&'static str, &'static str)> {
        let mut env = base_env();
        env.extend_from_slice(extra);
        env
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Secret key
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_missing_secret_key_fails() {
        let err = resolve(&[("DEBUG", "true")]).unwrap_err();
        assert_eq!(err, ConfigError::MissingRequiredConfig { key: "SECRET_KEY" });
        assert!(err.to_string().contains("SECRET_KEY"));
    }

    #[test]
    fn test_empty_secret_key_fails() {
        let err = resolve(&[("SECRET_KEY", "")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequiredConfig { .. }));
    }

    #[test]
    fn test_secret_key_is_kept() {
        let settings = resolve(&base_env()).unwrap();
        assert_eq!(settings.secret_key, Secret::new("test-secret-key"));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Debug and hardening
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_debug_absent_enables_hardening() {
        let settings = resolve(&base_env()).unwrap();

        assert!(!settings.debug);
        assert_eq!(settings.security, SecuritySettings::production());
        assert!(settings.security.ssl_redirect);
        assert!(settings.security.session_cookie_secure);
        assert!(settings.security.csrf_cookie_secure);
        assert!(settings.security.browser_xss_filter);
        assert!(settings.security.content_type_nosniff);
        assert_eq!(settings.security.x_frame_options, Some(FrameOptions::Deny));
    }

    #[test]
    fn test_debug_true_disables_hardening() {
        let settings = resolve(&with(&[("DEBUG", "true")])).unwrap();

        assert!(settings.debug);
        assert_eq!(settings.security, SecuritySettings::development());
        assert!(!settings.security.ssl_redirect);
        assert_eq!(settings.security.x_frame_options, None);
    }

    #[test]
    fn test_debug_accepts_common_forms() {
        for raw in ["1", "yes", "On", "TRUE"] {
            assert!(resolve(&with(&[("DEBUG", raw)])).unwrap().debug, "{raw}");
        }
        for raw in ["0", "no", "off", "False"] {
            assert!(!resolve(&with(&[("DEBUG", raw)])).unwrap().debug, "{raw}");
        }
    }

    #[test]
    fn test_unrecognised_debug_falls_back_to_false() {
        let settings = resolve(&with(&[("DEBUG", "sometimes")])).unwrap();
        assert!(!settings.debug);
        assert!(settings.security.is_hardened());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Allowed hosts
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_allowed_hosts_with_platform_hostname() {
        let settings = resolve(&with(&[
            ("ALLOWED_HOSTS", "a.com,b.com"),
            ("RENDER_EXTERNAL_HOSTNAME", "c.com"),
        ]))
        .unwrap();

        let hosts: Vec<_> = settings.allowed_hosts.iter().map(String::as_str).collect();
        assert_eq!(hosts, vec!["a.com", "b.com", "c.com"]);
    }

    #[test]
    fn test_allowed_hosts_default_empty() {
        let settings = resolve(&base_env()).unwrap();
        assert!(settings.allowed_hosts.is_empty());
    }

    #[test]
    fn test_allowed_hosts_trimmed_and_deduplicated() {
        let settings = resolve(&with(&[
            ("ALLOWED_HOSTS", " a.com , a.com,,b.com "),
            ("RENDER_EXTERNAL_HOSTNAME", "a.com"),
        ]))
        .unwrap();

        let hosts: Vec<_> = settings.allowed_hosts.iter().map(String::as_str).collect();
        assert_eq!(hosts, vec!["a.com", "b.com"]);
    }

    #[test]
    fn test_empty_platform_hostname_is_ignored() {
        let settings = resolve(&with(&[
            ("ALLOWED_HOSTS", "a.com"),
            ("RENDER_EXTERNAL_HOSTNAME", ""),
        ]))
        .unwrap();
        assert_eq!(settings.allowed_hosts.len(), 1);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Database
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_database_url_wins_over_discrete_fields() {
        let settings = resolve(&with(&[
            ("DATABASE_URL", "postgres://u:p@h:5432/d"),
            ("DB_NAME", "other"),
            ("DB_USER", "someone"),
            ("DB_HOST", "elsewhere"),
            ("DB_PORT", "6543"),
        ]))
        .unwrap();

        let db = &settings.database;
        assert_eq!(db.source, DatabaseSource::Url);
        assert_eq!(db.host.as_deref(), Some("h"));
        assert_eq!(db.port, Some(5432));
        assert_eq!(db.name, "d");
        assert_eq!(db.user.as_deref(), Some("u"));
        assert_eq!(db.conn_max_age, Duration::from_secs(600));
        assert!(db.conn_health_checks);
    }

    #[test]
    fn test_database_defaults() {
        let settings = resolve(&base_env()).unwrap();

        let db = &settings.database;
        assert_eq!(db.source, DatabaseSource::Discrete);
        assert_eq!(db.engine, DatabaseEngine::Postgresql);
        assert_eq!(db.name, "asic_school_db");
        assert_eq!(db.user.as_deref(), Some("asic_user"));
        assert_eq!(db.host.as_deref(), Some("localhost"));
        assert_eq!(db.port, Some(5432));
        assert_eq!(db.conn_max_age, Duration::ZERO);
        assert!(!db.conn_health_checks);
    }

    #[test]
    fn test_database_has_no_builtin_password() {
        let settings = resolve(&base_env()).unwrap();
        assert_eq!(settings.database.password, None);
    }

    #[test]
    fn test_discrete_database_fields() {
        let settings = resolve(&with(&[
            ("DB_NAME", "school"),
            ("DB_USER", "admin"),
            ("DB_PASSWORD", "pw"),
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "6543"),
        ]))
        .unwrap();

        let db = &settings.database;
        assert_eq!(db.name, "school");
        assert_eq!(db.user.as_deref(), Some("admin"));
        assert_eq!(db.password, Some(Secret::new("pw")));
        assert_eq!(db.host.as_deref(), Some("db.internal"));
        assert_eq!(db.port, Some(6543));
    }

    #[test]
    fn test_invalid_db_port_falls_back() {
        let settings = resolve(&with(&[("DB_PORT", "postgres")])).unwrap();
        assert_eq!(settings.database.port, Some(5432));
    }

    #[test]
    fn test_empty_database_url_uses_discrete_fields() {
        let settings = resolve(&with(&[("DATABASE_URL", ""), ("DB_NAME", "school")])).unwrap();
        assert_eq!(settings.database.source, DatabaseSource::Discrete);
        assert_eq!(settings.database.name, "school");
    }

    #[test]
    fn test_invalid_database_url_fails() {
        let err = resolve(&with(&[("DATABASE_URL", "ftp://u:p@h/d")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDatabaseUrl { .. }));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Platform variables
    // ─────────────────────────────────────────────────────────────────────────────

    /// Resolves `process` over `file`, reading platform variables from the
    /// process layer only, as the binaries do.
    fn resolve_layered(
        process: &[(&str, &str)],
        file: &[(&str, &str)],
    ) -> Result<Settings, ConfigError> {
        let env = Environment::new(
            EnvSnapshot::from_pairs(process.iter().copied()),
            EnvSnapshot::from_pairs(file.iter().copied()),
        );
        SettingsResolver::new(&env, "/srv/asic")
            .with_platform(env.process())
            .resolve()
    }

    #[test]
    fn test_database_url_only_in_env_file_uses_discrete_path() {
        let settings = resolve_layered(
            &[],
            &[
                ("SECRET_KEY", "k"),
                ("DATABASE_URL", "postgres://u:p@fromfile:5432/d"),
                ("RENDER_EXTERNAL_HOSTNAME", "fromfile.onrender.com"),
            ],
        )
        .unwrap();

        assert_eq!(settings.database.source, DatabaseSource::Discrete);
        assert_eq!(settings.database.host.as_deref(), Some("localhost"));
        assert!(settings.allowed_hosts.is_empty());
    }

    #[test]
    fn test_platform_variables_from_process_are_used() {
        let settings = resolve_layered(
            &[
                ("DATABASE_URL", "postgres://u:p@render-db:5432/d"),
                ("RENDER_EXTERNAL_HOSTNAME", "asic-backend.onrender.com"),
            ],
            &[("SECRET_KEY", "k"), ("ALLOWED_HOSTS", "a.com")],
        )
        .unwrap();

        assert_eq!(settings.database.source, DatabaseSource::Url);
        assert_eq!(settings.database.host.as_deref(), Some("render-db"));
        assert_eq!(
            settings.allowed_hosts.iter().map(String::as_str).collect::<Vec<_>>(),
            ["a.com", "asic-backend.onrender.com"]
        );
    }

    #[test]
    fn test_env_file_still_supplies_discrete_fields() {
        let settings = resolve_layered(
            &[("DB_HOST", "process-db")],
            &[("SECRET_KEY", "k"), ("DB_HOST", "file-db"), ("DB_NAME", "from_file")],
        )
        .unwrap();

        assert_eq!(settings.database.host.as_deref(), Some("process-db"));
        assert_eq!(settings.database.name, "from_file");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Static values
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_static_sections() {
        let settings = resolve(&base_env()).unwrap();

        let origins: Vec<_> = settings
            .cors
            .allowed_origins
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(
            origins,
            vec![
                "http://localhost:3000",
                "http://localhost:5173",
                "https://asic-school.vercel.app"
            ]
        );
        assert_eq!(settings.rest_framework.page_size, 10);
        assert_eq!(settings.jwt.access_token_lifetime, TimeDelta::days(1));
        assert_eq!(settings.jwt.refresh_token_lifetime, TimeDelta::days(7));
        assert!(settings.jwt.rotate_refresh_tokens);
        assert!(settings.jwt.blacklist_after_rotation);
        assert_eq!(settings.password_validators.len(), 4);
        assert_eq!(settings.i18n.time_zone, "Asia/Kolkata");
        assert_eq!(settings.admin.sidebar.navigation.len(), 4);
        assert_eq!(
            settings.files.static_root,
            PathBuf::from("/srv/asic/staticfiles")
        );
        assert_eq!(settings.files.media_root, PathBuf::from("/srv/asic/media"));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let env = EnvSnapshot::from_pairs(with(&[
            ("DEBUG", "false"),
            ("ALLOWED_HOSTS", "a.com"),
            ("DATABASE_URL", "postgres://u:p@h:5432/d?sslmode=require"),
        ]));
        let resolver = SettingsResolver::new(env, "/srv/asic");

        let first = resolver.resolve().unwrap();
        let second = resolver.resolve().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_serialized_settings_hide_secrets() {
        let settings = resolve(&with(&[("DATABASE_URL", "postgres://u:hunter2@h/d")])).unwrap();
        let json = serde_json::to_string(&settings).unwrap();

        assert!(!json.contains("test-secret-key"));
        assert!(!json.contains("hunter2"));
        assert!(json.contains("\"page_size\":10"));
        assert!(json.contains("\"access_token_lifetime\":86400"));
    }
}
