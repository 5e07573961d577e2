//! Error types for settings resolution and the database adapter.

/// Configuration errors (startup is aborted on any of these).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {key} must be set")]
    MissingRequiredConfig { key: &'static str },

    /// The reason never contains the URL itself, which carries credentials.
    #[error("Invalid DATABASE_URL: {reason}")]
    InvalidDatabaseUrl { reason: String },

    #[error("Failed to read environment file: {0}")]
    EnvFile(String),
}

/// Database adapter errors.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database engine '{0}' is not enabled in this build")]
    UnsupportedEngine(String),

    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_config_names_key() {
        let err = ConfigError::MissingRequiredConfig { key: "SECRET_KEY" };
        assert_eq!(
            err.to_string(),
            "Missing required configuration: SECRET_KEY must be set"
        );
    }
}
