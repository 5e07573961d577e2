//! SQLite connection options.

use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;

use asic_types::{DatabaseSettings, DbError};

const IN_MEMORY: &str = ":memory:";

/// Builds connect options for the file named in `settings.name`, creating it
/// if missing. `:memory:` opens a private in-memory database per connection.
pub fn connect_options(settings: &DatabaseSettings) -> Result<SqliteConnectOptions, DbError> {
    if settings.name == IN_MEMORY {
        return SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| DbError::Connection(e.to_string()));
    }

    Ok(SqliteConnectOptions::new()
        .filename(&settings.name)
        .create_if_missing(true))
}
