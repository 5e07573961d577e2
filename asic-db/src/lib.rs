//! # ASIC DB
//!
//! Database pool adapter for the school backend.
//! Builds a sqlx pool from resolved `DatabaseSettings` and implements the
//! `DatabaseProbe` port used by the health endpoint.

#[cfg(not(any(feature = "postgres", feature = "sqlite")))]
compile_error!("Enable a database feature: `postgres` or `sqlite`.");

use std::time::Duration;

use async_trait::async_trait;
use sqlx::Database;
use sqlx::pool::PoolOptions;

use asic_types::{DatabaseEngine, DatabaseProbe, DatabaseSettings, DbError};

#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;


/// Idle time after which a non-persistent connection is closed.
const NON_PERSISTENT_IDLE_TIMEOUT: Duration = Duration::from_secs(1);

/// Upper bound on waiting for a connection, so health checks fail fast.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection pool for whichever engine the settings selected.
#[derive(Debug, Clone)]
pub enum DbPool {
    #[cfg(feature = "postgres")]
    Postgres(sqlx::PgPool),
    #[cfg(feature = "sqlite")]
    Sqlite(sqlx::SqlitePool),
}

/// Build a lazily connecting pool from resolved settings.
///
/// No connection is opened here; the first query (or health ping) connects.
/// Engines whose feature is not compiled in are rejected.
pub fn build_pool(settings: &DatabaseSettings) -> Result<DbPool, DbError> {
    tracing::debug!(
        engine = %settings.engine,
        location = %settings.redacted_location(),
        "Building database pool"
    );

    match settings.engine {
        #[cfg(feature = "postgres")]
        DatabaseEngine::Postgresql => {
            let connect = postgres::connect_options(settings)?;
            Ok(DbPool::Postgres(
                pool_options(settings).connect_lazy_with(connect),
            ))
        }
        #[cfg(feature = "sqlite")]
        DatabaseEngine::Sqlite => {
            let connect = sqlite::connect_options(settings)?;
            Ok(DbPool::Sqlite(
                pool_options(settings).connect_lazy_with(connect),
            ))
        }
        #[allow(unreachable_patterns)]
        other => Err(DbError::UnsupportedEngine(other.to_string())),
    }
}

/// Maps connection reuse settings onto pool options.
///
/// A non-zero `conn_max_age` becomes the connection max lifetime. Zero means
/// connections are not kept: they are closed shortly after going idle.
/// `conn_health_checks` pings a pooled connection before handing it out.
pub fn pool_options<DB: Database>(settings: &DatabaseSettings) -> PoolOptions<DB> {
    let options = PoolOptions::<DB>::new()
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .test_before_acquire(settings.conn_health_checks);

    if settings.conn_max_age.is_zero() {
        options
            .min_connections(0)
            .max_lifetime(None)
            .idle_timeout(Some(NON_PERSISTENT_IDLE_TIMEOUT))
    } else {
        options.max_lifetime(Some(settings.conn_max_age))
    }
}

impl DbPool {
    pub fn engine(&self) -> DatabaseEngine {
        match self {
            #[cfg(feature = "postgres")]
            DbPool::Postgres(_) => DatabaseEngine::Postgresql,
            #[cfg(feature = "sqlite")]
            DbPool::Sqlite(_) => DatabaseEngine::Sqlite,
        }
    }

    /// Closes every connection; waits for checked-out ones to return.
    pub async fn close(&self) {
        match self {
            #[cfg(feature = "postgres")]
            DbPool::Postgres(pool) => pool.close().await,
            #[cfg(feature = "sqlite")]
            DbPool::Sqlite(pool) => pool.close().await,
        }
    }
}

#[async_trait]
impl DatabaseProbe for DbPool {
    async fn ping(&self) -> Result<(), DbError> {
        let result = match self {
            #[cfg(feature = "postgres")]
            DbPool::Postgres(pool) => sqlx::query("SELECT 1").execute(pool).await.map(|_| ()),
            #[cfg(feature = "sqlite")]
            DbPool::Sqlite(pool) => sqlx::query("SELECT 1").execute(pool).await.map(|_| ()),
        };
        result.map_err(|e| DbError::Unavailable(e.to_string()))
    }
}
