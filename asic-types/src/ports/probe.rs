//! Database health port.

use async_trait::async_trait;

use crate::error::DbError;

/// Checks whether the configured database is reachable.
#[async_trait]
pub trait DatabaseProbe: Send + Sync + 'static {
    async fn ping(&self) -> Result<(), DbError>;
}
