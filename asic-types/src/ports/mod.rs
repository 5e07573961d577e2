//! Port traits (interfaces for adapters).
//!
//! The resolver depends on `EnvSource`, the HTTP adapter on `DatabaseProbe`;
//! neither knows which concrete adapter it is given.

mod env;
mod probe;

pub use env::EnvSource;
pub use probe::DatabaseProbe;
