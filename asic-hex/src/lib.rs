//! # ASIC Hex
//!
//! Settings resolver and HTTP adapter for the school backend.
//!
//! ## Architecture
//!
//! - `resolver/` - Builds `Settings` from an injected `EnvSource`
//! - `database_url/` - `DATABASE_URL` parsing
//! - `checks/` - Deployment checks over resolved settings
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The resolver is generic over `E: EnvSource` and the server over
//! `P: DatabaseProbe`, so both can be driven by in-memory adapters in tests.

pub mod cast;
pub mod checks;
pub mod database_url;
pub mod defaults;
pub mod inbound;
pub mod resolver;

#[cfg(test)]
mod resolver_tests;

pub use checks::{DeployWarning, deployment_warnings};
pub use database_url::parse_database_url;
pub use resolver::{SettingsResolver, resolve_settings};
