//! # ASIC Types
//!
//! Settings domain types and port traits for the school website backend.
//! This crate has ZERO external IO dependencies - only data structures,
//! construction rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate is the **innermost core** of the workspace:
//! - `settings/` - The immutable `Settings` value and its sub-configurations
//! - `ports/` - Trait definitions that adapters must implement
//! - `secret/` - Redacting wrapper for credentials
//! - `error/` - Configuration and database error types

pub mod error;
pub mod ports;
pub mod secret;
pub mod settings;

// Re-export commonly used types
pub use error::{ConfigError, DbError};
pub use ports::{DatabaseProbe, EnvSource};
pub use secret::Secret;
pub use settings::{
    AdminTheme, CorsSettings, DatabaseEngine, DatabaseSettings, DatabaseSource, FileSettings,
    FrameOptions, I18nSettings, JwtSettings, NavGroup, NavItem, PasswordValidator,
    RestFrameworkSettings, SecuritySettings, Settings, Sidebar,
};
