//! REST API, password policy and locale settings.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Authentication {
    Jwt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Reads are public, writes need an authenticated user.
    IsAuthenticatedOrReadOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pagination {
    PageNumber,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestFrameworkSettings {
    pub authentication: Vec<Authentication>,
    pub permissions: Vec<Permission>,
    pub pagination: Pagination,
    pub page_size: u32,
}

impl Default for RestFrameworkSettings {
    fn default() -> Self {
        Self {
            authentication: vec![Authentication::Jwt],
            permissions: vec![Permission::IsAuthenticatedOrReadOnly],
            pagination: Pagination::PageNumber,
            page_size: 10,
        }
    }
}

/// Password rules applied when users set a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum PasswordValidator {
    UserAttributeSimilarity,
    MinimumLength { min_length: usize },
    CommonPassword,
    NumericPassword,
}

impl PasswordValidator {
    pub fn standard_set() -> Vec<Self> {
        vec![
            PasswordValidator::UserAttributeSimilarity,
            PasswordValidator::MinimumLength { min_length: 8 },
            PasswordValidator::CommonPassword,
            PasswordValidator::NumericPassword,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct I18nSettings {
    pub language_code: String,
    pub time_zone: String,
    pub use_i18n: bool,
    pub use_tz: bool,
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            language_code: "en-us".to_string(),
            time_zone: "Asia/Kolkata".to_string(),
            use_i18n: true,
            use_tz: true,
        }
    }
}
