//! Cross-origin allow-list.

use indexmap::IndexSet;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorsSettings {
    pub allowed_origins: IndexSet<String>,
    pub allow_credentials: bool,
}

impl CorsSettings {
    pub fn new<I, S>(origins: I, allow_credentials: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_origins: origins.into_iter().map(Into::into).collect(),
            allow_credentials,
        }
    }
}
