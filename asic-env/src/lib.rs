//! # ASIC Env
//!
//! Environment adapters implementing the `EnvSource` port.
//!
//! Every source here is an immutable snapshot: the process environment and
//! the `.env` file are read once, at construction, and never again. Nothing in
//! this crate writes to the process environment.

use std::collections::HashMap;
use std::path::Path;

use asic_types::{ConfigError, EnvSource};

/// Variables captured at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Captures the current process environment. Variables whose name or
    /// value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    /// Reads a `.env`-style file. A missing file yields an empty snapshot.
    pub fn from_dotenv_file(path: &Path) -> Result<Self, ConfigError> {
        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(e) if e.not_found() => {
                tracing::debug!(path = %path.display(), "No environment file found");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::EnvFile(format!("{}: {}", path.display(), e))),
        };

        let mut vars = HashMap::new();
        for item in iter {
            let (key, value) =
                item.map_err(|e| ConfigError::EnvFile(format!("{}: {}", path.display(), e)))?;
            vars.insert(key, value);
        }

        tracing::debug!(path = %path.display(), count = vars.len(), "Loaded environment file");
        Ok(Self { vars })
    }

    /// Builds a snapshot from explicit pairs. Later pairs win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for EnvSnapshot {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// The startup environment: the process snapshot layered over the
/// environment file.
///
/// Lookups through `EnvSource` see the process first, then the file.
/// [`Environment::process`] exposes the process layer alone, for variables
/// that a deployment platform injects and a developer file must not supply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    process: EnvSnapshot,
    file: EnvSnapshot,
}

impl Environment {
    pub fn new(process: EnvSnapshot, file: EnvSnapshot) -> Self {
        Self { process, file }
    }

    pub fn process(&self) -> &EnvSnapshot {
        &self.process
    }
}

impl EnvSource for Environment {
    fn get(&self, key: &str) -> Option<String> {
        self.process.get(key).or_else(|| self.file.get(key))
    }
}

/// Reads the optional environment file and captures the process environment.
pub fn load_environment(env_file: &Path) -> Result<Environment, ConfigError> {
    let file = EnvSnapshot::from_dotenv_file(env_file)?;
    Ok(Environment::new(EnvSnapshot::from_process(), file))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_missing_env_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = EnvSnapshot::from_dotenv_file(&dir.path().join(".env")).unwrap();
        assert_eq!(snapshot, EnvSnapshot::default());
    }

    #[test]
    fn test_env_file_is_parsed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "SECRET_KEY=from-file").unwrap();
        writeln!(file, "ALLOWED_HOSTS=\"a.com,b.com\"").unwrap();

        let snapshot = EnvSnapshot::from_dotenv_file(file.path()).unwrap();
        assert_eq!(snapshot.get("SECRET_KEY").as_deref(), Some("from-file"));
        assert_eq!(snapshot.get("ALLOWED_HOSTS").as_deref(), Some("a.com,b.com"));
        assert_eq!(snapshot.get("DEBUG"), None);
    }

    #[test]
    fn test_malformed_env_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "SECRET_KEY='unterminated").unwrap();

        let err = EnvSnapshot::from_dotenv_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::EnvFile(_)));
    }

    #[test]
    fn test_process_layer_wins() {
        let process = EnvSnapshot::from_pairs([("DEBUG", "false"), ("DB_HOST", "db")]);
        let file = EnvSnapshot::from_pairs([("DEBUG", "true"), ("DB_NAME", "school")]);
        let env = Environment::new(process, file);

        assert_eq!(env.get("DEBUG").as_deref(), Some("false"));
        assert_eq!(env.get("DB_HOST").as_deref(), Some("db"));
        assert_eq!(env.get("DB_NAME").as_deref(), Some("school"));
        assert_eq!(env.get("DB_PORT"), None);

        assert_eq!(env.process().get("DB_NAME"), None);
        assert_eq!(env.process().get("DB_HOST").as_deref(), Some("db"));
    }

    #[test]
    fn test_load_environment_prefers_process_over_file() {
        let process_path = std::env::var("PATH").unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "PATH=/from/env/file").unwrap();
        writeln!(file, "ASIC_ENV_FILE_ONLY_KEY=from-file").unwrap();

        let env = load_environment(file.path()).unwrap();

        assert_eq!(env.get("PATH"), Some(process_path));
        assert_eq!(env.get("ASIC_ENV_FILE_ONLY_KEY").as_deref(), Some("from-file"));
        assert_eq!(env.process().get("ASIC_ENV_FILE_ONLY_KEY"), None);
    }

    #[test]
    fn test_empty_value_is_not_set() {
        let env = EnvSnapshot::from_pairs([("DATABASE_URL", "  ")]);
        assert_eq!(env.get("DATABASE_URL").as_deref(), Some("  "));
        assert_eq!(env.get_non_empty("DATABASE_URL"), None);
    }
}
