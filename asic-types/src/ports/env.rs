//! Environment lookup port.

/// Read-only view of configuration variables.
///
/// Implementations must be snapshots: two lookups of the same key return the
/// same answer for the lifetime of the value.
pub trait EnvSource {
    /// Returns the raw value of `key`, if set.
    fn get(&self, key: &str) -> Option<String>;

    /// Returns the value of `key`, treating an empty or all-whitespace value
    /// as unset.
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|value| !value.trim().is_empty())
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
