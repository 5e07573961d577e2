//! Static and uploaded file locations.

use std::path::{Path, PathBuf};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSettings {
    pub static_url: String,
    pub static_root: PathBuf,
    pub media_url: String,
    pub media_root: PathBuf,
}

impl FileSettings {
    /// Collected assets under `<base>/staticfiles`, uploads under `<base>/media`.
    pub fn under(base_dir: &Path) -> Self {
        Self {
            static_url: "/static/".to_string(),
            static_root: base_dir.join("staticfiles"),
            media_url: "/media/".to_string(),
            media_root: base_dir.join("media"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roots_are_derived_from_base_dir() {
        let files = FileSettings::under(Path::new("/srv/asic"));
        assert_eq!(files.static_root, PathBuf::from("/srv/asic/staticfiles"));
        assert_eq!(files.media_root, PathBuf::from("/srv/asic/media"));
        assert_eq!(files.static_url, "/static/");
        assert_eq!(files.media_url, "/media/");
    }
}
