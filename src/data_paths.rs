use std::path::{Path, PathBuf};

/// Default data directory (relative to current working directory)
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Environment variable that overrides the default data directory
pub const DATA_DIR_ENV: &str = "GAINLOSS_DATA_DIR";

/// Subdirectory paths relative to the data directory
pub const STORE_DIR: &str = "store";
pub const LOGS_DIR: &str = "logs";

/// Helper struct to manage data paths
#[derive(Clone, Debug)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    /// Create a new DataPaths instance with the given root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root data directory
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Get the store directory (JSON key-value files live here)
    pub fn store(&self) -> PathBuf {
        self.root.join(STORE_DIR)
    }

    /// Get the logs directory
    pub fn logs(&self) -> PathBuf {
        self.root.join(LOGS_DIR)
    }

    /// Ensure all directories exist
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::create_dir_all(self.store())?;
        std::fs::create_dir_all(self.logs())?;
        Ok(())
    }
}

/// Resolve the default data directory: `GAINLOSS_DATA_DIR` wins, then the
/// per-user data dir, then `./data`.
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }

    if let Some(dirs) = directories::ProjectDirs::from("com", "gainloss", "gainloss") {
        return dirs.data_dir().to_path_buf();
    }

    PathBuf::from(DEFAULT_DATA_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subdirectories_live_under_root() {
        let paths = DataPaths::new("/tmp/gainloss-test");

        assert!(paths.store().starts_with(paths.root()));
        assert!(paths.logs().starts_with(paths.root()));
        assert!(paths.store().ends_with(STORE_DIR));
        assert!(paths.logs().ends_with(LOGS_DIR));
    }

    #[test]
    fn test_ensure_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(tmp.path().join("data"));

        paths.ensure_directories().unwrap();

        assert!(paths.store().is_dir());
        assert!(paths.logs().is_dir());
    }
}
