//! Platform-aware data storage directory management
//!
//! ## Platform Paths
//!
//! | Type | Windows | macOS | Linux |
//! |------|---------|-------|-------|
//! | Data | `%APPDATA%\PlayerRegistry\` | `~/Library/Application Support/PlayerRegistry/` | `$XDG_DATA_HOME/playerregistry/` |

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use super::config::{AppConfig, StoreBackend};
use super::constants::{APP_DOT_FOLDER, APP_NAME, ENV_DATA_DIR};
use crate::utils::file::expand_path;

/// Data subdirectories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSubdir {
    Sqlite,
}

impl DataSubdir {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DataSubdir::Sqlite => "sqlite",
        }
    }

    /// Subdirectories required by a store backend.
    /// The in-memory store never touches disk.
    pub const fn for_backend(backend: StoreBackend) -> &'static [DataSubdir] {
        match backend {
            StoreBackend::Sqlite => &[DataSubdir::Sqlite],
            StoreBackend::Memory => &[],
        }
    }
}

/// Application storage manager
#[derive(Debug, Clone)]
pub struct AppStorage {
    data_dir: PathBuf,
}

impl AppStorage {
    /// Initialize storage with platform-appropriate data directory
    pub async fn init(config: &AppConfig) -> Result<Self> {
        let data_dir = Self::resolve_data_dir();

        // Create directories first (canonicalize requires path to exist)
        Self::ensure_directories(&data_dir, config.database.backend).await?;

        let data_dir = data_dir.canonicalize().unwrap_or(data_dir);

        tracing::debug!(data_dir = %data_dir.display(), "Storage initialized");

        Ok(Self { data_dir })
    }

    /// Resolve data directory from env var or platform default
    pub fn resolve_data_dir() -> PathBuf {
        if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
            return expand_path(&dir);
        }

        if let Some(proj_dirs) = ProjectDirs::from("", "", APP_NAME) {
            return proj_dirs.data_dir().to_path_buf();
        }

        // Fallback to local .player-registry
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        cwd.join(APP_DOT_FOLDER)
    }

    async fn ensure_directories(data_dir: &Path, backend: StoreBackend) -> Result<()> {
        tokio::fs::create_dir_all(data_dir)
            .await
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

        for subdir in DataSubdir::for_backend(backend) {
            let path = data_dir.join(subdir.as_str());
            tokio::fs::create_dir_all(&path).await.with_context(|| {
                format!(
                    "Failed to create {} directory: {}",
                    subdir.as_str(),
                    path.display()
                )
            })?;
        }

        Ok(())
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get path to a file within a subdirectory
    pub fn subdir_path(&self, subdir: DataSubdir, filename: &str) -> PathBuf {
        self.data_dir.join(subdir.as_str()).join(filename)
    }

    /// Create AppStorage for testing with a specific data directory
    #[cfg(test)]
    pub fn init_for_test(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_subdir_as_str() {
        assert_eq!(DataSubdir::Sqlite.as_str(), "sqlite");
    }

    #[test]
    fn test_data_subdir_for_backend() {
        assert_eq!(
            DataSubdir::for_backend(StoreBackend::Sqlite),
            &[DataSubdir::Sqlite]
        );
        assert!(DataSubdir::for_backend(StoreBackend::Memory).is_empty());
    }

    #[test]
    fn test_subdir_path() {
        let storage = AppStorage::init_for_test(PathBuf::from("/tmp/registry"));
        assert_eq!(
            storage.subdir_path(DataSubdir::Sqlite, "players.db"),
            PathBuf::from("/tmp/registry/sqlite/players.db")
        );
        assert_eq!(storage.data_dir(), Path::new("/tmp/registry"));
    }

    #[tokio::test]
    async fn test_ensure_directories_creates_sqlite_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let data_dir = temp_dir.path().join("data");
        AppStorage::ensure_directories(&data_dir, StoreBackend::Sqlite)
            .await
            .unwrap();
        assert!(data_dir.join("sqlite").is_dir());
    }

    #[tokio::test]
    async fn test_ensure_directories_memory_skips_subdirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let data_dir = temp_dir.path().join("data");
        AppStorage::ensure_directories(&data_dir, StoreBackend::Memory)
            .await
            .unwrap();
        assert!(data_dir.is_dir());
        assert!(!data_dir.join("sqlite").exists());
    }
}
