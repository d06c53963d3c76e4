use std::path::{Path, PathBuf};

use crate::error::{ComplianceGuardError, Result};

use super::Config;

/// Config file looked up in the scan root.
pub const LOCAL_CONFIG_NAME: &str = ".compliance-guard.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// A loaded configuration and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub config: Config,
    /// `None` when defaults were used.
    pub source: Option<PathBuf>,
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration for a scan of `root`.
    ///
    /// # Errors
    /// Returns an error if a config file exists but cannot be read or parsed.
    fn load(&self, root: &Path) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the platform-specific configuration directory for compliance-guard.
    ///
    /// - Windows: `%APPDATA%\compliance-guard`
    /// - macOS: `~/Library/Application Support/compliance-guard`
    /// - Linux: `~/.config/compliance-guard` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "compliance-guard")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.compliance-guard.toml` in the scan root
/// 2. `config.toml` in the platform-specific user config directory
/// 3. `Config::default()` if neither exists
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    fn parse_config(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(ComplianceGuardError::from)
    }

    fn read_config(&self, path: &Path) -> Result<LoadResult> {
        let content =
            self.fs
                .read_to_string(path)
                .map_err(|source| ComplianceGuardError::FileRead {
                    path: path.to_path_buf(),
                    source,
                })?;

        let config = Self::parse_config(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self, root: &Path) -> Result<LoadResult> {
        let candidates =
            std::iter::once(root.join(LOCAL_CONFIG_NAME)).chain(self.user_config_path());

        for path in candidates {
            if self.fs.exists(&path) {
                return self.read_config(&path);
            }
        }

        Ok(LoadResult {
            config: Config::default(),
            source: None,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        self.read_config(path)
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
