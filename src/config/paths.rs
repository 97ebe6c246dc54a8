//! Path management for the contact manager
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` command line flag (if given)
//! 2. `CONTACTS_DATA_DIR` environment variable (if set)
//! 3. `./data` relative to the working directory

use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "CONTACTS_DATA_DIR";

const DEFAULT_DATA_DIR: &str = "data";

/// Manages all paths used by the contact manager
#[derive(Debug, Clone)]
pub struct ContactsPaths {
    /// Directory holding the address book, settings and audit log
    base_dir: PathBuf,
}

impl ContactsPaths {
    /// Resolve paths from the environment, falling back to `./data`
    pub fn new() -> Self {
        let base_dir = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        Self { base_dir }
    }

    /// Create ContactsPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to addressbook.json
    pub fn address_book_file(&self) -> PathBuf {
        self.base_dir.join("addressbook.json")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }
}

impl Default for ContactsPaths {
    fn default() -> Self {
        Self::new()
    }
}
