//! User settings for the contact manager
//!
//! Settings are optional: a missing file yields defaults, and any field
//! missing from the file takes its default value.

use serde::Deserialize;

use super::paths::ContactsPaths;
use crate::error::ContactsError;
use crate::models::DEFAULT_UPCOMING_WINDOW_DAYS;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// How many days ahead the `birthdays` command looks
    #[serde(default = "default_upcoming_window_days")]
    pub upcoming_window_days: i64,

    /// Whether contact mutations are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

/// Newest settings layout this build understands
pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SETTINGS_SCHEMA_VERSION
}

fn default_upcoming_window_days() -> i64 {
    DEFAULT_UPCOMING_WINDOW_DAYS
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            upcoming_window_days: default_upcoming_window_days(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_default(paths: &ContactsPaths) -> Result<Self, ContactsError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ContactsError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            ContactsError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        if settings.schema_version > SETTINGS_SCHEMA_VERSION {
            return Err(ContactsError::Config(format!(
                "Unsupported settings schema version {} in {}",
                settings.schema_version,
                settings_path.display()
            )));
        }

        if settings.upcoming_window_days < 0 {
            return Err(ContactsError::Config(format!(
                "upcoming_window_days must not be negative (got {})",
                settings.upcoming_window_days
            )));
        }

        Ok(settings)
    }
}
