//! File-backed settings persistence.
//!
//! This module provides the [`SettingsStore`] type, which keeps the time
//! settings and access policy as YAML documents in a directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{AttendanceError, AttendanceResult};

use super::types::{AccessSettings, TimeSettings};

/// File holding the per-shift time windows.
pub const TIME_SETTINGS_FILE: &str = "time_settings.yaml";

/// File holding the access policy flags.
pub const ACCESS_SETTINGS_FILE: &str = "access_settings.yaml";

/// Loads, validates and persists attendance settings.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── time_settings.yaml    # Per-shift time windows
/// └── access_settings.yaml  # Access policy flags
/// ```
///
/// Either file may be absent, in which case the built-in defaults apply
/// until settings are saved.
///
/// # Example
///
/// ```no_run
/// use shift_attendance::attendance::evaluate;
/// use shift_attendance::config::SettingsStore;
///
/// let store = SettingsStore::open("./config/default")?;
/// let status = evaluate("06:05:00", "14:35:00", "Pagi", store.time_settings())?;
/// println!("{}", status.check_out_status);
/// # Ok::<(), shift_attendance::error::AttendanceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SettingsStore {
    dir: PathBuf,
    time_settings: TimeSettings,
    access_settings: AccessSettings,
}

impl SettingsStore {
    /// Opens the settings directory and loads both documents.
    ///
    /// # Returns
    ///
    /// Returns a `SettingsStore` on success, or an error if:
    /// - A settings file exists but cannot be read
    /// - A settings file contains invalid YAML
    /// - The loaded time settings fail validation
    pub fn open<P: AsRef<Path>>(dir: P) -> AttendanceResult<Self> {
        let dir = dir.as_ref().to_path_buf();

        let time_settings: TimeSettings =
            Self::load_yaml(&dir.join(TIME_SETTINGS_FILE))?.unwrap_or_default();
        time_settings.validate()?;

        let access_settings: AccessSettings =
            Self::load_yaml(&dir.join(ACCESS_SETTINGS_FILE))?.unwrap_or_default();

        info!(dir = %dir.display(), "Loaded attendance settings");

        Ok(Self {
            dir,
            time_settings,
            access_settings,
        })
    }

    /// Returns the directory the store persists to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the current time settings.
    pub fn time_settings(&self) -> &TimeSettings {
        &self.time_settings
    }

    /// Returns the current access policy.
    pub fn access_settings(&self) -> &AccessSettings {
        &self.access_settings
    }

    /// Validates and persists new time settings.
    ///
    /// Invalid settings are rejected before anything is written, and the
    /// in-memory copy only changes once the write has succeeded.
    pub fn save_time_settings(&mut self, settings: TimeSettings) -> AttendanceResult<()> {
        settings.validate()?;
        self.write_yaml(TIME_SETTINGS_FILE, &settings)?;
        self.time_settings = settings;
        Ok(())
    }

    /// Persists a new access policy.
    pub fn save_access_settings(&mut self, settings: AccessSettings) -> AttendanceResult<()> {
        self.write_yaml(ACCESS_SETTINGS_FILE, &settings)?;
        self.access_settings = settings;
        Ok(())
    }

    /// Loads and parses a YAML file, returning `None` when it does not exist.
    fn load_yaml<T: DeserializeOwned>(path: &Path) -> AttendanceResult<Option<T>> {
        let path_str = path.display().to_string();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path_str, "Settings file absent, using defaults");
                return Ok(None);
            }
            Err(_) => return Err(AttendanceError::ConfigNotFound { path: path_str }),
        };

        serde_yaml::from_str(&content)
            .map(Some)
            .map_err(|e| AttendanceError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })
    }

    fn write_yaml<T: Serialize>(&self, file: &str, value: &T) -> AttendanceResult<()> {
        let path = self.dir.join(file);
        let path_str = path.display().to_string();
        let write_error = |message: String| AttendanceError::ConfigWriteError {
            path: path_str.clone(),
            message,
        };

        let content = serde_yaml::to_string(value).map_err(|e| write_error(e.to_string()))?;
        fs::create_dir_all(&self.dir).map_err(|e| write_error(e.to_string()))?;
        fs::write(&path, content).map_err(|e| write_error(e.to_string()))?;

        info!(path = %path_str, "Saved attendance settings");
        Ok(())
    }
}
