//! Persisted display preferences.
//!
//! Loading never fails: a missing, empty or corrupt file yields defaults. Saving
//! sanitizes first and surfaces write failures to the caller.

use crate::error::{Error, Result};
use crate::types::UserSettings;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tauri::{AppHandle, Manager, Runtime};

pub const SETTINGS_FILE: &str = "config.json";

pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store rooted in the per-user app config directory, or the working
    /// directory if the platform cannot provide one.
    pub fn for_app<R: Runtime>(app: &AppHandle<R>) -> Self {
        match app.path().app_config_dir() {
            Ok(dir) => Self::new(dir.join(SETTINGS_FILE)),
            Err(e) => {
                log::warn!("Settings: no config directory ({}), using ./{}", e, SETTINGS_FILE);
                Self::new(SETTINGS_FILE)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> UserSettings {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("Settings: {:?} not found, using defaults", self.path);
                return UserSettings::default();
            }
            Err(e) => {
                log::warn!("Settings: failed to read {:?}: {}", self.path, e);
                return UserSettings::default();
            }
        };

        if content.trim().is_empty() {
            return UserSettings::default();
        }

        match serde_json::from_str::<UserSettings>(&content) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                log::warn!("Settings: {:?} is corrupt ({}), using defaults", self.path, e);
                UserSettings::default()
            }
        }
    }

    /// Writes the sanitized record and returns it, so callers see what was stored.
    pub fn save(&self, settings: UserSettings) -> Result<UserSettings> {
        let settings = settings.sanitized();

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        let pretty = serde_json::to_string_pretty(&settings)?;
        fs::write(&self.path, pretty).map_err(|e| Error::io(&self.path, e))?;

        log::info!("Settings saved to {:?}", self.path);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Theme, WindowState};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SettingsStore {
        SettingsStore::new(dir.path().join("nested").join(SETTINGS_FILE))
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load(), UserSettings::default());
    }

    #[test]
    fn invalid_json_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(SettingsStore::new(&path).load(), UserSettings::default());
    }

    #[test]
    fn empty_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "  \n").unwrap();

        assert_eq!(SettingsStore::new(&path).load(), UserSettings::default());
    }

    #[test]
    fn round_trip_preserves_fields() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let settings = UserSettings {
            theme: Theme::Dark,
            zoom_percent: 125,
            window: WindowState {
                width: 1440,
                height: 900,
                maximized: true,
            },
        };

        let saved = store.save(settings.clone()).unwrap();

        assert_eq!(saved, settings);
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn out_of_range_values_are_clamped_on_save() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let settings = UserSettings {
            zoom_percent: 400,
            window: WindowState {
                width: 500,
                ..WindowState::default()
            },
            ..UserSettings::default()
        };

        store.save(settings).unwrap();
        let loaded = store.load();

        assert_eq!(loaded.zoom_percent, 300);
        assert_eq!(loaded.window.width, 1024);
    }

    #[test]
    fn out_of_range_values_on_disk_are_clamped_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, r#"{"zoom": 20, "window": {"width": 1200, "height": 100}}"#).unwrap();

        let loaded = SettingsStore::new(&path).load();

        assert_eq!(loaded.zoom_percent, 50);
        assert_eq!(loaded.window.width, 1200);
        assert_eq!(loaded.window.height, 768);
    }

    #[test]
    fn save_reports_write_failure() {
        let dir = TempDir::new().unwrap();
        // The target path is an existing directory, so the write must fail.
        let store = SettingsStore::new(dir.path());

        assert!(matches!(
            store.save(UserSettings::default()),
            Err(Error::Io { .. })
        ));
    }
}
