use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::models::settings::TimeSettings;

use super::PreferencesError;

/// Fixed key the time settings are stored under.
pub const TIME_SETTINGS_KEY: &str = "scheduler-time-settings";

/// Load/save capability for the persisted time-range preference.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    fn load(&self) -> Result<TimeSettings, PreferencesError>;
    fn save(&self, settings: &TimeSettings) -> Result<(), PreferencesError>;
}

/// Stores the record as a JSON file named after [`TIME_SETTINGS_KEY`].
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{TIME_SETTINGS_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<TimeSettings, PreferencesError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(PreferencesError::Missing)
            }
            Err(err) => return Err(PreferencesError::io(&self.path, err)),
        };
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, settings: &TimeSettings) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| PreferencesError::io(parent, err))?;
        }

        let data = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, data).map_err(|err| PreferencesError::io(&self.path, err))
    }
}

/// Keeps the serialized record in memory, like a browser's local storage
/// slot. Used for headless runs and tests.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    raw: Mutex<Option<String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with arbitrary text, valid or not
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    /// Current raw contents of the slot
    pub fn raw(&self) -> Option<String> {
        self.slot().clone()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.raw.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<TimeSettings, PreferencesError> {
        let slot = self.slot();
        let raw = slot.as_deref().ok_or(PreferencesError::Missing)?;
        Ok(serde_json::from_str(raw)?)
    }

    fn save(&self, settings: &TimeSettings) -> Result<(), PreferencesError> {
        let data = serde_json::to_string(settings)?;
        *self.slot() = Some(data);
        Ok(())
    }
}
