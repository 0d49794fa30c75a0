//! Application configuration loaded from `config.toml`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration as StdDuration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::models::view_mode::ViewMode;

/// Overrides the directory `config.toml` is read from.
pub const CONFIG_DIR_ENV: &str = "CALENDAR_SCHEDULER_CONFIG_DIR";
pub const CONFIG_FILE_NAME: &str = "config.toml";

fn default_now_refresh_secs() -> u64 {
    60
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// View shown when the scheduler opens
    pub default_view: ViewMode,
    /// Period of the current-time refresh
    #[serde(default = "default_now_refresh_secs")]
    pub now_refresh_secs: u64,
    /// Where the time-range preference is stored; project data dir when unset
    pub preferences_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_view: ViewMode::default(),
            now_refresh_secs: default_now_refresh_secs(),
            preferences_dir: None,
        }
    }
}

impl AppConfig {
    /// Load from the standard location. A missing file yields defaults.
    pub fn load() -> Result<Self> {
        match config_dir() {
            Some(dir) => Self::load_from(&dir.join(CONFIG_FILE_NAME)),
            None => {
                log::warn!("Unable to resolve config directory; using default configuration");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn now_refresh(&self) -> StdDuration {
        StdDuration::from_secs(self.now_refresh_secs.max(1))
    }

    /// Directory holding the time-range preference record
    pub fn resolve_preferences_dir(&self) -> PathBuf {
        if let Some(dir) = &self.preferences_dir {
            return dir.clone();
        }
        match project_dirs() {
            Some(dirs) => dirs.data_dir().to_path_buf(),
            None => {
                log::warn!("Unable to resolve project directory; using current dir for preferences");
                PathBuf::from(".")
            }
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "RustCalendar", "CalendarScheduler")
}

fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}
