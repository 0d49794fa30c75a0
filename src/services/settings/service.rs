use crate::models::settings::TimeSettings;

use super::{PreferenceStore, PreferencesError};

/// Applies the fallback and clamping policy on top of a [`PreferenceStore`].
pub struct TimeSettingsService<S> {
    store: S,
}

impl<S: PreferenceStore> TimeSettingsService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the stored settings, falling back to defaults when the record is
    /// missing or unreadable. Never fails.
    pub fn load_or_default(&self) -> TimeSettings {
        match self.store.load() {
            Ok(settings) => settings.normalized(),
            Err(PreferencesError::Missing) => {
                log::debug!("No stored time settings, using defaults");
                TimeSettings::default()
            }
            Err(e) => {
                log::warn!("Failed to load time settings: {}, using defaults", e);
                TimeSettings::default()
            }
        }
    }

    /// Normalize and persist. Persistence failures are logged and swallowed;
    /// the normalized value is returned either way.
    pub fn persist(&self, settings: TimeSettings) -> TimeSettings {
        let settings = settings.normalized();
        if let Err(e) = self.store.save(&settings) {
            log::error!("Failed to persist time settings: {}", e);
        }
        settings
    }
}
