//! Time-range preference persistence.
//! The storage mechanism is injected through [`PreferenceStore`] so the
//! clamping and fallback policy in [`TimeSettingsService`] stays storage-agnostic.

mod error;
mod service;
mod store;

pub use error::PreferencesError;
pub use service::TimeSettingsService;
pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, TIME_SETTINGS_KEY};

#[cfg(test)]
pub use store::MockPreferenceStore;
