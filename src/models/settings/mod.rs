// Settings module
// Visible hour range and slot granularity of the scheduler grid

use serde::{Deserialize, Serialize};

/// Latest hour a range may start at, leaving room for one visible hour.
pub const MAX_START_HOUR: u32 = 22;
pub const MAX_END_HOUR: u32 = 23;
/// Interval used when the configured one cannot tile an hour.
pub const FALLBACK_INTERVAL: u32 = 60;

/// User time-range preference, persisted as a flat record:
/// `{ "startHour": 7, "endHour": 21, "use24HourFormat": true, "timeInterval": 60 }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSettings {
    #[serde(rename = "startHour")]
    pub start_hour: u32,
    #[serde(rename = "endHour")]
    pub end_hour: u32,
    #[serde(rename = "use24HourFormat")]
    pub use_24_hour_format: bool,
    /// Slot length in minutes
    #[serde(rename = "timeInterval")]
    pub time_interval: u32,
}

impl Default for TimeSettings {
    fn default() -> Self {
        Self {
            start_hour: 7,
            end_hour: 21,
            use_24_hour_format: true,
            time_interval: 60,
        }
    }
}

impl TimeSettings {
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
            ..Self::default()
        }
    }

    /// Apply the write-time clamping policy.
    ///
    /// Never fails: an empty or inverted range gets `end_hour = start_hour + 1`,
    /// and an interval that does not divide an hour falls back to 60 minutes.
    pub fn normalized(self) -> Self {
        let start_hour = self.start_hour.min(MAX_START_HOUR);
        let mut end_hour = self.end_hour.min(MAX_END_HOUR);
        if start_hour >= end_hour {
            end_hour = start_hour + 1;
        }

        let time_interval = if self.is_interval_supported() {
            self.time_interval
        } else {
            FALLBACK_INTERVAL
        };

        Self {
            start_hour,
            end_hour,
            use_24_hour_format: self.use_24_hour_format,
            time_interval,
        }
    }

    /// Whether the settings are already in normalized form
    pub fn is_normalized(&self) -> bool {
        *self == self.normalized()
    }

    fn is_interval_supported(&self) -> bool {
        self.time_interval > 0 && 60 % self.time_interval == 0
    }

    /// Number of visible hours
    pub fn visible_hours(&self) -> u32 {
        self.end_hour.saturating_sub(self.start_hour)
    }
}
