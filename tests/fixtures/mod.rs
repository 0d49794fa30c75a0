// Test fixtures - reusable test data
// Provides consistent test data across all test files

#![allow(dead_code)]

use calendar_scheduler::models::event::Event;
use chrono::{NaiveDate, NaiveDateTime};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Wednesday Mar 12, 2025 at 10:15
    pub fn mid_week() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 12)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap()
    }

    /// Returns Jan 31, 2025 at 09:00 (month end)
    pub fn jan_31_2025() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 31)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;
    use chrono::Duration;

    pub fn saved(id: &str, title: &str, start: NaiveDateTime, color: &str) -> Event {
        Event::builder()
            .id(id)
            .title(title)
            .start(start)
            .end(start + Duration::hours(1))
            .color(color)
            .build()
            .unwrap()
    }

    /// A small mixed list around [`dates::mid_week`]
    pub fn week_of_meetings() -> Vec<Event> {
        let base = super::dates::mid_week();
        vec![
            saved("m1", "Standup", base, "blue"),
            saved("m2", "Design review", base + Duration::minutes(30), "purple"),
            saved("m3", "Standup", base + Duration::days(1), "blue"),
            saved("m4", "Dentist", base + Duration::days(2), "red"),
        ]
    }
}
