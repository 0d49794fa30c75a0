//! Pure layout values derived from the selected date, view mode and time settings.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::models::settings::TimeSettings;
use crate::models::view_mode::ViewMode;
use crate::utils::date::{get_week_start, last_day_of_month};

/// Weeks start on Sunday (weekday index 0).
pub const FIRST_DAY_OF_WEEK: u8 = 0;
/// Height of one hour of grid, in layout units.
pub const HOUR_HEIGHT: f32 = 64.0;
pub const MIN_SLOT_HEIGHT: f32 = 32.0;

pub fn week_start(date: NaiveDate) -> NaiveDate {
    get_week_start(date, FIRST_DAY_OF_WEEK)
}

/// The seven days of the week containing `date`. Days past the end of
/// chrono's range saturate at [`NaiveDate::MAX`].
pub fn week_dates(date: NaiveDate) -> [NaiveDate; 7] {
    let start = week_start(date);
    std::array::from_fn(|offset| days_after(start, offset as i64))
}

fn days_after(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(NaiveDate::MAX)
}

/// Dates covered by the view: the day, its Sunday-based week, or its whole month.
pub fn visible_dates(date: NaiveDate, mode: ViewMode) -> Vec<NaiveDate> {
    match mode {
        ViewMode::Day => vec![date],
        ViewMode::Week => week_dates(date).to_vec(),
        ViewMode::Month => {
            let days = last_day_of_month(date.year(), date.month()).unwrap_or(28);
            (1..=days)
                .filter_map(|day| date.with_day(day))
                .collect()
        }
    }
}

/// Height of one slot, proportional to its length and never below [`MIN_SLOT_HEIGHT`].
pub fn slot_height(time_interval: u32) -> f32 {
    (time_interval as f32 * HOUR_HEIGHT / 60.0).max(MIN_SLOT_HEIGHT)
}

/// Slot start times from `start_hour:00` through `end_hour:00` inclusive.
pub fn time_slots(settings: &TimeSettings) -> Vec<NaiveTime> {
    let settings = settings.normalized();
    let first = settings.start_hour * 60;
    let last = settings.end_hour * 60;

    (first..=last)
        .step_by(settings.time_interval as usize)
        .filter_map(|minutes| NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0))
        .collect()
}

pub fn slot_labels(settings: &TimeSettings) -> Vec<String> {
    time_slots(settings)
        .into_iter()
        .map(|time| format_slot_label(time, settings.use_24_hour_format))
        .collect()
}

/// `"07:30"` in 24-hour mode; `"7:30 AM"` or `"7 AM"` in 12-hour mode.
pub fn format_slot_label(time: NaiveTime, use_24_hour_format: bool) -> String {
    if use_24_hour_format {
        return format!("{:02}:{:02}", time.hour(), time.minute());
    }

    let (is_pm, hour) = time.hour12();
    let suffix = if is_pm { "PM" } else { "AM" };
    match time.minute() {
        0 => format!("{hour} {suffix}"),
        minute => format!("{hour}:{minute:02} {suffix}"),
    }
}

/// Title shown above the grid for the visible range.
pub fn header_label(date: NaiveDate, mode: ViewMode) -> String {
    match mode {
        ViewMode::Day => date.format("%A, %B %-d, %Y").to_string(),
        ViewMode::Week => {
            let start = week_start(date);
            let end = days_after(start, 6);
            format!(
                "{} – {}, {}",
                start.format("%b %-d"),
                end.format("%b %-d"),
                end.year()
            )
        }
        ViewMode::Month => date.format("%B %Y").to_string(),
    }
}

/// Vertical position of `now` within the visible hours, in layout units.
/// `None` when the time falls outside `start_hour..=end_hour`.
pub fn now_indicator_offset(now: NaiveDateTime, settings: &TimeSettings) -> Option<f32> {
    let settings = settings.normalized();
    let minutes = now.hour() * 60 + now.minute();
    let first = settings.start_hour * 60;
    let last = settings.end_hour * 60;
    if minutes < first || minutes > last {
        return None;
    }

    let slots = (minutes - first) as f32 / settings.time_interval as f32;
    Some(slots * slot_height(settings.time_interval))
}
