// Date utility functions

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
///
/// At the start of chrono's range, where the week start does not exist,
/// the date itself is returned.
pub fn get_week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64 + 7) % 7;
    date.checked_sub_signed(Duration::days(offset))
        .unwrap_or(date)
}

/// Shift by whole months keeping the time of day. The day is clamped to the
/// length of the target month. Returns `None` past chrono's supported range.
pub fn shift_months(current: NaiveDateTime, delta_months: i32) -> Option<NaiveDateTime> {
    let date = current.date();
    let total_months = (date.year() * 12) + (date.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) as u32 + 1;
    let day = date.day().min(last_day_of_month(new_year, new_month)?);
    NaiveDate::from_ymd_opt(new_year, new_month, day).map(|d| d.and_time(current.time()))
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    first_of_next.pred_opt().map(|d| d.day())
}
