// Navigation
// Previous, next and today for the selected date

use chrono::{Duration, Local, NaiveDateTime};

use super::SchedulerState;
use crate::models::view_mode::ViewMode;
use crate::services::settings::PreferenceStore;
use crate::utils::date::shift_months;

/// Move `date` one view-mode step forwards or backwards, keeping the time of day.
/// Returns `None` if the result would leave chrono's supported range.
pub fn step(date: NaiveDateTime, mode: ViewMode, forward: bool) -> Option<NaiveDateTime> {
    let sign = if forward { 1 } else { -1 };
    match mode {
        ViewMode::Day => date.checked_add_signed(Duration::days(sign)),
        ViewMode::Week => date.checked_add_signed(Duration::weeks(sign)),
        ViewMode::Month => shift_months(date, sign as i32),
    }
}

impl<S: PreferenceStore> SchedulerState<S> {
    pub fn go_prev(&mut self) {
        self.navigate(false);
    }

    pub fn go_next(&mut self) {
        self.navigate(true);
    }

    fn navigate(&mut self, forward: bool) {
        match step(self.selected_date, self.view_mode, forward) {
            Some(date) => {
                log::debug!("Navigated {} to {}", self.view_mode, date);
                self.selected_date = date;
            }
            None => log::warn!(
                "Cannot navigate {} past {}",
                self.view_mode,
                self.selected_date
            ),
        }
    }

    pub fn go_today(&mut self) {
        self.go_today_at(Local::now().naive_local());
    }

    /// Reset the selected date to `now`, also refreshing the "now" marker.
    pub fn go_today_at(&mut self, now: NaiveDateTime) {
        self.now = now;
        self.selected_date = now;
    }
}
