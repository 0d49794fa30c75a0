// Event handlers
// Draft creation, upsert and delete, sample seeding and the day drawer

use std::ops::RangeInclusive;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use uuid::Uuid;

use super::{samples, DayEvents, SchedulerState};
use crate::models::event::Event;
use crate::services::settings::PreferenceStore;

/// Hours at which "add event" anchors the draft on the current hour.
pub const DRAFT_START_HOURS: RangeInclusive<u32> = 7..=21;
pub const DEFAULT_DRAFT_HOUR: u32 = 9;
pub const DRAFT_TITLE: &str = "New Event";

/// One-hour draft starting at `start`. The end saturates at
/// [`NaiveDateTime::MAX`] on the last representable day.
pub fn draft_at(start: NaiveDateTime) -> Event {
    let end = start
        .checked_add_signed(Duration::hours(1))
        .unwrap_or(NaiveDateTime::MAX);
    Event::new(DRAFT_TITLE, start, end)
}

/// Start of the draft created by "add event" at `now`: the top of the
/// current hour when inside the visible window, otherwise 09:00 that day.
pub fn draft_start_for(now: NaiveDateTime) -> NaiveDateTime {
    let hour = if DRAFT_START_HOURS.contains(&now.hour()) {
        now.hour()
    } else {
        DEFAULT_DRAFT_HOUR
    };
    NaiveTime::from_hms_opt(hour, 0, 0)
        .map(|time| now.date().and_time(time))
        .unwrap_or(now)
}

impl<S: PreferenceStore> SchedulerState<S> {
    pub fn handle_add_event(&mut self) {
        self.handle_add_event_at(Local::now().naive_local());
    }

    /// Open the dialog with a one-hour draft anchored on `now`.
    pub fn handle_add_event_at(&mut self, now: NaiveDateTime) {
        self.open_dialog(draft_at(draft_start_for(now)));
    }

    /// Open the dialog with a one-hour draft at the clicked slot.
    pub fn handle_slot_click(&mut self, date: NaiveDate, time: NaiveTime) {
        self.open_dialog(draft_at(date.and_time(time)));
    }

    /// Insert or replace by id, last write wins. Drafts get a fresh id.
    /// Returns the event as stored.
    pub fn handle_event_save(&mut self, mut event: Event) -> Event {
        if event.id.is_none() {
            event.id = Some(Uuid::new_v4().to_string());
        }

        if !event.has_valid_range() {
            log::warn!(
                "Saving event \"{}\" whose end {} precedes its start {}",
                event.title,
                event.end,
                event.start
            );
        }

        let overlapping = self.overlapping_events(&event).len();
        if overlapping > 0 {
            log::warn!(
                "Event \"{}\" overlaps with {} other event(s)",
                event.title,
                overlapping
            );
        }

        match self.events.iter_mut().find(|existing| existing.id == event.id) {
            Some(existing) => {
                log::info!("Updated event {:?}", event.id);
                *existing = event.clone();
            }
            None => {
                log::info!("Added event {:?}", event.id);
                self.events.push(event.clone());
            }
        }
        self.touch_events();

        event
    }

    /// Remove the event with `id`. Unknown ids are ignored.
    pub fn handle_event_delete(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events
            .retain(|event| event.id.as_deref() != Some(id));

        let removed = self.events.len() != before;
        if removed {
            log::info!("Deleted event {}", id);
            self.touch_events();
        } else {
            log::debug!("Delete ignored, no event with id {}", id);
        }
        removed
    }

    pub fn add_sample_events(&mut self) {
        self.add_sample_events_for(Local::now().date_naive());
    }

    /// Replace the event list with the demonstration set around `today`.
    pub fn add_sample_events_for(&mut self, today: NaiveDate) {
        let events = samples::sample_events(today);
        log::info!("Loaded {} sample events", events.len());
        self.set_events(events);
    }

    /// Stage `date` and its events for the day detail drawer.
    pub fn handle_show_day_events(&mut self, date: NaiveDate, events: Vec<Event>) {
        self.day_events = Some(DayEvents { date, events });
        self.drawer_open = true;
    }

    pub fn clear_day_events(&mut self) {
        self.day_events = None;
        self.drawer_open = false;
    }

    /// Events starting on `date`, in list order
    pub fn events_on(&self, date: NaiveDate) -> Vec<Event> {
        self.events
            .iter()
            .filter(|event| event.is_on(date))
            .cloned()
            .collect()
    }

    /// Other events whose time range intersects `event`
    pub fn overlapping_events(&self, event: &Event) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|other| event.id.is_none() || other.id != event.id)
            .filter(|other| other.overlaps(event))
            .collect()
    }
}
