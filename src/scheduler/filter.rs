// Filtering
// Search, date and color criteria with a memoized result

use std::collections::HashSet;

use chrono::NaiveDate;

use super::SchedulerState;
use crate::models::event::Event;
use crate::models::filter::{ColorFilter, EventFilter};
use crate::services::settings::PreferenceStore;

/// Events passing `filter`, in list order. The source list is not touched.
pub fn filter_events(events: &[Event], filter: &EventFilter) -> Vec<Event> {
    events
        .iter()
        .filter(|event| filter.matches(event))
        .cloned()
        .collect()
}

/// Distinct color tags across `events`, in first-seen order.
pub fn distinct_colors(events: &[Event]) -> Vec<String> {
    let mut seen = HashSet::new();
    events
        .iter()
        .filter(|event| seen.insert(event.color.as_str()))
        .map(|event| event.color.clone())
        .collect()
}

/// Memoized filter result keyed by event list revision and criteria.
#[derive(Debug, Default)]
pub(super) struct FilterCache {
    key: Option<(u64, EventFilter)>,
    events: Vec<Event>,
    computations: usize,
}

impl FilterCache {
    fn get_or_compute(&mut self, revision: u64, events: &[Event], filter: &EventFilter) -> &[Event] {
        let fresh = matches!(&self.key, Some((rev, cached)) if *rev == revision && cached == filter);
        if !fresh {
            self.events = filter_events(events, filter);
            self.key = Some((revision, filter.clone()));
            self.computations += 1;
            log::debug!(
                "Recomputed filtered events: {} of {}",
                self.events.len(),
                events.len()
            );
        }
        &self.events
    }
}

impl<S: PreferenceStore> SchedulerState<S> {
    pub fn search_query(&self) -> &str {
        &self.filter.search
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.search = query.into();
    }

    pub fn date_filter(&self) -> Option<NaiveDate> {
        self.filter.date
    }

    pub fn set_date_filter(&mut self, date: Option<NaiveDate>) {
        self.filter.date = date;
    }

    pub fn color_filter(&self) -> &ColorFilter {
        &self.filter.color
    }

    pub fn set_color_filter(&mut self, color: ColorFilter) {
        self.filter.color = color;
    }

    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    /// Events passing the current criteria. Only recomputed after the event
    /// list or a criterion changed.
    pub fn filtered_events(&mut self) -> &[Event] {
        self.filtered
            .get_or_compute(self.events_revision, &self.events, &self.filter)
    }

    /// Colors present in the unfiltered event list, for the filter control
    pub fn event_colors(&self) -> Vec<String> {
        distinct_colors(&self.events)
    }
}
