//! Scheduler view state.
//!
//! [`SchedulerState`] owns every piece of mutable calendar view state: view
//! mode, selected date, events, filter criteria, dialog/drawer visibility and
//! the persisted time settings. Navigation, filtering and event handlers are
//! split across submodules as further `impl` blocks; derived layout values
//! are pure functions in [`layout`].

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::event::Event;
use crate::models::filter::EventFilter;
use crate::models::settings::TimeSettings;
use crate::models::view_mode::ViewMode;
use crate::services::settings::{PreferenceStore, TimeSettingsService};

mod filter;
mod handlers;
pub mod layout;
mod navigation;
pub mod samples;

pub use filter::{distinct_colors, filter_events};
pub use handlers::{draft_at, draft_start_for, DEFAULT_DRAFT_HOUR};
pub use navigation::step;

/// Edit dialog: closed, or open holding a draft or an event being edited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open(Event),
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        matches!(self, DialogState::Open(_))
    }

    pub fn event(&self) -> Option<&Event> {
        match self {
            DialogState::Open(event) => Some(event),
            DialogState::Closed => None,
        }
    }
}

/// A day and its events staged for the detail drawer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEvents {
    pub date: NaiveDate,
    pub events: Vec<Event>,
}

pub struct SchedulerState<S> {
    view_mode: ViewMode,
    selected_date: NaiveDateTime,
    now: NaiveDateTime,
    events: Vec<Event>,
    events_revision: u64,
    filter: EventFilter,
    filtered: filter::FilterCache,
    dialog: DialogState,
    drawer_open: bool,
    day_events: Option<DayEvents>,
    time_settings: TimeSettings,
    settings_service: TimeSettingsService<S>,
}

impl<S: PreferenceStore> SchedulerState<S> {
    /// Create the state for a freshly opened view, loading time settings from `store`.
    pub fn new(store: S) -> Self {
        Self::with_now(store, Local::now().naive_local())
    }

    /// Create the state with an explicit current time.
    pub fn with_now(store: S, now: NaiveDateTime) -> Self {
        let settings_service = TimeSettingsService::new(store);
        let time_settings = settings_service.load_or_default();

        Self {
            view_mode: ViewMode::default(),
            selected_date: now,
            now,
            events: Vec::new(),
            events_revision: 0,
            filter: EventFilter::default(),
            filtered: filter::FilterCache::default(),
            dialog: DialogState::Closed,
            drawer_open: false,
            day_events: None,
            time_settings,
            settings_service,
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn selected_date(&self) -> NaiveDateTime {
        self.selected_date
    }

    pub fn set_selected_date(&mut self, date: NaiveDateTime) {
        self.selected_date = date;
    }

    /// Current time as of the last refresh
    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn set_now(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
        self.touch_events();
    }

    fn touch_events(&mut self) {
        self.events_revision = self.events_revision.wrapping_add(1);
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    pub fn open_dialog(&mut self, event: Event) {
        self.dialog = DialogState::Open(event);
    }

    pub fn close_dialog(&mut self) {
        self.dialog = DialogState::Closed;
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn set_drawer_open(&mut self, open: bool) {
        self.drawer_open = open;
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn day_events(&self) -> Option<&DayEvents> {
        self.day_events.as_ref()
    }

    pub fn time_settings(&self) -> TimeSettings {
        self.time_settings
    }

    /// Commit new time settings. An empty or inverted hour range is silently
    /// corrected to one hour past the start; the committed value is persisted
    /// and returned.
    pub fn set_time_settings(&mut self, settings: TimeSettings) -> TimeSettings {
        let committed = self.settings_service.persist(settings);
        if committed != settings {
            log::debug!("Time settings adjusted from {:?} to {:?}", settings, committed);
        }
        self.time_settings = committed;
        committed
    }

    pub fn preference_store(&self) -> &S {
        self.settings_service.store()
    }

    // Derived values, recomputed on each call

    pub fn week_start(&self) -> NaiveDate {
        layout::week_start(self.selected_date.date())
    }

    pub fn week_dates(&self) -> [NaiveDate; 7] {
        layout::week_dates(self.selected_date.date())
    }

    pub fn slot_height(&self) -> f32 {
        layout::slot_height(self.time_settings.time_interval)
    }

    pub fn time_slots(&self) -> Vec<NaiveTime> {
        layout::time_slots(&self.time_settings)
    }

    pub fn slot_labels(&self) -> Vec<String> {
        layout::slot_labels(&self.time_settings)
    }

    pub fn header_label(&self) -> String {
        layout::header_label(self.selected_date.date(), self.view_mode)
    }

    pub fn visible_dates(&self) -> Vec<NaiveDate> {
        layout::visible_dates(self.selected_date.date(), self.view_mode)
    }

    /// Filtered events starting inside the visible range
    pub fn visible_events(&mut self) -> Vec<Event> {
        let dates = self.visible_dates();
        self.filtered_events()
            .iter()
            .filter(|event| dates.contains(&event.start.date()))
            .cloned()
            .collect()
    }

    pub fn now_indicator_offset(&self) -> Option<f32> {
        layout::now_indicator_offset(self.now, &self.time_settings)
    }
}
