// Event module
// Calendar event held by the scheduler state

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Color tag given to events created without one.
pub const DEFAULT_EVENT_COLOR: &str = "blue";

/// Calendar event shown in the scheduler.
///
/// Times are local wall-clock timestamps. An event without an `id` is a
/// draft that has not been saved into the event list yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Option<String>,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Categorical tag used both for display and for filtering
    pub color: String,
}

impl Event {
    /// Create a new draft event with the default color
    ///
    /// # Examples
    /// ```
    /// use calendar_scheduler::models::event::Event;
    /// use chrono::{Duration, NaiveDate};
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 3, 10)
    ///     .unwrap()
    ///     .and_hms_opt(9, 0, 0)
    ///     .unwrap();
    /// let event = Event::new("Team Meeting", start, start + Duration::hours(1));
    /// assert!(event.is_draft());
    /// ```
    pub fn new(title: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: None,
            title: title.into(),
            start,
            end,
            color: DEFAULT_EVENT_COLOR.to_string(),
        }
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Whether this event has not been saved yet
    pub fn is_draft(&self) -> bool {
        self.id.is_none()
    }

    /// Whether the event ends at or after its start.
    ///
    /// Not enforced anywhere; callers may hold inverted events.
    pub fn has_valid_range(&self) -> bool {
        self.end >= self.start
    }

    /// Get the duration of the event
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether the event starts on the given calendar day
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.start.date() == date
    }

    /// Events overlap if one starts before the other ends
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Builder for creating events with optional fields
#[derive(Debug, Default)]
pub struct EventBuilder {
    id: Option<String>,
    title: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    color: Option<String>,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the event identifier
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the start time
    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end time
    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the color tag
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let title = self.title.ok_or("Event title is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;

        Ok(Event {
            id: self.id,
            title,
            start,
            end,
            color: self
                .color
                .unwrap_or_else(|| DEFAULT_EVENT_COLOR.to_string()),
        })
    }
}
