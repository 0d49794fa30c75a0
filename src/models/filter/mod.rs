// Filter criteria
// Transient search/date/color criteria applied to the event list

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use crate::models::event::Event;

/// Sentinel accepted by the color filter control meaning "no color filter".
pub const ALL_COLORS: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ColorFilter {
    #[default]
    All,
    Only(String),
}

impl ColorFilter {
    pub fn matches(&self, color: &str) -> bool {
        match self {
            ColorFilter::All => true,
            ColorFilter::Only(wanted) => wanted == color,
        }
    }
}

impl fmt::Display for ColorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorFilter::All => f.write_str(ALL_COLORS),
            ColorFilter::Only(color) => f.write_str(color),
        }
    }
}

impl FromStr for ColorFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_COLORS {
            Ok(ColorFilter::All)
        } else {
            Ok(ColorFilter::Only(s.to_string()))
        }
    }
}

/// Criteria combined with AND when deciding whether an event is shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct EventFilter {
    pub search: String,
    pub date: Option<NaiveDate>,
    pub color: ColorFilter,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        self.matches_search(&event.title)
            && self.date.is_none_or(|date| event.is_on(date))
            && self.color.matches(&event.color)
    }

    fn matches_search(&self, title: &str) -> bool {
        if self.search.is_empty() {
            return true;
        }
        title
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }

    /// Reset to empty search, no date and all colors
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }
}
