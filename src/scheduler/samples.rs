//! Demonstration events. Several ranges overlap on purpose so overlap
//! rendering has something to lay out.

use chrono::{Duration, NaiveDate};

use crate::models::event::Event;

// (id, title, day offset from today, start h, start m, end h, end m, color)
const SAMPLES: &[(&str, &str, i64, u32, u32, u32, u32, &str)] = &[
    ("sample-1", "Morning Standup", 0, 9, 0, 9, 30, "blue"),
    ("sample-2", "Design Review", 0, 9, 15, 10, 30, "purple"),
    ("sample-3", "Client Call", 0, 10, 0, 11, 0, "green"),
    ("sample-4", "Lunch with Team", 0, 12, 30, 13, 30, "orange"),
    ("sample-5", "Code Review", 1, 10, 0, 11, 0, "blue"),
    ("sample-6", "Sprint Planning", 1, 10, 30, 12, 0, "red"),
    ("sample-7", "1-on-1 with Manager", -1, 11, 0, 11, 30, "purple"),
    ("sample-8", "Quarterly Report", 2, 14, 0, 17, 0, "green"),
    ("sample-9", "Budget Sync", 2, 15, 0, 16, 0, "orange"),
];

pub fn sample_events(today: NaiveDate) -> Vec<Event> {
    SAMPLES
        .iter()
        .filter_map(
            |&(id, title, offset, start_h, start_m, end_h, end_m, color)| {
                let date = today.checked_add_signed(Duration::days(offset))?;
                Some(Event {
                    id: Some(id.to_string()),
                    title: title.to_string(),
                    start: date.and_hms_opt(start_h, start_m, 0)?,
                    end: date.and_hms_opt(end_h, end_m, 0)?,
                    color: color.to_string(),
                })
            },
        )
        .collect()
}
