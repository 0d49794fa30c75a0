// Property-based tests for filtering, navigation and event upserts
// Exercises the scheduler with random event lists and dates

use std::collections::BTreeSet;

use calendar_scheduler::models::event::Event;
use calendar_scheduler::models::filter::{ColorFilter, EventFilter};
use calendar_scheduler::models::settings::TimeSettings;
use calendar_scheduler::models::view_mode::ViewMode;
use calendar_scheduler::scheduler::{distinct_colors, filter_events, layout, step};
use calendar_scheduler::services::settings::MemoryPreferenceStore;
use calendar_scheduler::SchedulerState;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

const COLORS: &[&str] = &["blue", "green", "red", "purple", "orange"];
const WORDS: &[&str] = &["Standup", "Review", "Lunch", "Planning", "Retro", "Sync"];

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn arb_event() -> impl Strategy<Value = Event> {
    (
        0..1000u32,
        0..WORDS.len(),
        0..COLORS.len(),
        0..(14 * 24 * 4i64),
        1..16i64,
    )
        .prop_map(|(id, word, color, quarter, len)| {
            let start = base() + Duration::minutes(quarter * 15);
            Event::builder()
                .id(format!("e{id}"))
                .title(WORDS[word])
                .start(start)
                .end(start + Duration::minutes(len * 15))
                .color(COLORS[color])
                .build()
                .unwrap()
        })
}

fn arb_filter() -> impl Strategy<Value = EventFilter> {
    (
        prop::sample::select(vec!["", "st", "RE", "lunch", "xyz"]),
        prop::option::of(0..14i64),
        prop::option::of(0..COLORS.len()),
    )
        .prop_map(|(search, day, color)| EventFilter {
            search: search.to_string(),
            date: day.map(|d| base().date() + Duration::days(d)),
            color: match color {
                Some(i) => ColorFilter::Only(COLORS[i].to_string()),
                None => ColorFilter::All,
            },
        })
}

fn arb_datetime() -> impl Strategy<Value = NaiveDateTime> {
    (1990..2060i32, 1..=12u32, 1..=31u32, 0..24u32, 0..60u32).prop_filter_map(
        "valid calendar date",
        |(y, m, d, h, min)| NaiveDate::from_ymd_opt(y, m, d)?.and_hms_opt(h, min, 0),
    )
}

fn state_with(events: Vec<Event>) -> SchedulerState<MemoryPreferenceStore> {
    let mut state = SchedulerState::with_now(MemoryPreferenceStore::new(), base());
    state.set_events(events);
    state
}

proptest! {
    /// Property: filtering an already filtered list changes nothing
    #[test]
    fn prop_filtering_is_idempotent(
        events in prop::collection::vec(arb_event(), 0..40),
        filter in arb_filter(),
    ) {
        let once = filter_events(&events, &filter);
        let twice = filter_events(&once, &filter);
        prop_assert_eq!(once, twice);
    }

    /// Property: the color set reflects the unfiltered list whatever the filters
    #[test]
    fn prop_color_set_ignores_filters(
        events in prop::collection::vec(arb_event(), 0..40),
        filter in arb_filter(),
    ) {
        let expected: BTreeSet<String> = events.iter().map(|e| e.color.clone()).collect();

        let mut state = state_with(events);
        state.set_search_query(filter.search.clone());
        state.set_date_filter(filter.date);
        state.set_color_filter(filter.color.clone());
        state.filtered_events();

        let colors = state.event_colors();
        let as_set: BTreeSet<String> = colors.iter().cloned().collect();
        prop_assert_eq!(as_set.len(), colors.len());
        prop_assert_eq!(as_set, expected);
        prop_assert_eq!(distinct_colors(state.events()), colors);
    }

    /// Property: every filtered event satisfies every criterion
    #[test]
    fn prop_filtered_events_match(
        events in prop::collection::vec(arb_event(), 0..40),
        filter in arb_filter(),
    ) {
        for event in filter_events(&events, &filter) {
            prop_assert!(filter.matches(&event));
        }
    }

    /// Property: next then prev is the identity in day and week mode
    #[test]
    fn prop_day_and_week_round_trip(date in arb_datetime()) {
        for mode in [ViewMode::Day, ViewMode::Week] {
            let there = step(date, mode, true).unwrap();
            prop_assert_eq!(step(there, mode, false), Some(date));
        }
    }

    /// Property: month round trip is exact unless the day had to be clamped
    #[test]
    fn prop_month_round_trip(date in arb_datetime()) {
        let there = step(date, ViewMode::Month, true).unwrap();
        let back = step(there, ViewMode::Month, false).unwrap();

        prop_assert_eq!(back.time(), date.time());
        if date.day() <= 28 {
            prop_assert_eq!(back, date);
        } else {
            prop_assert!(back.day() <= date.day());
        }
    }

    /// Property: saving an existing id replaces, a novel id appends
    #[test]
    fn prop_save_upserts_by_id(
        events in prop::collection::vec(arb_event(), 1..20),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut unique = Vec::new();
        for event in events {
            if !unique.iter().any(|e: &Event| e.id == event.id) {
                unique.push(event);
            }
        }
        let mut state = state_with(unique.clone());

        let mut edited = pick.get(&unique).clone();
        edited.title = "Edited".to_string();
        state.handle_event_save(edited.clone());
        prop_assert_eq!(state.events().len(), unique.len());
        prop_assert!(state.events().contains(&edited));

        let mut novel = edited.clone();
        novel.id = Some("novel".to_string());
        state.handle_event_save(novel);
        prop_assert_eq!(state.events().len(), unique.len() + 1);
    }

    /// Property: deleting an id that is not present leaves the list alone
    #[test]
    fn prop_delete_unknown_is_noop(events in prop::collection::vec(arb_event(), 0..20)) {
        let mut state = state_with(events.clone());
        prop_assert!(!state.handle_event_delete("missing"));
        prop_assert_eq!(state.events(), events.as_slice());
    }

    /// Property: committed time settings always describe a non-empty range
    #[test]
    fn prop_time_settings_always_valid(
        start in 0..40u32,
        end in 0..40u32,
        interval in 0..120u32,
        use_24 in any::<bool>(),
    ) {
        let mut state = state_with(Vec::new());
        let committed = state.set_time_settings(TimeSettings {
            start_hour: start,
            end_hour: end,
            use_24_hour_format: use_24,
            time_interval: interval,
        });

        prop_assert!(committed.start_hour < committed.end_hour);
        prop_assert!(committed.end_hour <= 23);
        prop_assert!(committed.time_interval > 0 && 60 % committed.time_interval == 0);
        if start < end && end <= 23 {
            prop_assert_eq!(committed.start_hour, start);
            prop_assert_eq!(committed.end_hour, end);
        }

        let labels = layout::slot_labels(&committed);
        let per_hour = (60 / committed.time_interval) as usize;
        prop_assert_eq!(labels.len(), committed.visible_hours() as usize * per_hour + 1);
    }
}
