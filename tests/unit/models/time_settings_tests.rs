// Unit tests for the TimeSettings clamping policy
// Each case is (input start, input end, interval) -> (stored start, stored end, interval)

use calendar_scheduler::models::settings::TimeSettings;
use test_case::test_case;

fn settings(start_hour: u32, end_hour: u32, time_interval: u32) -> TimeSettings {
    TimeSettings {
        start_hour,
        end_hour,
        use_24_hour_format: true,
        time_interval,
    }
}

#[test_case(7, 21, 60 => (7, 21, 60) ; "defaults untouched")]
#[test_case(10, 9, 60 => (10, 11, 60) ; "inverted range bumps end")]
#[test_case(12, 12, 60 => (12, 13, 60) ; "empty range bumps end")]
#[test_case(0, 23, 60 => (0, 23, 60) ; "full day")]
#[test_case(23, 23, 60 => (22, 23, 60) ; "start past last slot")]
#[test_case(5, 30, 60 => (5, 23, 60) ; "end past midnight")]
#[test_case(8, 17, 15 => (8, 17, 15) ; "quarter hours")]
#[test_case(8, 17, 0 => (8, 17, 60) ; "zero interval")]
#[test_case(8, 17, 45 => (8, 17, 60) ; "interval not dividing an hour")]
#[test_case(8, 17, 90 => (8, 17, 60) ; "interval longer than an hour")]
fn test_normalized(start: u32, end: u32, interval: u32) -> (u32, u32, u32) {
    let normalized = settings(start, end, interval).normalized();
    (normalized.start_hour, normalized.end_hour, normalized.time_interval)
}

#[test]
fn test_normalized_keeps_format_flag() {
    let mut input = settings(10, 9, 60);
    input.use_24_hour_format = false;
    assert!(!input.normalized().use_24_hour_format);
}

#[test]
fn test_normalized_is_idempotent() {
    for start in 0..30 {
        for end in 0..30 {
            let once = settings(start, end, 30).normalized();
            assert_eq!(once.normalized(), once, "start={start} end={end}");
            assert!(once.is_normalized());
        }
    }
}

#[test]
fn test_deserializes_stored_record() {
    let raw = r#"{"startHour":6,"endHour":22,"use24HourFormat":false,"timeInterval":20}"#;
    let parsed: TimeSettings = serde_json::from_str(raw).unwrap();
    assert_eq!(
        parsed,
        TimeSettings {
            start_hour: 6,
            end_hour: 22,
            use_24_hour_format: false,
            time_interval: 20,
        }
    );
}

#[test]
fn test_missing_fields_are_malformed() {
    let raw = r#"{"startHour":6}"#;
    assert!(serde_json::from_str::<TimeSettings>(raw).is_err());
}
