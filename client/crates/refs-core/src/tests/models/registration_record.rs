use crate::RegistrationRecord;

use chrono::{FixedOffset, Local, Utc};

fn record(created_at: &str) -> RegistrationRecord {
    RegistrationRecord {
        id: "1".to_string(),
        email: "a@b.com".to_string(),
        created_at: created_at.to_string(),
    }
}

#[test]
fn test_deserialize_camel_case_wire_format() {
    let json = r#"{"id":"1","email":"a@b.com","createdAt":"2024-01-01T00:00:00Z"}"#;
    let parsed: RegistrationRecord = serde_json::from_str(json).unwrap();

    assert_eq!(parsed, record("2024-01-01T00:00:00Z"));
}

#[test]
fn test_deserialize_missing_created_at_fails() {
    let json = r#"{"id":"1","email":"a@b.com"}"#;
    assert!(serde_json::from_str::<RegistrationRecord>(json).is_err());
}

#[test]
fn test_created_at_rfc3339_with_offset_normalized_to_utc() {
    let parsed = record("2024-01-01T02:00:00+02:00").created_at_utc().unwrap();
    assert_eq!(parsed.to_rfc3339(), "2024-01-01T00:00:00+00:00");
}

#[test]
fn test_created_at_zoneless_with_fraction_read_as_local_time() {
    let parsed = record("2024-03-05T10:15:30.123456").created_at_utc().unwrap();
    assert_eq!(
        parsed
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        "2024-03-05 10:15:30"
    );
}

#[test]
fn test_created_at_zoneless_without_fraction_parsed() {
    assert!(record("2024-03-05T10:15:30").created_at_utc().is_some());
}

#[test]
fn test_created_at_garbage_is_none() {
    assert!(record("yesterday").created_at_utc().is_none());
}

#[test]
fn test_format_in_utc() {
    let formatted = record("2024-01-01T00:00:00Z").format_created_at_in(&Utc, "%Y-%m-%d %H:%M");
    assert_eq!(formatted, "2024-01-01 00:00");
}

#[test]
fn test_format_in_fixed_offset_shifts_wall_clock() {
    let tz = FixedOffset::west_opt(5 * 3600).unwrap();
    let formatted = record("2024-01-01T00:00:00Z").format_created_at_in(&tz, "%Y-%m-%d %H:%M");
    assert_eq!(formatted, "2023-12-31 19:00");
}

#[test]
fn test_format_zoneless_keeps_wall_clock_in_fixed_offset() {
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();
    let formatted = record("2024-03-05T10:15:30").format_created_at_in(&tz, "%H:%M");
    assert_eq!(formatted, "10:15");
}

#[test]
fn test_format_zoneless_keeps_wall_clock_west_of_utc() {
    let tz = FixedOffset::west_opt(5 * 3600).unwrap();
    let formatted =
        record("2024-03-05T23:59:00.5").format_created_at_in(&tz, "%Y-%m-%d %H:%M");
    assert_eq!(formatted, "2024-03-05 23:59");
}

#[test]
fn test_format_local_zoneless_unchanged() {
    let formatted = record("2024-03-05T10:15:30").format_created_at("%Y-%m-%d %H:%M:%S");
    assert_eq!(formatted, "2024-03-05 10:15:30");
}

#[test]
fn test_format_unparseable_falls_back_to_raw() {
    let formatted = record("not a date").format_created_at_in(&Utc, "%Y");
    assert_eq!(formatted, "not a date");
}

#[test]
fn test_format_invalid_pattern_falls_back_to_raw() {
    let formatted = record("2024-01-01T00:00:00Z").format_created_at_in(&Utc, "%Y-%");
    assert_eq!(formatted, "2024-01-01T00:00:00Z");
}

#[test]
fn test_format_local_is_not_raw_for_valid_timestamp() {
    let formatted = record("2024-06-15T12:00:00Z").format_created_at("%Y-%m-%d");
    assert!(formatted.starts_with("2024-06-1"));
}
