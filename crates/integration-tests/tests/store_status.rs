//! Open/closed indicator evaluated at real instants.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use chrono::{TimeZone, Utc};
use padoca_core::store_hours::DEFAULT_TIMEZONE;
use padoca_core::{StoreHours, StoreStatus};

fn hours(open: &str, close: &str, is_open_today: bool) -> StoreHours {
    padoca_core::forms::store_hours_input(open, close, is_open_today).unwrap()
}

#[test]
fn test_sao_paulo_business_hours() {
    let hours = hours("08:00", "22:00", true);

    // 13:30 UTC is 10:30 in São Paulo (UTC-3).
    let morning = Utc.with_ymd_and_hms(2025, 3, 10, 13, 30, 0).unwrap();
    assert_eq!(
        StoreStatus::at_instant(Some(&hours), morning, DEFAULT_TIMEZONE),
        StoreStatus::Open
    );

    // 01:30 UTC is 22:30 the previous evening.
    let late = Utc.with_ymd_and_hms(2025, 3, 11, 1, 30, 0).unwrap();
    assert_eq!(
        StoreStatus::at_instant(Some(&hours), late, DEFAULT_TIMEZONE),
        StoreStatus::Closed
    );
}

#[test]
fn test_close_time_is_exclusive() {
    let hours = hours("08:00", "22:00", true);
    // 01:00 UTC is exactly 22:00 in São Paulo.
    let closing = Utc.with_ymd_and_hms(2025, 3, 11, 1, 0, 0).unwrap();
    assert!(!hours.is_open_at_instant(closing, DEFAULT_TIMEZONE));

    // 11:00 UTC is exactly 08:00.
    let opening = Utc.with_ymd_and_hms(2025, 3, 10, 11, 0, 0).unwrap();
    assert!(hours.is_open_at_instant(opening, DEFAULT_TIMEZONE));
}

#[test]
fn test_closed_today_overrides_hours() {
    let hours = hours("00:00", "23:59", false);
    let noon = Utc.with_ymd_and_hms(2025, 3, 10, 15, 0, 0).unwrap();
    let status = StoreStatus::at_instant(Some(&hours), noon, DEFAULT_TIMEZONE);
    assert_eq!(status, StoreStatus::Closed);
    assert_eq!(status.to_string(), "Fechado");
}

#[test]
fn test_missing_hours_show_open() {
    let midnight = Utc.with_ymd_and_hms(2025, 3, 10, 3, 0, 0).unwrap();
    let status = StoreStatus::at_instant(None, midnight, DEFAULT_TIMEZONE);
    assert!(status.is_open());
    assert_eq!(status.label(), "Aberto");
}

#[test]
fn test_timezone_changes_the_answer() {
    let hours = hours("08:00", "22:00", true);
    // 09:00 UTC: 06:00 in São Paulo, 10:00 in Lisbon summer time.
    let instant = Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap();
    assert!(!hours.is_open_at_instant(instant, DEFAULT_TIMEZONE));
    assert!(hours.is_open_at_instant(instant, chrono_tz::Europe::Lisbon));
}

#[test]
fn test_saved_hours_json_shape() {
    let hours = hours("07:30", "19:00", true);
    let json = serde_json::to_value(hours).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "openTime": "07:30",
            "closeTime": "19:00",
            "isOpenToday": true
        })
    );
}
