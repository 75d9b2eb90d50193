//! Store-hours evaluation.
//!
//! The `store_hours` settings record holds an opening time, a closing time,
//! and a manual "open today" switch. Whether the store is open is a pure
//! function of that record and the current wall-clock time in the store's
//! timezone:
//!
//! - closed whenever `is_open_today` is false;
//! - otherwise open iff `open <= now < close`, compared in minutes since
//!   local midnight. There is no wrap past midnight, so a record with
//!   `open >= close` is always closed.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings key under which store hours are persisted.
pub const STORE_HOURS_KEY: &str = "store_hours";

/// Timezone the bakery operates in.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Sao_Paulo;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// Errors when parsing an `"HH:MM"` time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("expected HH:MM, got {0:?}")]
    Format(String),
    #[error("time out of range: {0:?}")]
    OutOfRange(String),
}

/// A wall-clock time of day, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Build a time from hours and minutes.
    ///
    /// Returns `None` if `hour > 23` or `minute > 59`.
    #[must_use]
    pub const fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(hour * 60 + minute))
        } else {
            None
        }
    }

    /// Minutes since midnight.
    #[must_use]
    pub const fn minutes(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    #[must_use]
    pub const fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (h, m) = trimmed
            .split_once(':')
            .ok_or_else(|| TimeParseError::Format(trimmed.to_string()))?;

        // <input type="time"> may send seconds ("08:00:00"); ignore them.
        let m = m.split(':').next().unwrap_or(m);

        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(TimeParseError::Format(trimmed.to_string()));
        }

        let hour: u16 = h
            .parse()
            .map_err(|_| TimeParseError::Format(trimmed.to_string()))?;
        let minute: u16 = m
            .parse()
            .map_err(|_| TimeParseError::Format(trimmed.to_string()))?;

        Self::from_hm(hour, minute).ok_or_else(|| TimeParseError::OutOfRange(trimmed.to_string()))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// The persisted store-hours configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreHours {
    pub open_time: TimeOfDay,
    pub close_time: TimeOfDay,
    pub is_open_today: bool,
}

impl Default for StoreHours {
    fn default() -> Self {
        Self {
            open_time: TimeOfDay(8 * 60),
            close_time: TimeOfDay(22 * 60),
            is_open_today: true,
        }
    }
}

impl StoreHours {
    /// Whether the store is open at `now_minutes` minutes past local midnight.
    #[must_use]
    pub const fn is_open_at(&self, now_minutes: u16) -> bool {
        self.is_open_today
            && self.open_time.0 <= now_minutes
            && now_minutes < self.close_time.0
    }

    /// Whether the store is open at the given instant in timezone `tz`.
    #[must_use]
    pub fn is_open_at_instant(&self, now: DateTime<Utc>, tz: Tz) -> bool {
        self.is_open_at(local_minutes(now, tz))
    }
}

/// Minutes since local midnight for `now` in `tz`.
#[must_use]
pub fn local_minutes(now: DateTime<Utc>, tz: Tz) -> u16 {
    let local = now.with_timezone(&tz);
    #[allow(clippy::cast_possible_truncation)] // hour < 24, minute < 60
    let minutes = (local.hour() * 60 + local.minute()) as u16;
    minutes % MINUTES_PER_DAY
}

/// Open/closed indicator shown in the storefront header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreStatus {
    Open,
    Closed,
}

impl StoreStatus {
    /// Evaluate the status for an optional configuration record.
    ///
    /// A store that has never saved its hours is shown as open.
    #[must_use]
    pub const fn evaluate(hours: Option<&StoreHours>, now_minutes: u16) -> Self {
        match hours {
            Some(hours) if !hours.is_open_at(now_minutes) => Self::Closed,
            _ => Self::Open,
        }
    }

    /// Evaluate the status at an instant in timezone `tz`.
    #[must_use]
    pub fn at_instant(hours: Option<&StoreHours>, now: DateTime<Utc>, tz: Tz) -> Self {
        Self::evaluate(hours, local_minutes(now, tz))
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Customer-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Aberto",
            Self::Closed => "Fechado",
        }
    }
}

impl fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn hours(open: &str, close: &str, is_open_today: bool) -> StoreHours {
        StoreHours {
            open_time: open.parse().unwrap(),
            close_time: close.parse().unwrap(),
            is_open_today,
        }
    }

    fn at(h: u16, m: u16) -> u16 {
        TimeOfDay::from_hm(h, m).unwrap().minutes()
    }

    #[test]
    fn test_parse_time_of_day() {
        assert_eq!("08:00".parse::<TimeOfDay>().unwrap().minutes(), 480);
        assert_eq!("8:05".parse::<TimeOfDay>().unwrap().minutes(), 485);
        assert_eq!("23:59:00".parse::<TimeOfDay>().unwrap().minutes(), 1439);
    }

    #[test]
    fn test_parse_time_of_day_errors() {
        assert!(matches!("0800".parse::<TimeOfDay>(), Err(TimeParseError::Format(_))));
        assert!(matches!("24:00".parse::<TimeOfDay>(), Err(TimeParseError::OutOfRange(_))));
        assert!(matches!("12:60".parse::<TimeOfDay>(), Err(TimeParseError::OutOfRange(_))));
        assert!(matches!("ab:cd".parse::<TimeOfDay>(), Err(TimeParseError::Format(_))));
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(TimeOfDay::from_hm(7, 5).unwrap().to_string(), "07:05");
    }

    #[test]
    fn test_open_range_is_half_open() {
        let h = hours("08:00", "22:00", true);
        assert!(!h.is_open_at(at(7, 59)));
        assert!(h.is_open_at(at(8, 0)));
        assert!(h.is_open_at(at(21, 59)));
        assert!(!h.is_open_at(at(22, 0)));
    }

    #[test]
    fn test_closed_today_overrides_hours() {
        let h = hours("00:00", "23:59", false);
        for minute in [0, at(12, 0), at(23, 58)] {
            assert!(!h.is_open_at(minute));
        }
    }

    #[test]
    fn test_no_midnight_wrap() {
        let h = hours("22:00", "02:00", true);
        assert!(!h.is_open_at(at(23, 0)));
        assert!(!h.is_open_at(at(1, 0)));
    }

    #[test]
    fn test_missing_config_is_open() {
        assert_eq!(StoreStatus::evaluate(None, at(3, 0)), StoreStatus::Open);
    }

    #[test]
    fn test_evaluate_with_config() {
        let h = hours("08:00", "18:00", true);
        assert_eq!(StoreStatus::evaluate(Some(&h), at(9, 0)), StoreStatus::Open);
        assert_eq!(StoreStatus::evaluate(Some(&h), at(19, 0)), StoreStatus::Closed);
    }

    #[test]
    fn test_local_minutes_sao_paulo() {
        // 12:30 UTC is 09:30 in São Paulo (UTC-3, no DST since 2019)
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 30, 0).unwrap();
        assert_eq!(local_minutes(now, DEFAULT_TIMEZONE), at(9, 30));
    }

    #[test]
    fn test_status_at_instant_crosses_utc_midnight() {
        // 01:00 UTC is 22:00 the previous day in São Paulo
        let now = Utc.with_ymd_and_hms(2026, 3, 11, 1, 0, 0).unwrap();
        let h = hours("08:00", "22:00", true);
        assert_eq!(
            StoreStatus::at_instant(Some(&h), now, DEFAULT_TIMEZONE),
            StoreStatus::Closed
        );
    }

    #[test]
    fn test_json_shape_is_camel_case() {
        let json = r#"{"openTime":"07:30","closeTime":"19:00","isOpenToday":true}"#;
        let h: StoreHours = serde_json::from_str(json).unwrap();
        assert_eq!(h, hours("07:30", "19:00", true));
        assert_eq!(serde_json::to_string(&h).unwrap(), json);
    }

    #[test]
    fn test_labels() {
        assert_eq!(StoreStatus::Open.label(), "Aberto");
        assert_eq!(StoreStatus::Closed.to_string(), "Fechado");
    }
}
