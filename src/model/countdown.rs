use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

const DAY_MS: i64 = 86_400_000;
const HOUR_MS: i64 = 3_600_000;
const MINUTE_MS: i64 = 60_000;
const SECOND_MS: i64 = 1_000;

pub const EXPIRED: &str = "EXPIRED";

/// Parses a `data-countdown` value into epoch milliseconds.
///
/// Accepts RFC 3339 and RFC 2822 timestamps, zone-less date-times (read in
/// the visitor's local zone) and bare dates (midnight UTC), the same way the
/// browser's `Date` reads them. Anything else yields `None`, which the
/// countdown treats as already expired.
pub fn parse_deadline(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.timestamp_millis());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            // A wall time skipped by a DST jump has no local reading.
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
}

pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Splits a non-negative distance into whole units.
    pub fn from_millis(distance: i64) -> Self {
        Self {
            days: distance / DAY_MS,
            hours: (distance % DAY_MS) / HOUR_MS,
            minutes: (distance % HOUR_MS) / MINUTE_MS,
            seconds: (distance % MINUTE_MS) / SECOND_MS,
        }
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Running(Remaining),
    Expired,
}

impl fmt::Display for CountdownState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountdownState::Running(remaining) => remaining.fmt(f),
            CountdownState::Expired => f.write_str(EXPIRED),
        }
    }
}

/// A single countdown element. Once expired it stays expired.
#[derive(Debug, Clone)]
pub struct Countdown {
    deadline: Option<i64>,
    state: Option<CountdownState>,
}

impl Countdown {
    pub fn new(deadline: Option<i64>) -> Self {
        Self {
            deadline,
            state: None,
        }
    }

    pub fn from_attribute(raw: &str) -> Self {
        Self::new(parse_deadline(raw))
    }

    pub fn is_expired(&self) -> bool {
        self.state == Some(CountdownState::Expired)
    }

    pub fn tick(&mut self, now: i64) -> CountdownState {
        if self.is_expired() {
            return CountdownState::Expired;
        }
        let state = match self.deadline.map(|deadline| deadline - now) {
            Some(distance) if distance >= 0 => {
                CountdownState::Running(Remaining::from_millis(distance))
            }
            _ => CountdownState::Expired,
        };
        self.state = Some(state);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_an_hour_minute_and_second() {
        let now = 1_700_000_000_000;
        let mut countdown = Countdown::new(Some(now + 3_661_000));
        assert_eq!(countdown.tick(now).to_string(), "0d 1h 1m 1s");
        assert_eq!(countdown.tick(now + 1_000).to_string(), "0d 1h 1m 0s");
    }

    #[test]
    fn floors_partial_units() {
        let remaining = Remaining::from_millis(2 * DAY_MS + 5 * HOUR_MS + 59_999);
        assert_eq!(remaining.to_string(), "2d 5h 0m 59s");
    }

    #[test]
    fn zero_distance_is_still_running() {
        let mut countdown = Countdown::new(Some(10_000));
        assert_eq!(countdown.tick(10_000).to_string(), "0d 0h 0m 0s");
    }

    #[test]
    fn expiry_is_terminal() {
        let mut countdown = Countdown::new(Some(10_000));
        assert_eq!(countdown.tick(10_001), CountdownState::Expired);
        assert!(countdown.is_expired());
        // Even if the clock jumps back, the element stays expired.
        assert_eq!(countdown.tick(0).to_string(), EXPIRED);
    }

    #[test]
    fn malformed_deadline_expires_immediately() {
        let mut countdown = Countdown::from_attribute("next tuesday");
        assert_eq!(countdown.tick(0), CountdownState::Expired);
    }

    fn local_ms(y: i32, m: u32, d: u32, h: u32, min: u32) -> i64 {
        let naive = NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .unwrap();
        Local
            .from_local_datetime(&naive)
            .earliest()
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn parses_zoned_timestamps() {
        assert_eq!(parse_deadline("1970-01-01T00:00:01Z"), Some(1_000));
        assert_eq!(parse_deadline("1970-01-01T01:00:00+01:00"), Some(0));
        assert_eq!(parse_deadline(""), None);
    }

    #[test]
    fn bare_date_is_midnight_utc() {
        assert_eq!(parse_deadline("1970-01-02"), Some(DAY_MS));
        assert_eq!(parse_deadline("2030-01-01"), Some(1_893_456_000_000));
    }

    #[test]
    fn zone_less_date_time_is_local() {
        let expected = local_ms(2030, 1, 1, 0, 0);
        assert_eq!(parse_deadline("2030-01-01T00:00:00"), Some(expected));
        assert_eq!(parse_deadline(" 2030-01-01T00:00:00.000 "), Some(expected));
        assert_eq!(parse_deadline("2030-01-01T00:00"), Some(expected));
        assert_eq!(parse_deadline("2030-01-01 00:00:00"), Some(expected));
        assert_eq!(
            parse_deadline("2030-06-15T12:30"),
            Some(local_ms(2030, 6, 15, 12, 30))
        );
    }

    #[test]
    fn parses_rfc2822() {
        assert_eq!(
            parse_deadline("Tue, 1 Jan 2030 00:00:00 +0000"),
            Some(1_893_456_000_000)
        );
        assert_eq!(
            parse_deadline("Tue, 1 Jan 2030 05:30:00 +0530"),
            Some(1_893_456_000_000)
        );
        assert_eq!(parse_deadline("1 Jan 2030 00:00:00 GMT"), Some(1_893_456_000_000));
    }
}
