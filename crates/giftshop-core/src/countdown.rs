//! Countdown to a fixed moment, split into days, hours, minutes and seconds.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

use crate::error::{ShopError, ShopResult};

const SECONDS_PER_DAY: i64 = 24 * 3600;

/// Remaining time broken into display units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownParts {
    /// Split a number of seconds; negative input clamps to zero
    pub fn from_seconds(total: i64) -> Self {
        let total = total.max(0);
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Countdown towards `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    target: DateTime<Utc>,
}

impl Countdown {
    pub fn new(target: DateTime<Utc>) -> Self {
        Self { target }
    }

    /// Countdown to the next New Year after `now`
    pub fn until_new_year(now: DateTime<Utc>) -> Self {
        Self::new(next_new_year(now))
    }

    /// Parse an RFC 3339 target such as `2027-01-01T00:00:00Z`
    pub fn parse(target: &str) -> ShopResult<Self> {
        let target = DateTime::parse_from_rfc3339(target)
            .map_err(|e| ShopError::InvalidSetting(format!("countdown target '{}': {}", target, e)))?;
        Ok(Self::new(target.with_timezone(&Utc)))
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// Whole seconds left, negative once the target has passed
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> i64 {
        (self.target - now).num_seconds()
    }

    pub fn remaining(&self, now: DateTime<Utc>) -> CountdownParts {
        CountdownParts::from_seconds(self.remaining_seconds(now))
    }

    pub fn is_finished(&self, now: DateTime<Utc>) -> bool {
        self.remaining_seconds(now) <= 0
    }
}

/// Midnight UTC of the January 1st following `now`
pub fn next_new_year(now: DateTime<Utc>) -> DateTime<Utc> {
    let year = now.year() + 1;
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight))
        .unwrap_or(now)
}
