use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::{Date, EpochSeconds, MAX_TIMESTAMP, MIN_TIMESTAMP};

/// The fixed offset between local wall-clock time and UTC.
///
/// Day boundaries ("local midnight") are derived from this offset. Daylight
/// saving transitions are not modelled, one offset applies to every instant.
///
/// Instants before [`MIN_TIMESTAMP`] or after [`MAX_TIMESTAMP`] are treated
/// as the nearest supported instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct UtcOffset {
    inner: FixedOffset,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidOffset {
    #[error("utc offset of {seconds} seconds is not within ±24 hours")]
    OutOfRange { seconds: i64 },
    #[error("\"{input}\" is not a valid utc offset. Expected \"Z\", \"local\" or \"±HH:MM\"")]
    ParseOffsetError {
        input: String,
        source: chrono::ParseError,
    },
}

impl UtcOffset {
    pub const UTC: Self = match FixedOffset::east_opt(0) {
        Some(inner) => Self { inner },
        None => unreachable!(),
    };

    pub fn from_seconds(seconds: i64) -> Result<Self, InvalidOffset> {
        i32::try_from(seconds)
            .ok()
            .and_then(FixedOffset::east_opt)
            .map(|inner| Self { inner })
            .ok_or(InvalidOffset::OutOfRange { seconds })
    }

    /// Reads the offset the system currently uses for local time.
    #[must_use]
    pub fn local() -> Self {
        Self {
            inner: *chrono::Local::now().offset(),
        }
    }

    #[must_use]
    pub const fn as_seconds(&self) -> i32 {
        self.inner.local_minus_utc()
    }

    /// Returns `timestamp` as local date and time.
    #[must_use]
    pub fn local_time(&self, timestamp: EpochSeconds) -> DateTime<FixedOffset> {
        let timestamp = timestamp.clamp(MIN_TIMESTAMP, MAX_TIMESTAMP);

        DateTime::from_timestamp(timestamp, 0)
            .expect("supported timestamps are within the range of chrono")
            .with_timezone(&self.inner)
    }

    /// Returns the local calendar date of `timestamp`.
    #[must_use]
    pub fn date_of(&self, timestamp: EpochSeconds) -> Date {
        self.local_time(timestamp).date_naive().into()
    }

    /// Returns the instant of the local midnight that starts `date`.
    #[must_use]
    pub fn midnight_of(&self, date: Date) -> EpochSeconds {
        let midnight = NaiveDate::from(date).and_time(NaiveTime::MIN).and_utc();

        midnight.timestamp() - EpochSeconds::from(self.as_seconds())
    }

    /// Returns the instant of the local midnight that starts the day
    /// containing `timestamp`.
    #[must_use]
    pub fn day_start(&self, timestamp: EpochSeconds) -> EpochSeconds {
        self.midnight_of(self.date_of(timestamp))
    }
}

impl Default for UtcOffset {
    fn default() -> Self {
        Self::UTC
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl FromStr for UtcOffset {
    type Err = InvalidOffset;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let input = string.trim();

        if input.eq_ignore_ascii_case("z") || input.eq_ignore_ascii_case("utc") {
            return Ok(Self::UTC);
        }

        if input.eq_ignore_ascii_case("local") {
            return Ok(Self::local());
        }

        input
            .parse::<FixedOffset>()
            .map(|inner| Self { inner })
            .map_err(|source| InvalidOffset::ParseOffsetError {
                input: string.to_string(),
                source,
            })
    }
}

impl TryFrom<String> for UtcOffset {
    type Error = InvalidOffset;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl From<UtcOffset> for String {
    fn from(offset: UtcOffset) -> Self {
        offset.to_string()
    }
}
