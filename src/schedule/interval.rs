use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::{self, EpochSeconds, MAX_TIMESTAMP, MIN_TIMESTAMP};
use crate::{max, min};

/// A scheduled shift, active from `start` (inclusive) to `end` (exclusive).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deserialize, Serialize,
)]
#[serde(try_from = "IntervalRecord")]
#[serde(into = "IntervalRecord")]
#[display("{start} - {end}")]
pub struct Interval {
    start: EpochSeconds,
    end: EpochSeconds,
}

/// The shape in which intervals are exchanged with the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct IntervalRecord {
    pub start_time: EpochSeconds,
    pub end_time: EpochSeconds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInterval {
    #[error("interval must start before it ends, but starts at {start} and ends at {end}")]
    Empty {
        start: EpochSeconds,
        end: EpochSeconds,
    },
    #[error(
        "{timestamp} is outside of the supported range from {} to {}",
        MIN_TIMESTAMP,
        MAX_TIMESTAMP
    )]
    OutOfRange { timestamp: EpochSeconds },
}

impl Interval {
    pub fn new(start: EpochSeconds, end: EpochSeconds) -> Result<Self, InvalidInterval> {
        if let Some(timestamp) = [start, end].into_iter().find(|ts| !time::is_supported(*ts)) {
            return Err(InvalidInterval::OutOfRange { timestamp });
        }

        if start >= end {
            return Err(InvalidInterval::Empty { start, end });
        }

        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> EpochSeconds {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> EpochSeconds {
        self.end
    }

    /// The length of the interval in seconds, always positive.
    #[must_use]
    pub const fn duration(&self) -> EpochSeconds {
        self.end - self.start
    }

    /// Returns `true` if `now` lies strictly between start and end.
    ///
    /// Both edges are excluded, so a shift is not in progress at the exact
    /// second it starts or ends.
    #[must_use]
    pub const fn is_active_at(&self, now: EpochSeconds) -> bool {
        now > self.start && now < self.end
    }

    /// Returns the part of the interval that lies within `[from, to)` or
    /// `None` if that part would be empty.
    #[must_use]
    pub fn clamp_to(
        &self,
        from: EpochSeconds,
        to: EpochSeconds,
    ) -> Option<(EpochSeconds, EpochSeconds)> {
        // 06:00 to 23:00
        // 03:00 to 07:00
        // -> 06:00 to 07:00
        let start = max!(self.start, from);
        let end = min!(self.end, to);

        (start < end).then_some((start, end))
    }
}

/// Returns `true` if `interval` is in progress at `now`.
///
/// See [`Interval::is_active_at`].
#[must_use]
pub const fn is_active_now(interval: &Interval, now: EpochSeconds) -> bool {
    interval.is_active_at(now)
}

impl TryFrom<IntervalRecord> for Interval {
    type Error = InvalidInterval;

    fn try_from(record: IntervalRecord) -> Result<Self, Self::Error> {
        Self::new(record.start_time, record.end_time)
    }
}

impl From<Interval> for IntervalRecord {
    fn from(interval: Interval) -> Self {
        Self {
            start_time: interval.start,
            end_time: interval.end,
        }
    }
}
