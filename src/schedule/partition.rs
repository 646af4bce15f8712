use log::trace;
use serde::Serialize;

use crate::max;
use crate::schedule::segment::Runs;
use crate::schedule::{DaySegment, Interval};
use crate::time::{Date, EpochSeconds, UtcOffset, SECONDS_PER_DAY};

/// One calendar day split into alternating active and inactive segments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPartition {
    date: Date,
    day_start: EpochSeconds,
    segments: Vec<DaySegment>,
}

impl DayPartition {
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// The instant of the local midnight that starts the day.
    #[must_use]
    pub const fn day_start(&self) -> EpochSeconds {
        self.day_start
    }

    #[must_use]
    pub fn segments(&self) -> &[DaySegment] {
        &self.segments
    }

    #[must_use]
    pub fn into_segments(self) -> Vec<DaySegment> {
        self.segments
    }

    /// The share of the day in which at least one interval is active.
    #[must_use]
    pub fn active_fraction(&self) -> f64 {
        self.segments
            .iter()
            .filter(|segment| segment.is_active())
            .map(DaySegment::fraction)
            .sum()
    }
}

/// Splits the local day containing `day` into segments.
///
/// The segments are ordered by time, start at local midnight, end at the next
/// local midnight and alternate between active and inactive. Overlapping
/// intervals count as one active run, intervals outside of the day are ignored.
/// A day without any interval is a single inactive segment.
///
/// `day` may be any instant, instants outside of the supported range are
/// treated as the first or last supported day.
#[must_use]
pub fn partition_day(
    offset: UtcOffset,
    day: EpochSeconds,
    intervals: &[Interval],
) -> DayPartition {
    let date = offset.date_of(day);
    let day_start = offset.midnight_of(date);
    let day_end = day_start + SECONDS_PER_DAY;

    let mut pieces = intervals
        .iter()
        .filter_map(|interval| interval.clamp_to(day_start, day_end))
        .collect::<Vec<_>>();
    pieces.sort_unstable();

    let mut runs = Runs::with_capacity(pieces.len() * 2 + 1);
    // everything before the cursor has already been assigned to a run
    let mut cursor = day_start;
    for (start, end) in pieces {
        if end <= cursor {
            continue;
        }

        let start = max!(start, cursor);
        runs.push(start - cursor, false);
        runs.push(end - start, true);
        cursor = end;
    }
    runs.push(day_end - cursor, false);

    let segments = runs.into_segments();
    trace!("partitioned {} into {} segments", date, segments.len());

    DayPartition {
        date,
        day_start,
        segments,
    }
}
