use core::mem;

use log::{debug, trace};
use thiserror::Error;

use crate::calendar::{DayCell, WeekRow};
use crate::schedule::{partition_day, Interval};
use crate::time::{UtcOffset, WeekDay};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error(
        "interval #{index} ({interval}) is outside of the range from the start of the first \
         interval to the end of the last interval, the intervals must be in chronological order"
    )]
    InvalidInputOrder { index: usize, interval: Interval },
}

/// Lays out the days spanned by a list of intervals as calendar weeks.
///
/// Every day from the date of the first interval's start to the date of the
/// last interval's end (both inclusive) becomes one populated cell. The first
/// week is preceded by blanks for the days before the first date. Each week is
/// [`WeekRow::LEN`] cells long, only the last one may be shorter unless
/// [`CalendarLayout::pad_trailing_row`] is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarLayout {
    week_start: WeekDay,
    pad_trailing_row: bool,
    utc_offset: UtcOffset,
}

impl Default for CalendarLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarLayout {
    /// Weeks start on sunday, the last row is not padded and days are
    /// measured in UTC.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            week_start: WeekDay::Sunday,
            pad_trailing_row: false,
            utc_offset: UtcOffset::UTC,
        }
    }

    #[must_use]
    pub const fn week_start(mut self, week_start: WeekDay) -> Self {
        self.week_start = week_start;
        self
    }

    #[must_use]
    pub const fn pad_trailing_row(mut self, pad_trailing_row: bool) -> Self {
        self.pad_trailing_row = pad_trailing_row;
        self
    }

    #[must_use]
    pub const fn utc_offset(mut self, utc_offset: UtcOffset) -> Self {
        self.utc_offset = utc_offset;
        self
    }

    #[must_use]
    pub const fn first_week_day(&self) -> WeekDay {
        self.week_start
    }

    #[must_use]
    pub const fn offset(&self) -> UtcOffset {
        self.utc_offset
    }

    /// Builds the week rows for `intervals`, which must be in chronological
    /// order: no interval may start before the first one or end after the
    /// last one.
    ///
    /// An empty list results in no rows.
    pub fn build(&self, intervals: &[Interval]) -> Result<Vec<WeekRow>, LayoutError> {
        let (Some(first), Some(last)) = (intervals.first(), intervals.last()) else {
            return Ok(Vec::new());
        };

        check_order(intervals, first, last)?;

        let first_date = self.utc_offset.date_of(first.start());
        let last_date = self.utc_offset.date_of(last.end());
        let last_week_day = self.week_start.prev();

        debug!(
            "laying out {} days from {} to {}, weeks start on {}",
            first_date.days_until(last_date) + 1,
            first_date,
            last_date,
            self.week_start
        );

        let mut rows = Vec::new();
        let mut row = WeekRow::new();
        for _ in 0..self.week_start.days_until(first_date.week_day()) {
            row.push(DayCell::Blank);
        }

        for date in first_date.iter_through(last_date) {
            let day_start = self.utc_offset.midnight_of(date);
            let partition = partition_day(self.utc_offset, day_start, intervals);
            row.push(DayCell::populated(partition));

            if date.week_day() == last_week_day {
                trace!("finished week ending on {}", date);
                rows.push(mem::take(&mut row));
            }
        }

        if !row.is_empty() {
            if self.pad_trailing_row {
                row.pad();
            }

            rows.push(row);
        }

        Ok(rows)
    }
}

fn check_order(
    intervals: &[Interval],
    first: &Interval,
    last: &Interval,
) -> Result<(), LayoutError> {
    intervals
        .iter()
        .enumerate()
        .find(|(_, interval)| interval.start() < first.start() || interval.end() > last.end())
        .map_or(Ok(()), |(index, interval)| {
            Err(LayoutError::InvalidInputOrder {
                index,
                interval: *interval,
            })
        })
}

/// Lays out `intervals` in UTC with weeks starting on `week_start` and without
/// padding the last week.
///
/// See [`CalendarLayout::build`].
pub fn build_calendar(
    intervals: &[Interval],
    week_start: WeekDay,
) -> Result<Vec<WeekRow>, LayoutError> {
    CalendarLayout::new().week_start(week_start).build(intervals)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;
    use crate::schedule::DaySegment;
    use crate::time::{EpochSeconds, MAX_TIMESTAMP, MIN_TIMESTAMP, SECONDS_PER_DAY};

    // 2018-07-04 00:00:00 UTC, a wednesday
    const WEDNESDAY: EpochSeconds = 1_530_662_400;
    const HOUR: EpochSeconds = 3600;

    fn interval(start: EpochSeconds, end: EpochSeconds) -> Interval {
        Interval::new(start, end).expect("test interval should be valid")
    }

    #[test]
    fn test_empty() {
        assert_eq!(build_calendar(&[], WeekDay::Sunday), Ok(vec![]));
    }

    #[test]
    fn test_single_day() {
        let rows = build_calendar(
            &[interval(WEDNESDAY + 2 * HOUR, WEDNESDAY + 4 * HOUR)],
            WeekDay::Sunday,
        )
        .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 4);
        assert_eq!(rows[0].leading_blanks(), 3);
        assert_eq!(rows[0].cells()[3].day_of_month(), Some(4));
        assert_eq!(rows[0].cells()[3].segments().len(), 3);
    }

    #[test]
    fn test_single_day_padded() {
        let rows = CalendarLayout::new()
            .week_start(WeekDay::Monday)
            .pad_trailing_row(true)
            .build(&[interval(WEDNESDAY + 2 * HOUR, WEDNESDAY + 4 * HOUR)])
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), WeekRow::LEN);
        assert_eq!(rows[0].leading_blanks(), 2);
        assert_eq!(rows[0].dates().collect::<Vec<_>>(), vec![date!(2018:07:04)]);
        assert!(rows[0].cells()[3..].iter().all(DayCell::is_blank));
    }

    #[test]
    fn test_weeks_are_split_on_week_start() {
        // wednesday 2018-07-04 to tuesday 2018-07-17
        let intervals = [
            interval(WEDNESDAY + 10 * HOUR, WEDNESDAY + 40 * HOUR),
            interval(WEDNESDAY + 13 * SECONDS_PER_DAY, WEDNESDAY + 13 * SECONDS_PER_DAY + HOUR),
        ];

        let rows = build_calendar(&intervals, WeekDay::Sunday).unwrap();

        assert_eq!(
            rows.iter().map(WeekRow::len).collect::<Vec<_>>(),
            vec![7, 7, 3]
        );
        assert_eq!(
            rows.iter()
                .flat_map(|row| row.dates())
                .collect::<Vec<_>>(),
            date!(2018:07:04)
                .iter_through(date!(2018:07:17))
                .collect::<Vec<_>>()
        );
        assert_eq!(rows[1].cells()[0].date(), Some(date!(2018:07:08)));
        assert_eq!(rows[2].cells()[0].date(), Some(date!(2018:07:15)));

        // the first interval spans into thursday
        assert_eq!(
            rows[0].cells()[4].segments(),
            &[
                DaySegment::new(16.0 * 3600.0 / 86400.0, true),
                DaySegment::new(8.0 * 3600.0 / 86400.0, false),
            ]
        );
    }

    #[test]
    fn test_range_ending_on_last_week_day() {
        // wednesday to saturday
        let intervals = [interval(WEDNESDAY, WEDNESDAY + 3 * SECONDS_PER_DAY + HOUR)];

        let rows = build_calendar(&intervals, WeekDay::Sunday).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), WeekRow::LEN);
    }

    #[test]
    fn test_out_of_order() {
        let intervals = [
            interval(WEDNESDAY + SECONDS_PER_DAY, WEDNESDAY + SECONDS_PER_DAY + HOUR),
            interval(WEDNESDAY, WEDNESDAY + HOUR),
            interval(WEDNESDAY + 2 * SECONDS_PER_DAY, WEDNESDAY + 2 * SECONDS_PER_DAY + HOUR),
        ];

        assert_eq!(
            build_calendar(&intervals, WeekDay::Sunday),
            Err(LayoutError::InvalidInputOrder {
                index: 1,
                interval: intervals[1],
            })
        );
    }

    #[test]
    fn test_utc_offset_moves_days() {
        // 2018-07-04 22:00 to 23:00 UTC is already thursday in UTC+2
        let intervals = [interval(WEDNESDAY + 22 * HOUR, WEDNESDAY + 23 * HOUR)];

        let rows = CalendarLayout::new()
            .utc_offset("+02:00".parse().unwrap())
            .build(&intervals)
            .unwrap();

        assert_eq!(rows[0].leading_blanks(), 4);
        assert_eq!(rows[0].dates().collect::<Vec<_>>(), vec![date!(2018:07:05)]);
    }

    #[test]
    fn test_first_and_last_supported_day() {
        // 0001-01-01 is a monday
        let rows = build_calendar(&[interval(MIN_TIMESTAMP, MIN_TIMESTAMP + 10)], WeekDay::Sunday)
            .unwrap();
        assert_eq!(rows[0].leading_blanks(), 1);
        assert_eq!(rows[0].dates().collect::<Vec<_>>(), vec![date!(0001:01:01)]);

        // 9999-12-31 is a friday
        let rows = build_calendar(&[interval(MAX_TIMESTAMP - 10, MAX_TIMESTAMP)], WeekDay::Sunday)
            .unwrap();
        assert_eq!(rows[0].leading_blanks(), 5);
        assert_eq!(rows[0].dates().collect::<Vec<_>>(), vec![date!(9999:12:31)]);
        assert_eq!(rows[0].cells()[5].segments().len(), 3);

        // local days may extend past the supported range
        let rows = CalendarLayout::new()
            .utc_offset("-23:59".parse().unwrap())
            .build(&[interval(MIN_TIMESTAMP, MIN_TIMESTAMP + 10)])
            .unwrap();
        assert_eq!(rows[0].dates().collect::<Vec<_>>(), vec![date!(0000:12:31)]);

        let rows = CalendarLayout::new()
            .utc_offset("+23:59".parse().unwrap())
            .build(&[interval(MAX_TIMESTAMP - 10, MAX_TIMESTAMP)])
            .unwrap();
        assert_eq!(rows[0].dates().collect::<Vec<_>>(), vec![date!(10000:01:01)]);
    }
}
