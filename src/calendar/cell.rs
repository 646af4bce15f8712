use serde::Serialize;

use crate::schedule::{DayPartition, DaySegment};
use crate::time::Date;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayCell {
    /// Padding before the first or after the last day of the calendar.
    Blank,
    /// Serialized with `day_of_month` next to the date, so a grid can label
    /// the cell without parsing the date.
    Populated {
        date: Date,
        day_of_month: u32,
        segments: Vec<DaySegment>,
    },
}

impl DayCell {
    #[must_use]
    pub fn populated(partition: DayPartition) -> Self {
        let date = partition.date();

        Self::Populated {
            date,
            day_of_month: date.day(),
            segments: partition.into_segments(),
        }
    }

    #[must_use]
    pub const fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    #[must_use]
    pub const fn date(&self) -> Option<Date> {
        match self {
            Self::Blank => None,
            Self::Populated { date, .. } => Some(*date),
        }
    }

    #[must_use]
    pub const fn day_of_month(&self) -> Option<u32> {
        match self {
            Self::Blank => None,
            Self::Populated { day_of_month, .. } => Some(*day_of_month),
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[DaySegment] {
        match self {
            Self::Blank => &[],
            Self::Populated { segments, .. } => segments,
        }
    }
}

/// The cells of one calendar week, starting on the configured week day.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct WeekRow {
    cells: Vec<DayCell>,
}

impl WeekRow {
    pub const LEN: usize = 7;

    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: Vec::with_capacity(Self::LEN),
        }
    }

    pub(super) fn push(&mut self, cell: DayCell) {
        debug_assert!(!self.is_full(), "a week has only {} days", Self::LEN);
        self.cells.push(cell);
    }

    /// Fills the row with blank cells until it is full.
    pub(super) fn pad(&mut self) {
        self.cells.resize(Self::LEN, DayCell::Blank);
    }

    #[must_use]
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() >= Self::LEN
    }

    /// The number of blank cells before the first populated one.
    #[must_use]
    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|cell| cell.is_blank()).count()
    }

    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.cells.iter().filter_map(DayCell::date)
    }
}
