use serde::Serialize;

use crate::time::{EpochSeconds, SECONDS_PER_DAY};

/// A contiguous part of one day in which the schedule is either active or not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DaySegment {
    fraction: f64,
    active: bool,
}

impl DaySegment {
    #[must_use]
    pub const fn new(fraction: f64, active: bool) -> Self {
        Self { fraction, active }
    }

    /// The share of the day covered by this segment, in `(0, 1]`.
    #[must_use]
    pub const fn fraction(&self) -> f64 {
        self.fraction
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}

/// Consecutive seconds of a day with the same state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Run {
    seconds: EpochSeconds,
    active: bool,
}

/// Collects runs while keeping them maximal: empty runs are dropped and a run
/// with the same state as its predecessor is merged into it.
#[derive(Debug, Clone, Default)]
pub(super) struct Runs {
    inner: Vec<Run>,
}

impl Runs {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, seconds: EpochSeconds, active: bool) {
        if seconds <= 0 {
            return;
        }

        match self.inner.last_mut() {
            Some(last) if last.active == active => last.seconds += seconds,
            _ => self.inner.push(Run { seconds, active }),
        }
    }

    #[must_use]
    pub fn into_segments(self) -> Vec<DaySegment> {
        self.inner
            .into_iter()
            .map(|run| DaySegment::new(run.seconds as f64 / SECONDS_PER_DAY as f64, run.active))
            .collect()
    }
}
