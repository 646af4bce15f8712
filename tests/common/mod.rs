#![allow(dead_code)]

use shift_calendar::time::{EpochSeconds, SECONDS_PER_DAY};
use shift_calendar::Interval;

pub const HOUR: EpochSeconds = 3_600;

/// 2018-07-04 00:00:00 UTC, a wednesday.
pub const JULY_FOURTH: EpochSeconds = 1_530_662_400;

#[must_use]
pub fn interval(start: EpochSeconds, end: EpochSeconds) -> Interval {
    Interval::new(start, end).expect("interval should start before it ends")
}

/// An interval on the `day`th day after [`JULY_FOURTH`], from `from` to `to`
/// hours after its midnight.
#[must_use]
pub fn shift(day: i64, from: i64, to: i64) -> Interval {
    let midnight = JULY_FOURTH + day * SECONDS_PER_DAY;
    interval(midnight + from * HOUR, midnight + to * HOUR)
}

pub fn debug_setup() {
    std::env::set_var("RUST_BACKTRACE", "1");
    std::env::set_var("RUST_APP_LOG", "trace");
    color_backtrace::install();
    let _ = pretty_env_logger::try_init_custom_env("RUST_APP_LOG");
}
