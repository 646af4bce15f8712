/// Seconds since 1970-01-01 00:00:00 UTC.
pub type EpochSeconds = i64;

pub const SECONDS_PER_DAY: EpochSeconds = 86_400;

/// 0001-01-01 00:00:00 UTC, the earliest instant a schedule may contain.
pub const MIN_TIMESTAMP: EpochSeconds = -62_135_596_800;
/// 9999-12-31 23:59:59 UTC, the latest instant a schedule may contain.
pub const MAX_TIMESTAMP: EpochSeconds = 253_402_300_799;

/// Returns `true` if `timestamp` is within [`MIN_TIMESTAMP`] and
/// [`MAX_TIMESTAMP`].
#[must_use]
pub const fn is_supported(timestamp: EpochSeconds) -> bool {
    timestamp >= MIN_TIMESTAMP && timestamp <= MAX_TIMESTAMP
}

mod date;
pub use date::*;
mod week_day;
pub use week_day::*;
mod utc_offset;
pub use utc_offset::*;
