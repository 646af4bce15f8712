mod interval;
mod partition;
mod segment;

pub use interval::*;
pub use partition::*;
pub use segment::DaySegment;
