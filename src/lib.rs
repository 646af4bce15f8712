mod utils;

pub mod calendar;
pub mod config;
pub mod input;
pub mod schedule;
pub mod time;

use std::fs;

use log::info;

use crate::config::Config;

pub use crate::calendar::{build_calendar, CalendarLayout, DayCell, LayoutError, WeekRow};
pub use crate::schedule::{is_active_now, partition_day, DayPartition, DaySegment, Interval};

/// Lays out the configured schedule and writes it as json to the configured
/// output, or returns it if there is no output.
pub fn generate_layout(config: &Config) -> anyhow::Result<Option<String>> {
    info!(
        "laying out {} schedules",
        config.schedule().schedules().len()
    );

    let json = config.to_layout_json()?;

    let Some(output) = config.output() else {
        return Ok(Some(json));
    };

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    utils::write(output, json)?;
    info!("wrote layout to \"{}\"", output.display());

    Ok(None)
}
