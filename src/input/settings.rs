use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::time::{UtcOffset, WeekDay};
use crate::utils;

/// The optional settings file:
///
/// ```toml
/// [calendar]
/// week_start = "sunday"
/// pad_trailing_row = false
/// utc_offset = "+09:00"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    calendar: CalendarSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarSettings {
    week_start: Option<WeekDay>,
    pad_trailing_row: Option<bool>,
    utc_offset: Option<UtcOffset>,
}

impl Settings {
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        utils::toml_from_reader(
            std::fs::File::open(path)
                .with_context(|| format!("failed to open settings \"{}\"", path.display()))?,
        )
        .with_context(|| format!("invalid settings \"{}\"", path.display()))
    }

    #[must_use]
    pub const fn calendar(&self) -> &CalendarSettings {
        &self.calendar
    }
}

impl CalendarSettings {
    #[must_use]
    pub const fn week_start(&self) -> Option<WeekDay> {
        self.week_start
    }

    #[must_use]
    pub const fn pad_trailing_row(&self) -> Option<bool> {
        self.pad_trailing_row
    }

    #[must_use]
    pub const fn utc_offset(&self) -> Option<UtcOffset> {
        self.utc_offset
    }
}
