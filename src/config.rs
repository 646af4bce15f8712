use std::path::{Path, PathBuf};

use log::debug;

use crate::calendar::{CalendarLayout, LayoutError, WeekRow};
use crate::input::{ScheduleFile, Settings};
use crate::time::{EpochSeconds, UtcOffset, WeekDay};

pub struct Config {
    schedule: ScheduleFile,
    layout: CalendarLayout,
    now: EpochSeconds,
    output: Option<PathBuf>,
}

pub struct ConfigBuilder {
    schedule: ScheduleFile,
    settings: Settings,
    week_start: Option<WeekDay>,
    pad_trailing_row: Option<bool>,
    utc_offset: Option<UtcOffset>,
    now: Option<EpochSeconds>,
    output: Option<PathBuf>,
}

impl ConfigBuilder {
    fn new(schedule: ScheduleFile, settings: Settings) -> Self {
        Self {
            schedule,
            settings,
            week_start: None,
            pad_trailing_row: None,
            utc_offset: None,
            now: None,
            output: None,
        }
    }

    pub fn week_start(&mut self, week_start: WeekDay) -> &mut Self {
        self.week_start = Some(week_start);
        self
    }

    pub fn pad_trailing_row(&mut self, pad_trailing_row: bool) -> &mut Self {
        self.pad_trailing_row = Some(pad_trailing_row);
        self
    }

    pub fn utc_offset(&mut self, utc_offset: UtcOffset) -> &mut Self {
        self.utc_offset = Some(utc_offset);
        self
    }

    pub fn now(&mut self, now: EpochSeconds) -> &mut Self {
        self.now = Some(now);
        self
    }

    pub fn output(&mut self, output: impl Into<PathBuf>) -> &mut Self {
        self.output = Some(output.into());
        self
    }

    /// Values set on the builder take precedence over the settings file.
    /// Anything missing from both falls back to weeks starting on sunday,
    /// no trailing padding, the system utc offset and the current time.
    #[must_use]
    pub fn build(self) -> Config {
        let settings = self.settings.calendar();

        let week_start = self
            .week_start
            .or(settings.week_start())
            .unwrap_or(WeekDay::Sunday);
        let pad_trailing_row = self
            .pad_trailing_row
            .or(settings.pad_trailing_row())
            .unwrap_or(false);
        let utc_offset = self
            .utc_offset
            .or(settings.utc_offset())
            .unwrap_or_else(UtcOffset::local);
        let now = self.now.unwrap_or_else(|| chrono::Utc::now().timestamp());

        debug!(
            "weeks start on {}, pad trailing row: {}, utc offset: {}, now: {}",
            week_start, pad_trailing_row, utc_offset, now
        );

        Config {
            schedule: self.schedule,
            layout: CalendarLayout::new()
                .week_start(week_start)
                .pad_trailing_row(pad_trailing_row)
                .utc_offset(utc_offset),
            now,
            output: self.output,
        }
    }
}

impl Config {
    pub fn try_from_files(
        schedule: impl AsRef<Path>,
        settings: Option<&Path>,
    ) -> anyhow::Result<ConfigBuilder> {
        let schedule = ScheduleFile::from_path(schedule)?;
        let settings = settings
            .map(Settings::from_path)
            .transpose()?
            .unwrap_or_default();

        Ok(ConfigBuilder::new(schedule, settings))
    }

    #[must_use]
    pub fn builder(schedule: ScheduleFile) -> ConfigBuilder {
        ConfigBuilder::new(schedule, Settings::default())
    }

    pub fn schedule(&self) -> &ScheduleFile {
        &self.schedule
    }

    pub fn layout(&self) -> CalendarLayout {
        self.layout
    }

    pub fn now(&self) -> EpochSeconds {
        self.now
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn calendar(&self) -> Result<Vec<WeekRow>, LayoutError> {
        self.layout.build(self.schedule.schedules())
    }

    pub fn to_layout_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&self.calendar()?)?)
    }

    /// One line per shift detail, see [`crate::input::ShiftDetail::describe`].
    pub fn describe_details(&self) -> Vec<String> {
        self.schedule
            .details()
            .iter()
            .map(|detail| detail.describe(self.now, self.layout.offset()))
            .collect()
    }
}
