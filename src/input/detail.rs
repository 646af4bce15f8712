use serde::{Deserialize, Serialize};

use crate::schedule::Interval;
use crate::time::{EpochSeconds, UtcOffset};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Stage {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

impl Stage {
    pub fn new(name: impl Into<String>, image: Option<String>) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Weapon {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thumbnail: Option<String>,
}

impl Weapon {
    pub fn new(name: impl Into<String>, thumbnail: Option<String>) -> Self {
        Self {
            name: name.into(),
            thumbnail,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }
}

/// Whether a shift is in progress at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftStatus {
    Active { until: EpochSeconds },
    /// The shift is either upcoming or already over.
    Scheduled {
        start: EpochSeconds,
        end: EpochSeconds,
    },
}

/// A shift together with the stage it takes place on and the weapons
/// handed out for it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ShiftDetail {
    #[serde(flatten)]
    interval: Interval,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stage: Option<Stage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    weapons: Vec<Weapon>,
}

impl ShiftDetail {
    #[must_use]
    pub fn new(interval: Interval, stage: Option<Stage>, weapons: Vec<Weapon>) -> Self {
        Self {
            interval,
            stage,
            weapons,
        }
    }

    #[must_use]
    pub const fn interval(&self) -> Interval {
        self.interval
    }

    #[must_use]
    pub fn stage(&self) -> Option<&Stage> {
        self.stage.as_ref()
    }

    #[must_use]
    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    #[must_use]
    pub const fn status(&self, now: EpochSeconds) -> ShiftStatus {
        if self.interval.is_active_at(now) {
            ShiftStatus::Active {
                until: self.interval.end(),
            }
        } else {
            ShiftStatus::Scheduled {
                start: self.interval.start(),
                end: self.interval.end(),
            }
        }
    }

    /// Formats the shift as one line, for example
    /// `07/04 10:00 - 07/05 16:00: Spawning Grounds (Splattershot, Slosher)`.
    ///
    /// A shift that is in progress at `now` reads `Active until 07/05 16:00`.
    #[must_use]
    pub fn describe(&self, now: EpochSeconds, offset: UtcOffset) -> String {
        let mut result = match self.status(now) {
            ShiftStatus::Active { until } => {
                format!("Active until {}", format_instant(until, offset))
            }
            ShiftStatus::Scheduled { start, end } => format!(
                "{} - {}",
                format_instant(start, offset),
                format_instant(end, offset)
            ),
        };

        if let Some(stage) = &self.stage {
            result.push_str(": ");
            result.push_str(stage.name());
        }

        if !self.weapons.is_empty() {
            let names = self
                .weapons
                .iter()
                .map(Weapon::name)
                .collect::<Vec<_>>()
                .join(", ");
            result.push_str(&format!(" ({})", names));
        }

        result
    }
}

fn format_instant(timestamp: EpochSeconds, offset: UtcOffset) -> String {
    offset
        .local_time(timestamp)
        .format("%m/%d %H:%M")
        .to_string()
}
