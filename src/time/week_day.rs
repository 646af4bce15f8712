use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub enum WeekDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl WeekDay {
    pub const fn week_days() -> [Self; 7] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }

    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    /// Returns the week day that is `days` after `self`.
    #[must_use]
    pub const fn add_days(self, days: usize) -> Self {
        Self::week_days()[(self.as_usize() - 1 + days % 7) % 7]
    }

    /// Returns the day before `self`, which is the last day of a week
    /// starting on `self`.
    #[must_use]
    pub const fn prev(self) -> Self {
        self.add_days(6)
    }

    /// Returns the number of days from `self` to the next `other`
    /// (`0` if they are the same).
    ///
    /// `self + self.days_until(other) == other`
    #[must_use]
    pub const fn days_until(&self, other: Self) -> usize {
        (other.as_usize() + 7 - self.as_usize()) % 7
    }

    const fn name(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

impl From<chrono::Weekday> for WeekDay {
    fn from(week_day: chrono::Weekday) -> Self {
        Self::week_days()[week_day.num_days_from_monday() as usize]
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{input}\" is not a week day. Expected a name like \"sunday\" or \"sun\"")]
pub struct InvalidWeekDay {
    input: String,
}

impl FromStr for WeekDay {
    type Err = InvalidWeekDay;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let lowercase = string.trim().to_ascii_lowercase();

        Self::week_days()
            .into_iter()
            .find(|week_day| {
                let name = week_day.name();
                lowercase == name || (lowercase.len() == 3 && name.starts_with(&lowercase))
            })
            .ok_or_else(|| InvalidWeekDay {
                input: string.to_string(),
            })
    }
}

impl TryFrom<String> for WeekDay {
    type Error = InvalidWeekDay;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl From<WeekDay> for String {
    fn from(week_day: WeekDay) -> Self {
        week_day.to_string()
    }
}
