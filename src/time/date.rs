use core::fmt;
use core::iter;
use core::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::WeekDay;

#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        const _DATE: ::core::option::Option<$crate::time::Date> =
            $crate::time::Date::from_ymd_opt($year, $month, $day);

        // validate the date
        static_assertions::const_assert!(_DATE.is_some());

        match _DATE {
            ::core::option::Option::Some(date) => date,
            ::core::option::Option::None => unreachable!(),
        }
    }};
}

/// A day of the proleptic gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct Date {
    inner: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{input}\" is not valid date. Expected format: \"YYYY-MM-DD\"")]
pub struct InvalidDate {
    input: String,
    source: chrono::ParseError,
}

impl Date {
    /// Returns `None` if the day does not exist, like `2023-02-29`.
    #[must_use]
    pub const fn from_ymd_opt(year: i32, month: u32, day: u32) -> Option<Self> {
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(inner) => Some(Self { inner }),
            None => None,
        }
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.inner.month()
    }

    #[must_use]
    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    #[must_use]
    pub fn week_day(&self) -> WeekDay {
        self.inner.weekday().into()
    }

    /// Returns `None` for the last date chrono can represent.
    #[must_use]
    pub const fn next_day(self) -> Option<Self> {
        match self.inner.succ_opt() {
            Some(inner) => Some(Self { inner }),
            None => None,
        }
    }

    /// Returns the number of days that have passed between `self` and `other`.
    ///
    /// The result is negative if `other` is before `self`.
    #[must_use]
    pub fn days_until(&self, other: Self) -> i64 {
        other.inner.signed_duration_since(self.inner).num_days()
    }

    /// Iterates over every date from `self` to `last` (inclusive).
    ///
    /// The iterator is empty if `last` is before `self`.
    pub fn iter_through(self, last: Self) -> impl Iterator<Item = Self> + Clone {
        iter::successors(Some(self).filter(|date| *date <= last), move |date| {
            date.next_day().filter(|next| *next <= last)
        })
    }
}

impl From<NaiveDate> for Date {
    fn from(inner: NaiveDate) -> Self {
        Self { inner }
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.inner
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = InvalidDate;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(string, "%Y-%m-%d")
            .map(Self::from)
            .map_err(|source| InvalidDate {
                input: string.to_string(),
                source,
            })
    }
}

impl TryFrom<String> for Date {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl From<Date> for String {
    fn from(date: Date) -> Self {
        date.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[must_use]
    fn sort_array<T: Ord, const N: usize>(mut array: [T; N]) -> [T; N] {
        array.sort();
        array
    }

    #[test]
    fn test_date_sorting() {
        assert_eq!(
            sort_array([date!(2022:01:03), date!(2022:01:02), date!(2022:01:01)]),
            [date!(2022:01:01), date!(2022:01:02), date!(2022:01:03)]
        );

        assert_eq!(
            sort_array([date!(2000:01:01), date!(2000:04:01), date!(2000:03:01)]),
            [date!(2000:01:01), date!(2000:03:01), date!(2000:04:01)]
        );
    }

    #[test]
    fn test_from_ymd_opt() {
        assert_eq!(Date::from_ymd_opt(2024, 2, 29).map(|date| date.day()), Some(29));
        assert_eq!(Date::from_ymd_opt(2023, 2, 29), None);
        assert_eq!(Date::from_ymd_opt(2023, 13, 1), None);
    }

    #[test]
    fn test_next_day() {
        assert_eq!(date!(2022:01:31).next_day(), Some(date!(2022:02:01)));
        assert_eq!(date!(2023:02:28).next_day(), Some(date!(2023:03:01)));
        assert_eq!(date!(2024:02:28).next_day(), Some(date!(2024:02:29)));
        assert_eq!(date!(2022:12:31).next_day(), Some(date!(2023:01:01)));
        assert_eq!(Date::from(NaiveDate::MAX).next_day(), None);
    }

    #[test]
    fn test_week_day() {
        assert_eq!(date!(1970:01:01).week_day(), WeekDay::Thursday);
        assert_eq!(date!(1969:12:28).week_day(), WeekDay::Sunday);
        assert_eq!(date!(2018:07:04).week_day(), WeekDay::Wednesday);
        assert_eq!(date!(2024:02:29).week_day(), WeekDay::Thursday);
    }

    #[test]
    fn test_days_until() {
        assert_eq!(date!(2022:01:01).days_until(date!(2022:01:01)), 0);
        assert_eq!(date!(2022:01:01).days_until(date!(2023:01:01)), 365);
        assert_eq!(date!(2023:01:01).days_until(date!(2022:01:01)), -365);
    }

    #[test]
    fn test_iter_through() {
        assert_eq!(
            date!(2022:02:27)
                .iter_through(date!(2022:03:02))
                .collect::<Vec<_>>(),
            vec![
                date!(2022:02:27),
                date!(2022:02:28),
                date!(2022:03:01),
                date!(2022:03:02)
            ]
        );

        assert_eq!(
            date!(2022:02:27).iter_through(date!(2022:02:27)).count(),
            1
        );
        assert_eq!(
            date!(2022:02:27).iter_through(date!(2022:02:26)).count(),
            0
        );

        let last = Date::from(NaiveDate::MAX);
        assert_eq!(last.iter_through(last).count(), 1);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("2018-07-04".parse::<Date>(), Ok(date!(2018:07:04)));
        assert_eq!(date!(2018:07:04).to_string(), "2018-07-04");
        assert_eq!(date!(0987:01:02).to_string(), "0987-01-02");
        assert!("2018-02-30".parse::<Date>().is_err());
        assert!("2018-13-01".parse::<Date>().is_err());
        assert!("yesterday".parse::<Date>().is_err());
    }
}
