mod consts;
mod convert;
mod error;
mod format;
mod locale;
mod parse;
mod prelude;
mod types;

pub use consts::*;
pub use convert::{
    check_jalali_date, datetime_to_jalali, gregorian_to_jalali, is_valid_jalali_date,
    jalali_to_date, jalali_to_gregorian,
};
pub use error::DateError;
pub use format::{
    JalaliFormatter, format_datetime, format_jalali_date, get_weekday, get_weekday_name,
};
pub use locale::{
    FormatStyle, Locale, MONTHS_EN, MONTHS_FA, WEEKDAYS_EN, WEEKDAYS_FA, normalize_digits,
    to_persian_digits,
};
pub use parse::parse_jalali_date;
pub use types::{Day, Month, Year, days_in_month, is_gregorian_leap_year, is_leap_year};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use std::str::FromStr;

/// A validated date in the Jalali (Persian solar Hijri) calendar.
///
/// Holds the equivalent proleptic Gregorian date alongside the Jalali
/// components, so weekday lookups and formatting cannot fail once a value
/// exists. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}/{:02}/{:02}", "year.get()", "month.get()", "day.get()")]
pub struct JalaliDate {
    year: Year,
    month: Month,
    day: Day,
    gregorian: NaiveDate,
}

impl JalaliDate {
    /// Creates a date from Jalali components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `InvalidMonth` or `InvalidDay` for a
    /// date that does not exist, and `DateError::OutOfRange` if chrono cannot
    /// hold the Gregorian equivalent.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        let year_typed = Year::new(year)?;
        let month_typed = Month::new(month)?;
        let day_typed = Day::new(day, year, month)?;

        let (gy, gm, gd) = jalali_to_gregorian(year, month, day);
        let gregorian = NaiveDate::from_ymd_opt(gy, gm, gd).ok_or(DateError::OutOfRange {
            year: gy,
            month: gm,
            day: gd,
        })?;

        Ok(Self {
            year: year_typed,
            month: month_typed,
            day: day_typed,
            gregorian,
        })
    }

    /// Creates the Jalali date for a Gregorian date.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for dates before 1 Farvardin 1 (622-03-21)
    /// or after the last day of `MAX_YEAR`.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, DateError> {
        let (jy, jm, jd) = datetime_to_jalali(&date);
        Self::from_ymd(jy, jm, jd).map_err(|err| {
            tracing::debug!(%date, %err, "Gregorian date outside the Jalali range");
            DateError::OutOfRange {
                year: date.year(),
                month: date.month(),
                day: date.day(),
            }
        })
    }

    /// Creates the Jalali date for Gregorian components.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the components are not a real
    /// Gregorian date or fall outside the Jalali range.
    pub fn from_gregorian_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(DateError::OutOfRange { year, month, day })
            .and_then(Self::from_gregorian)
    }

    /// Creates the Jalali date for the calendar date of any chrono value.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the date falls outside the Jalali range.
    pub fn from_datelike<D: Datelike>(dt: &D) -> Result<Self, DateError> {
        Self::from_gregorian_ymd(dt.year(), dt.month(), dt.day())
    }

    /// Returns the year component
    pub fn year(&self) -> i32 {
        self.year.into()
    }

    /// Returns the month component (1 = Farvardin)
    pub fn month(&self) -> u32 {
        self.month.into()
    }

    /// Returns the day component
    pub fn day(&self) -> u32 {
        self.day.into()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns the components as a `(year, month, day)` tuple
    pub fn to_ymd(&self) -> (i32, u32, u32) {
        (self.year(), self.month(), self.day())
    }

    /// Returns the proleptic Gregorian equivalent
    pub const fn to_naive_date(&self) -> NaiveDate {
        self.gregorian
    }

    /// Saturday-first weekday: 0 = Saturday ... 6 = Friday
    pub fn weekday(&self) -> u32 {
        get_weekday(&self.gregorian)
    }

    /// Weekday name in the given locale
    pub fn weekday_name(&self, locale: Locale) -> &'static str {
        get_weekday_name(&self.gregorian, locale)
    }

    /// Whether this date's year has a 30-day Esfand
    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Length of this date's month
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }
}

impl FromStr for JalaliDate {
    type Err = DateError;

    /// Accepts `YYYY/M/D` or `D <month> Y` with Persian or English month
    /// names, then validates the result.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (year, month, day) = parse_jalali_date(trimmed, Locale::Persian)
            .or_else(|| parse_jalali_date(trimmed, Locale::English))
            .ok_or_else(|| DateError::InvalidFormat(trimmed.to_owned()))?;

        Self::from_ymd(year, month, day).inspect_err(|err| {
            tracing::debug!(input = trimmed, %err, "rejected Jalali date");
        })
    }
}

impl TryFrom<(i32, u32, u32)> for JalaliDate {
    type Error = DateError;

    fn try_from(value: (i32, u32, u32)) -> Result<Self, Self::Error> {
        Self::from_ymd(value.0, value.1, value.2)
    }
}

impl TryFrom<NaiveDate> for JalaliDate {
    type Error = DateError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_gregorian(value)
    }
}

impl From<JalaliDate> for NaiveDate {
    fn from(date: JalaliDate) -> Self {
        date.gregorian
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
