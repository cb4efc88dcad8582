use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, ESFAND, ESFAND_DAYS_LEAP, GREGORIAN_CYCLE, JALALI_CYCLE_YEARS,
    LEAP_RESIDUES, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A Jalali year guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's in `1..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is below 1 or above `MAX_YEAR`.
    pub fn new(value: i32) -> Result<Self, DateError> {
        u16::try_from(value)
            .ok()
            .filter(|year| *year <= MAX_YEAR)
            .and_then(NonZeroU16::new)
            .map(Self)
            .ok_or(DateError::InvalidYear(value))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this year has a 30-day Esfand
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0.get() as i32)
    }
}

impl TryFrom<i32> for Year {
    type Error = DateError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        Self::from(year.0.get())
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Jalali month guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's in `1..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u32) -> Result<Self, DateError> {
        u8::try_from(value)
            .ok()
            .filter(|month| *month <= MAX_MONTH)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(DateError::InvalidMonth(value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u32> for Month {
    type Error = DateError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        Self::from(month.0.get())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given Jalali year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of the given month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u32, year: i32, month: u32) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            year,
            month,
            day: value,
        };
        if value > days_in_month(year, month) {
            return Err(invalid);
        }
        u8::try_from(value)
            .ok()
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(invalid)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u32> for Day {
    type Error = DateError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so only the widest month applies
        let widest = u32::from(DAYS_IN_MONTH[1]);
        u8::try_from(value)
            .ok()
            .filter(|day| u32::from(*day) <= widest && *day >= MIN_DAY)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(DateError::InvalidDay {
                year: 0,
                month: 0,
                day: value,
            })
    }
}

impl From<Day> for u32 {
    fn from(day: Day) -> Self {
        Self::from(day.0.get())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Jalali leap year by the 33-year residue rule.
///
/// This is the arithmetic approximation of the astronomical calendar; it
/// agrees with the day-count conversion in this crate for every year.
pub const fn is_leap_year(year: i32) -> bool {
    let residue = year.rem_euclid(JALALI_CYCLE_YEARS);
    let mut i = 0;
    while i < LEAP_RESIDUES.len() {
        if LEAP_RESIDUES[i] == residue {
            return true;
        }
        i += 1;
    }
    false
}

/// Number of days in a Jalali month, or 0 for a month outside `1..=12`.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 0 || month > MAX_MONTH as u32 {
        return 0;
    }
    if month == ESFAND as u32 && is_leap_year(year) {
        ESFAND_DAYS_LEAP as u32
    } else {
        DAYS_IN_MONTH[month as usize] as u32
    }
}

/// Proleptic Gregorian leap year.
pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(1403).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(0), Err(DateError::InvalidYear(0))));
        assert!(matches!(Year::new(-5), Err(DateError::InvalidYear(-5))));
        assert!(matches!(
            Year::new(10000),
            Err(DateError::InvalidYear(10000))
        ));
        assert!(matches!(
            Year::new(70000),
            Err(DateError::InvalidYear(70000))
        ));
    }

    #[test]
    fn test_year_leap() {
        assert!(Year::new(1403).unwrap().is_leap());
        assert!(!Year::new(1404).unwrap().is_leap());
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(1403).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "1403");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        assert!(serde_json::from_str::<Year>("0").is_err());
    }

    #[test]
    fn test_month_new() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(DateError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(DateError::InvalidMonth(13))));
        assert!(matches!(Month::new(256), Err(DateError::InvalidMonth(256))));
    }

    #[test]
    fn test_month_display_and_into() {
        let month = Month::new(8).unwrap();
        assert_eq!(month.to_string(), "8");
        let value: u32 = month.into();
        assert_eq!(value, 8);
    }

    #[test]
    fn test_day_new_valid() {
        // First half - 31 days
        assert!(Day::new(31, 1403, 1).is_ok());
        assert!(Day::new(31, 1403, 6).is_ok());

        // Second half - 30 days
        assert!(Day::new(30, 1403, 7).is_ok());
        assert!(Day::new(31, 1403, 7).is_err());

        // Esfand, leap year - 30 days
        assert!(Day::new(30, 1403, 12).is_ok());
        assert!(Day::new(31, 1403, 12).is_err());

        // Esfand, common year - 29 days
        assert!(Day::new(29, 1404, 12).is_ok());
        assert!(Day::new(30, 1404, 12).is_err());
    }

    #[test]
    fn test_day_new_invalid() {
        assert!(matches!(
            Day::new(0, 1403, 1),
            Err(DateError::InvalidDay { day: 0, .. })
        ));
        assert!(matches!(
            Day::new(32, 1403, 1),
            Err(DateError::InvalidDay {
                year: 1403,
                month: 1,
                day: 32
            })
        ));
        assert!(Day::new(300, 1403, 1).is_err());
    }

    #[test]
    fn test_day_try_from_u32() {
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);

        let result: Result<Day, _> = 0.try_into();
        assert!(result.is_err());
        let result: Result<Day, _> = 32.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
        }

        let cases = [
            TestCase { year: 1399, is_leap: true },
            TestCase { year: 1400, is_leap: false },
            TestCase { year: 1403, is_leap: true },
            TestCase { year: 1404, is_leap: false },
            TestCase { year: 1407, is_leap: false },
            TestCase { year: 1408, is_leap: true },
            TestCase { year: 1375, is_leap: true },
            TestCase { year: 1, is_leap: true },
            TestCase { year: 33, is_leap: false },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} (residue {})",
                case.year,
                case.year % 33
            );
        }
    }

    #[test]
    fn test_leap_years_per_cycle() {
        let leaps = (1..=33).filter(|y| is_leap_year(*y)).count();
        assert_eq!(leaps, LEAP_RESIDUES.len());
    }

    #[test]
    fn test_days_in_month() {
        for month in 1..=6 {
            assert_eq!(days_in_month(1404, month), 31, "Month {month}");
        }
        for month in 7..=11 {
            assert_eq!(days_in_month(1404, month), 30, "Month {month}");
        }
        assert_eq!(days_in_month(1404, 12), 29);
        assert_eq!(days_in_month(1403, 12), 30);
        assert_eq!(days_in_month(1403, 0), 0);
        assert_eq!(days_in_month(1403, 13), 0);
    }

    #[test]
    fn test_year_lengths() {
        let common: u32 = (1..=12).map(|m| days_in_month(1404, m)).sum();
        let leap: u32 = (1..=12).map(|m| days_in_month(1403, m)).sum();
        assert_eq!(common, 365);
        assert_eq!(leap, 366);
    }

    #[test]
    fn test_gregorian_leap_year() {
        assert!(is_gregorian_leap_year(2024));
        assert!(is_gregorian_leap_year(2000));
        assert!(!is_gregorian_leap_year(1900));
        assert!(!is_gregorian_leap_year(2025));
    }
}
