//! Day-count conversion between the proleptic Gregorian and Jalali calendars.
//!
//! Both directions reduce a date to an absolute day count and then resolve it
//! through the other calendar's cycles. All arithmetic is integer and uses
//! floor division, so the functions are total: they never panic, although an
//! invalid input date produces a meaningless result. Validate untrusted Jalali
//! input with [`is_valid_jalali_date`] first.

use chrono::{Datelike, NaiveDate};

use crate::DateError;
use crate::consts::{
    DAYS_PER_4_YEARS, DAYS_PER_33_YEARS, DAYS_PER_100_YEARS, DAYS_PER_400_YEARS, DAYS_PER_YEAR,
    FARVARDIN, FIRST_HALF_DAYS, FIRST_HALF_MONTH_DAYS, GREGORIAN_DAYS_BEFORE_MONTH,
    GREGORIAN_EPOCH_OFFSET, GREGORIAN_MONTH_DAYS_COMMON, GREGORIAN_MONTH_DAYS_LEAP,
    JALALI_CYCLE_YEARS, JALALI_EPOCH_OFFSET, JALALI_YEAR_BASE, LEAP_DAYS_PER_33_YEARS, MAX_MONTH,
    MEHR, SECOND_HALF_MONTH_DAYS,
};
use crate::types::{days_in_month, is_gregorian_leap_year};

/// Converts a Gregorian date to the Jalali calendar.
///
/// ```
/// assert_eq!(jalali_date::gregorian_to_jalali(2024, 3, 20), (1403, 1, 1));
/// ```
pub const fn gregorian_to_jalali(year: i32, month: u32, day: u32) -> (i32, u32, u32) {
    // Only the table lookup needs a bounded month.
    let month = if month < 1 {
        1
    } else if month > MAX_MONTH as u32 {
        MAX_MONTH as u32
    } else {
        month
    };

    let gy = year as i64;
    // Leap days are counted up to the end of February of the current year.
    let gy2 = if month > 2 { gy + 1 } else { gy };
    let mut days = GREGORIAN_EPOCH_OFFSET
        + DAYS_PER_YEAR * gy
        + (gy2 + 3).div_euclid(4)
        - (gy2 + 99).div_euclid(100)
        + (gy2 + 399).div_euclid(400)
        + day as i64
        + GREGORIAN_DAYS_BEFORE_MONTH[(month - 1) as usize];

    let mut jy = JALALI_YEAR_BASE + JALALI_CYCLE_YEARS as i64 * days.div_euclid(DAYS_PER_33_YEARS);
    days = days.rem_euclid(DAYS_PER_33_YEARS);
    jy += 4 * days.div_euclid(DAYS_PER_4_YEARS);
    days = days.rem_euclid(DAYS_PER_4_YEARS);
    if days > DAYS_PER_YEAR {
        jy += (days - 1).div_euclid(DAYS_PER_YEAR);
        days = (days - 1).rem_euclid(DAYS_PER_YEAR);
    }

    let (jm, jd) = if days < FIRST_HALF_DAYS {
        (
            FARVARDIN as i64 + days / FIRST_HALF_MONTH_DAYS,
            1 + days % FIRST_HALF_MONTH_DAYS,
        )
    } else {
        (
            MEHR as i64 + (days - FIRST_HALF_DAYS) / SECOND_HALF_MONTH_DAYS,
            1 + (days - FIRST_HALF_DAYS) % SECOND_HALF_MONTH_DAYS,
        )
    };

    (jy as i32, jm as u32, jd as u32)
}

/// Converts a Jalali date to the proleptic Gregorian calendar.
///
/// ```
/// assert_eq!(jalali_date::jalali_to_gregorian(1357, 11, 22), (1979, 2, 11));
/// ```
pub const fn jalali_to_gregorian(year: i32, month: u32, day: u32) -> (i32, u32, u32) {
    let mut days = jalali_day_number(year, month, day);

    let mut gy = 400 * days.div_euclid(DAYS_PER_400_YEARS);
    days = days.rem_euclid(DAYS_PER_400_YEARS);
    if days > DAYS_PER_100_YEARS {
        days -= 1;
        gy += 100 * days.div_euclid(DAYS_PER_100_YEARS);
        days = days.rem_euclid(DAYS_PER_100_YEARS);
        if days >= DAYS_PER_YEAR {
            days += 1;
        }
    }
    gy += 4 * days.div_euclid(DAYS_PER_4_YEARS);
    days = days.rem_euclid(DAYS_PER_4_YEARS);
    if days > DAYS_PER_YEAR {
        gy += (days - 1).div_euclid(DAYS_PER_YEAR);
        days = (days - 1).rem_euclid(DAYS_PER_YEAR);
    }

    let table = if is_gregorian_leap_year(gy as i32) {
        &GREGORIAN_MONTH_DAYS_LEAP
    } else {
        &GREGORIAN_MONTH_DAYS_COMMON
    };
    let mut gd = days + 1;
    let mut gm = 0;
    while gm < table.len() && gd > table[gm] {
        gd -= table[gm];
        gm += 1;
    }

    (gy as i32, gm as u32, gd as u32)
}

/// Absolute day count of a Jalali date, shared by the Gregorian resolution and
/// weekday lookups. Day numbers are congruent to the Saturday-first weekday
/// modulo 7.
pub(crate) const fn jalali_day_number(year: i32, month: u32, day: u32) -> i64 {
    let jy = year as i64 - JALALI_YEAR_BASE;
    let jm = month as i64;
    let month_offset = if jm < MEHR as i64 {
        (jm - 1) * FIRST_HALF_MONTH_DAYS
    } else {
        (jm - MEHR as i64) * SECOND_HALF_MONTH_DAYS + FIRST_HALF_DAYS
    };
    let cycle = JALALI_CYCLE_YEARS as i64;
    JALALI_EPOCH_OFFSET
        + DAYS_PER_YEAR * jy
        + jy.div_euclid(cycle) * LEAP_DAYS_PER_33_YEARS
        + (jy.rem_euclid(cycle) + 3).div_euclid(4)
        + day as i64
        + month_offset
}

/// Checks that a Jalali date exists.
///
/// Fails when the year is below 1, the month is outside `1..=12`, or the day
/// is zero or past the end of the month (Esfand has 30 days in leap years).
pub const fn is_valid_jalali_date(year: i32, month: u32, day: u32) -> bool {
    year >= 1 && day >= 1 && day <= days_in_month(year, month)
}

/// Like [`is_valid_jalali_date`], but names the offending component.
///
/// # Errors
/// Returns `DateError::InvalidYear` for a year below 1, `InvalidMonth` outside
/// `1..=12` and `InvalidDay` for a day the month does not have.
pub fn check_jalali_date(year: i32, month: u32, day: u32) -> Result<(), DateError> {
    if year < 1 {
        Err(DateError::InvalidYear(year))
    } else if month < FARVARDIN as u32 || month > MAX_MONTH as u32 {
        Err(DateError::InvalidMonth(month))
    } else if !is_valid_jalali_date(year, month, day) {
        Err(DateError::InvalidDay { year, month, day })
    } else {
        Ok(())
    }
}

/// Jalali `(year, month, day)` of any chrono date or timestamp.
pub fn datetime_to_jalali<D: Datelike>(dt: &D) -> (i32, u32, u32) {
    gregorian_to_jalali(dt.year(), dt.month(), dt.day())
}

/// Validates a Jalali date and returns the matching Gregorian `NaiveDate`.
///
/// # Errors
/// Returns the validation error for an invalid date, or `DateError::OutOfRange`
/// if chrono cannot represent the result.
pub fn jalali_to_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, DateError> {
    crate::JalaliDate::from_ymd(year, month, day).map(|date| date.to_naive_date())
}
