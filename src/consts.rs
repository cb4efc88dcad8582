/// Maximum valid Jalali year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for Farvardin, the first month of the Jalali year
pub const FARVARDIN: u8 = 1;
/// Month number for Mehr, the first 30-day month
pub const MEHR: u8 = 7;
/// Month number for Esfand, whose length depends on the leap year
pub const ESFAND: u8 = 12;

/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Days in each Jalali month (index 0 is unused, months are 1-indexed)
/// Esfand shows 29 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (non-leap, adjusted by is_leap_year check)
];

/// Days in the first half of the Jalali year (six 31-day months)
pub(crate) const FIRST_HALF_DAYS: i64 = 186;

/// Length of a Jalali month in the first half of the year
pub(crate) const FIRST_HALF_MONTH_DAYS: i64 = 31;

/// Length of a Jalali month in the second half of the year (except a non-leap Esfand)
pub(crate) const SECOND_HALF_MONTH_DAYS: i64 = 30;

/// Residues of `year % 33` that mark a Jalali leap year
pub const LEAP_RESIDUES: [i32; 8] = [1, 5, 9, 13, 17, 22, 26, 30];

/// Length of the Jalali intercalation cycle in years
pub(crate) const JALALI_CYCLE_YEARS: i32 = 33;

// Epoch alignment between Jalali year 1 and the proleptic Gregorian calendar.
// Changing any of these shifts every converted date.

/// Day-count offset used when converting Gregorian to Jalali
pub(crate) const GREGORIAN_EPOCH_OFFSET: i64 = 355_666;
/// Day-count offset used when converting Jalali to Gregorian
pub(crate) const JALALI_EPOCH_OFFSET: i64 = -355_668;
/// Jalali year reached at day count zero
pub(crate) const JALALI_YEAR_BASE: i64 = -1595;
/// Days in a 33-year Jalali block
pub(crate) const DAYS_PER_33_YEARS: i64 = 12_053;
/// Leap days in a 33-year Jalali block
pub(crate) const LEAP_DAYS_PER_33_YEARS: i64 = 8;
/// Days in a 4-year block (one leap day)
pub(crate) const DAYS_PER_4_YEARS: i64 = 1461;
/// Days in a 400-year Gregorian cycle
pub(crate) const DAYS_PER_400_YEARS: i64 = 146_097;
/// Days in a Gregorian century without a 400-year leap day
pub(crate) const DAYS_PER_100_YEARS: i64 = 36_524;
/// Days in a common year
pub(crate) const DAYS_PER_YEAR: i64 = 365;

/// Days elapsed before the first of each Gregorian month in a common year
pub(crate) const GREGORIAN_DAYS_BEFORE_MONTH: [i64; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Gregorian month lengths in a leap year (index 0 is a zero-length sentinel)
pub(crate) const GREGORIAN_MONTH_DAYS_LEAP: [i64; 13] =
    [0, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
/// Gregorian month lengths in a common year (index 0 is a zero-length sentinel)
pub(crate) const GREGORIAN_MONTH_DAYS_COMMON: [i64; 13] =
    [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in a week
pub(crate) const DAYS_PER_WEEK: u32 = 7;
