//! Error types for the jalali_date crate.

/// Error type for all fallible operations in the jalali_date crate.
///
/// Conversions themselves never fail; these errors come from validating
/// Jalali components, resolving locale and style identifiers, and reading
/// dates from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Jalali year outside `1..=MAX_YEAR`.
    #[error("Invalid year: {0} (must be 1-9999)")]
    InvalidYear(i32),

    /// Jalali month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u32),

    /// Day is zero or past the end of the month.
    #[error("Invalid day {day} for month {year}/{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },

    /// Style identifier is not one of `full`, `short`, `numeric`.
    #[error("Unknown format style: {0}")]
    UnknownFormatStyle(String),

    /// Locale identifier is neither Persian nor English.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Text did not match any supported date pattern.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Gregorian components are not a real date, or have no Jalali counterpart in range.
    #[error("Gregorian date {year}-{month:02}-{day:02} is invalid or outside the supported Jalali range")]
    OutOfRange { year: i32, month: u32, day: u32 },
}
