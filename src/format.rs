//! Rendering Jalali dates as text, and Saturday-first weekdays.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::consts::DAYS_PER_WEEK;
use crate::convert::{check_jalali_date, jalali_day_number};
use crate::locale::to_persian_digits;
use crate::parse::parse_jalali_date;
use crate::{DateError, FormatStyle, JalaliDate, Locale};

/// Saturday-first weekday of a date or timestamp: 0 = Saturday ... 6 = Friday.
pub fn get_weekday<D: Datelike>(dt: &D) -> u32 {
    (dt.weekday().num_days_from_sunday() + 1) % DAYS_PER_WEEK
}

/// Weekday name of a date or timestamp in the given locale.
pub fn get_weekday_name<D: Datelike>(dt: &D, locale: Locale) -> &'static str {
    locale.weekday_names()[get_weekday(dt) as usize]
}

fn render(year: i32, month: u32, day: u32, locale: Locale, style: FormatStyle) -> String {
    let month_name = locale.month_name(month).unwrap_or_default();
    match style {
        FormatStyle::Numeric => format!("{year:04}/{month:02}/{day:02}"),
        FormatStyle::Short => format!("{day} {month_name} {year}"),
        FormatStyle::Full => {
            let index = jalali_day_number(year, month, day).rem_euclid(i64::from(DAYS_PER_WEEK));
            let weekday = locale.weekday_names()[index as usize];
            match locale {
                Locale::Persian => format!("{weekday} {day} {month_name} {year}"),
                Locale::English => format!("{weekday}, {day} {month_name} {year}"),
            }
        }
    }
}

impl JalaliDate {
    /// Renders this date in the given locale and style.
    ///
    /// ```
    /// use jalali_date::{FormatStyle, JalaliDate, Locale};
    ///
    /// let nowruz = JalaliDate::from_ymd(1403, 1, 1).unwrap();
    /// assert_eq!(
    ///     nowruz.format(Locale::English, FormatStyle::Full),
    ///     "Wednesday, 1 Farvardin 1403"
    /// );
    /// ```
    pub fn format(&self, locale: Locale, style: FormatStyle) -> String {
        render(self.year(), self.month(), self.day(), locale, style)
    }
}

/// Validates and renders a Jalali date.
///
/// Any date accepted by [`is_valid_jalali_date`](crate::is_valid_jalali_date)
/// renders, including years past `MAX_YEAR`.
///
/// # Errors
/// Returns the validation error if the date does not exist.
pub fn format_jalali_date(
    year: i32,
    month: u32,
    day: u32,
    locale: Locale,
    style: FormatStyle,
) -> Result<String, DateError> {
    check_jalali_date(year, month, day)?;
    Ok(render(year, month, day, locale, style))
}

/// Renders the Jalali date of a Gregorian date or timestamp.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the date falls outside the Jalali range.
pub fn format_datetime<D: Datelike>(
    dt: &D,
    locale: Locale,
    style: FormatStyle,
) -> Result<String, DateError> {
    let date = JalaliDate::from_datelike(dt)?;
    Ok(date.format(locale, style))
}

/// Formatting preferences, deserializable from a host application's config.
///
/// Missing fields fall back to Persian, full style and ASCII digits.
///
/// ```
/// use jalali_date::{FormatStyle, JalaliFormatter, Locale};
///
/// let formatter: JalaliFormatter = serde_json::from_str(r#"{"style": "numeric"}"#).unwrap();
/// assert_eq!(formatter.locale, Locale::Persian);
/// assert_eq!(formatter.format_ymd(1403, 1, 1).unwrap(), "1403/01/01");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct JalaliFormatter {
    pub locale: Locale,
    pub style: FormatStyle,
    /// Render Extended Arabic-Indic digits instead of ASCII digits
    pub persian_digits: bool,
}

impl JalaliFormatter {
    /// Formatter with ASCII digits
    pub const fn new(locale: Locale, style: FormatStyle) -> Self {
        Self {
            locale,
            style,
            persian_digits: false,
        }
    }

    /// Switches between Persian and ASCII output digits
    pub const fn with_persian_digits(mut self, enabled: bool) -> Self {
        self.persian_digits = enabled;
        self
    }

    /// Renders a validated date with these preferences
    pub fn format(&self, date: &JalaliDate) -> String {
        self.apply_digits(date.format(self.locale, self.style))
    }

    fn apply_digits(&self, text: String) -> String {
        if self.persian_digits {
            to_persian_digits(&text)
        } else {
            text
        }
    }

    /// Validates and renders Jalali components with these preferences.
    ///
    /// # Errors
    /// Returns the validation error if the date does not exist.
    pub fn format_ymd(&self, year: i32, month: u32, day: u32) -> Result<String, DateError> {
        format_jalali_date(year, month, day, self.locale, self.style)
            .map(|text| self.apply_digits(text))
    }

    /// # Errors
    /// Returns `DateError::OutOfRange` if the date falls outside the Jalali range.
    pub fn format_datetime<D: Datelike>(&self, dt: &D) -> Result<String, DateError> {
        JalaliDate::from_datelike(dt).map(|date| self.format(&date))
    }

    /// Reads a date in this formatter's locale, accepting either digit set.
    /// Returns `None` for text that matches no pattern or names no real date.
    pub fn parse(&self, text: &str) -> Option<JalaliDate> {
        let (year, month, day) = parse_jalali_date(text, self.locale)?;
        JalaliDate::from_ymd(year, month, day).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_get_weekday() {
        assert_eq!(get_weekday(&date(2024, 3, 23)), 0); // Saturday
        assert_eq!(get_weekday(&date(1979, 2, 11)), 1); // Sunday
        assert_eq!(get_weekday(&date(2024, 3, 20)), 4); // Wednesday
        assert_eq!(get_weekday(&date(1970, 1, 1)), 5); // Thursday
        assert_eq!(get_weekday(&date(2026, 3, 20)), 6); // Friday
    }

    #[test]
    fn test_get_weekday_name() {
        let nowruz = date(2024, 3, 20);
        assert_eq!(get_weekday_name(&nowruz, Locale::English), "Wednesday");
        assert_eq!(get_weekday_name(&nowruz, Locale::Persian), "چهارشنبه");

        let timestamp = date(2024, 3, 23).and_hms_opt(8, 30, 0).unwrap();
        assert_eq!(get_weekday_name(&timestamp, Locale::Persian), "شنبه");
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(
            format_jalali_date(1403, 1, 1, Locale::Persian, FormatStyle::Numeric).unwrap(),
            "1403/01/01"
        );
        assert_eq!(
            format_jalali_date(1403, 1, 1, Locale::English, FormatStyle::Numeric).unwrap(),
            "1403/01/01"
        );
        assert_eq!(
            format_jalali_date(5, 12, 30, Locale::Persian, FormatStyle::Numeric).unwrap(),
            "0005/12/30"
        );
    }

    #[test]
    fn test_format_short() {
        assert_eq!(
            format_jalali_date(1357, 11, 22, Locale::English, FormatStyle::Short).unwrap(),
            "22 Bahman 1357"
        );
        assert_eq!(
            format_jalali_date(1357, 11, 22, Locale::Persian, FormatStyle::Short).unwrap(),
            "22 بهمن 1357"
        );
    }

    #[test]
    fn test_format_full() {
        assert_eq!(
            format_jalali_date(1403, 1, 1, Locale::English, FormatStyle::Full).unwrap(),
            "Wednesday, 1 Farvardin 1403"
        );
        assert_eq!(
            format_jalali_date(1403, 1, 1, Locale::Persian, FormatStyle::Full).unwrap(),
            "چهارشنبه 1 فروردین 1403"
        );
        assert_eq!(
            format_jalali_date(1357, 11, 22, Locale::English, FormatStyle::Full).unwrap(),
            "Sunday, 22 Bahman 1357"
        );
        assert_eq!(
            format_jalali_date(1403, 12, 30, Locale::English, FormatStyle::Full).unwrap(),
            "Thursday, 30 Esfand 1403"
        );
    }

    #[test]
    fn test_format_invalid_date() {
        assert!(matches!(
            format_jalali_date(1404, 12, 30, Locale::Persian, FormatStyle::Numeric),
            Err(DateError::InvalidDay { .. })
        ));
        assert!(matches!(
            format_jalali_date(1403, 13, 1, Locale::Persian, FormatStyle::Full),
            Err(DateError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_format_beyond_max_year() {
        assert!(crate::is_valid_jalali_date(10_000, 1, 1));
        assert_eq!(
            format_jalali_date(10_000, 1, 1, Locale::Persian, FormatStyle::Numeric).unwrap(),
            "10000/01/01"
        );
        assert_eq!(
            format_jalali_date(10_000, 1, 1, Locale::English, FormatStyle::Full).unwrap(),
            "Tuesday, 1 Farvardin 10000"
        );
        let formatter = JalaliFormatter::new(Locale::English, FormatStyle::Short);
        assert_eq!(
            formatter.format_ymd(12_345, 12, 29).unwrap(),
            "29 Esfand 12345"
        );
    }

    #[test]
    fn test_full_weekday_matches_gregorian_weekday() {
        let dates = [(1, 1, 1), (1357, 11, 22), (1403, 6, 31), (1403, 12, 30)];
        for (year, month, day) in dates {
            let date = JalaliDate::from_ymd(year, month, day).unwrap();
            let expected = format!(
                "{}, {day} {} {year}",
                date.weekday_name(Locale::English),
                Locale::English.month_name(month).unwrap()
            );
            assert_eq!(
                format_jalali_date(year, month, day, Locale::English, FormatStyle::Full).unwrap(),
                expected
            );
        }
    }

    #[test]
    fn test_format_unknown_style_identifier() {
        let style = "long".parse::<FormatStyle>();
        assert!(matches!(style, Err(DateError::UnknownFormatStyle(_))));
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime(&date(2024, 3, 20), Locale::English, FormatStyle::Full).unwrap(),
            "Wednesday, 1 Farvardin 1403"
        );
        let timestamp = date(1979, 2, 11).and_hms_opt(12, 0, 0).unwrap().and_utc();
        assert_eq!(
            format_datetime(&timestamp, Locale::Persian, FormatStyle::Numeric).unwrap(),
            "1357/11/22"
        );
        assert!(matches!(
            format_datetime(&date(600, 1, 1), Locale::Persian, FormatStyle::Numeric),
            Err(DateError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_formatter_defaults() {
        let formatter = JalaliFormatter::default();
        assert_eq!(formatter.locale, Locale::Persian);
        assert_eq!(formatter.style, FormatStyle::Full);
        assert!(!formatter.persian_digits);
        assert_eq!(
            formatter.format_ymd(1403, 1, 1).unwrap(),
            "چهارشنبه 1 فروردین 1403"
        );
    }

    #[test]
    fn test_formatter_persian_digits() {
        let formatter = JalaliFormatter::new(Locale::Persian, FormatStyle::Numeric)
            .with_persian_digits(true);
        assert_eq!(formatter.format_ymd(1403, 1, 1).unwrap(), "۱۴۰۳/۰۱/۰۱");
        assert_eq!(
            formatter.parse("۱۴۰۳/۰۱/۰۱"),
            JalaliDate::from_ymd(1403, 1, 1).ok()
        );
    }

    #[test]
    fn test_formatter_from_config() {
        let formatter: JalaliFormatter = serde_json::from_str(
            r#"{"locale": "en", "style": "short", "persian_digits": false}"#,
        )
        .unwrap();
        assert_eq!(
            formatter,
            JalaliFormatter::new(Locale::English, FormatStyle::Short)
        );
        assert_eq!(
            formatter.format_datetime(&date(2024, 3, 20)).unwrap(),
            "1 Farvardin 1403"
        );

        let result: Result<JalaliFormatter, _> = serde_json::from_str(r#"{"style": "long"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_formatter_parse_rejects_invalid_dates() {
        let formatter = JalaliFormatter::new(Locale::English, FormatStyle::Numeric);
        assert_eq!(formatter.parse("1404/12/30"), None);
        assert_eq!(formatter.parse("not a date"), None);
        assert_eq!(
            formatter.parse("30 Esfand 1403"),
            JalaliDate::from_ymd(1403, 12, 30).ok()
        );
    }
}
