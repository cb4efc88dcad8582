//! Reading Jalali dates out of numeric or month-name text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::Locale;
use crate::locale::normalize_digits;

static NUMERIC_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^([0-9]{4})/([0-9]{1,2})/([0-9]{1,2})(?:[^0-9]|$)"));

// One pattern per month, in table order: `D <month-name> Y`, bounded by non-digits.
static PERSIAN_MONTH_PATTERNS: LazyLock<Vec<(u32, Regex)>> =
    LazyLock::new(|| month_patterns(Locale::Persian));
static ENGLISH_MONTH_PATTERNS: LazyLock<Vec<(u32, Regex)>> =
    LazyLock::new(|| month_patterns(Locale::English));

fn compile(pattern: &str) -> Option<Regex> {
    Regex::new(pattern)
        .inspect_err(|err| tracing::error!(pattern, %err, "failed to compile date pattern"))
        .ok()
}

fn month_patterns(locale: Locale) -> Vec<(u32, Regex)> {
    let flags = match locale {
        Locale::Persian => "",
        Locale::English => "(?i)",
    };
    (1..)
        .zip(locale.month_names())
        .filter_map(|(month, name)| {
            let pattern = format!(
                r"{flags}(?:^|[^0-9])([0-9]{{1,2}})\s*{}\s*([0-9]{{1,4}})(?:[^0-9]|$)",
                regex::escape(name)
            );
            compile(&pattern).map(|regex| (month, regex))
        })
        .collect()
}

fn capture_number(captures: &Captures<'_>, group: usize) -> Option<u32> {
    captures.get(group)?.as_str().parse().ok()
}

/// Reads a Jalali `(year, month, day)` from text.
///
/// Tries a leading `YYYY/M/D` first (trailing text such as a time is
/// ignored once a non-digit follows the day), then looks for `D <month> Y`
/// using each month name of `locale` in order. Persian and Arabic-Indic
/// digits are accepted. The result is not validated; a miss returns `None`.
///
/// ```
/// use jalali_date::{Locale, parse_jalali_date};
///
/// assert_eq!(parse_jalali_date("1403/1/1", Locale::Persian), Some((1403, 1, 1)));
/// assert_eq!(
///     parse_jalali_date("Sunday, 22 Bahman 1357", Locale::English),
///     Some((1357, 11, 22))
/// );
/// assert_eq!(parse_jalali_date("not a date", Locale::Persian), None);
/// ```
pub fn parse_jalali_date(text: &str, locale: Locale) -> Option<(i32, u32, u32)> {
    let normalized = normalize_digits(text);
    let input = normalized.trim();

    if let Some(captures) = NUMERIC_PATTERN
        .as_ref()
        .and_then(|pattern| pattern.captures(input))
    {
        tracing::trace!(input, %locale, "matched numeric Jalali date");
        let year = i32::try_from(capture_number(&captures, 1)?).ok()?;
        return Some((
            year,
            capture_number(&captures, 2)?,
            capture_number(&captures, 3)?,
        ));
    }

    let patterns = match locale {
        Locale::Persian => &*PERSIAN_MONTH_PATTERNS,
        Locale::English => &*ENGLISH_MONTH_PATTERNS,
    };
    for (month, pattern) in patterns {
        if let Some(captures) = pattern.captures(input) {
            tracing::trace!(input, %locale, month, "matched Jalali month name");
            let day = capture_number(&captures, 1)?;
            let year = i32::try_from(capture_number(&captures, 2)?).ok()?;
            return Some((year, *month, day));
        }
    }

    tracing::trace!(input, %locale, "no Jalali date pattern matched");
    None
}
