use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DateError, prelude::*};

/// Jalali month names in Persian
pub const MONTHS_FA: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Jalali month names in English transliteration
pub const MONTHS_EN: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// Weekday names in Persian, Saturday first
pub const WEEKDAYS_FA: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه\u{200c}شنبه",
    "چهارشنبه",
    "پنج\u{200c}شنبه",
    "جمعه",
];

/// Weekday names in English, Saturday first
pub const WEEKDAYS_EN: [&str; 7] = [
    "Saturday",
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
];

/// Language used for month and weekday names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    #[default]
    #[display(fmt = "fa")]
    Persian,
    #[display(fmt = "en")]
    English,
}

impl Locale {
    /// All twelve month names, Farvardin first
    pub const fn month_names(self) -> &'static [&'static str; 12] {
        match self {
            Self::Persian => &MONTHS_FA,
            Self::English => &MONTHS_EN,
        }
    }

    /// All seven weekday names, Saturday first
    pub const fn weekday_names(self) -> &'static [&'static str; 7] {
        match self {
            Self::Persian => &WEEKDAYS_FA,
            Self::English => &WEEKDAYS_EN,
        }
    }

    /// Name of a 1-based month, `None` outside `1..=12`
    pub fn month_name(self, month: u32) -> Option<&'static str> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        self.month_names().get(index).copied()
    }

    /// Name of a Saturday-first weekday index, `None` outside `0..=6`
    pub fn weekday_name(self, weekday: u32) -> Option<&'static str> {
        let index = usize::try_from(weekday).ok()?;
        self.weekday_names().get(index).copied()
    }
}

/// Accepts `fa`/`en` and their common aliases, case-insensitively.
///
/// Any other identifier is `DateError::UnknownLocale` rather than falling back
/// to English, so a misspelt config value surfaces instead of changing output.
impl FromStr for Locale {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        match code.as_str() {
            "fa" | "fa-ir" | "fa_ir" | "persian" | "farsi" => Ok(Self::Persian),
            "en" | "en-us" | "en_us" | "english" => Ok(Self::English),
            _ => Err(DateError::UnknownLocale(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

/// Shape of a formatted date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FormatStyle {
    /// Weekday, day, month name and year
    #[default]
    #[display(fmt = "full")]
    Full,
    /// Day, month name and year
    #[display(fmt = "short")]
    Short,
    /// Zero-padded `YYYY/MM/DD`
    #[display(fmt = "numeric")]
    Numeric,
}

impl FromStr for FormatStyle {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "short" => Ok(Self::Short),
            "numeric" => Ok(Self::Numeric),
            _ => Err(DateError::UnknownFormatStyle(s.to_owned())),
        }
    }
}

impl TryFrom<String> for FormatStyle {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FormatStyle> for String {
    fn from(style: FormatStyle) -> Self {
        style.to_string()
    }
}

const PERSIAN_ZERO: u32 = 0x06F0;
const ARABIC_INDIC_ZERO: u32 = 0x0660;

/// Replaces ASCII digits with Extended Arabic-Indic (Persian) digits.
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            c.to_digit(10)
                .and_then(|d| char::from_u32(PERSIAN_ZERO + d))
                .unwrap_or(c)
        })
        .collect()
}

fn ascii_digit(c: char) -> Option<char> {
    let code = u32::from(c);
    [PERSIAN_ZERO, ARABIC_INDIC_ZERO]
        .into_iter()
        .find(|zero| (*zero..*zero + 10).contains(&code))
        .and_then(|zero| char::from_digit(code - zero, 10))
}

/// Replaces Persian and Arabic-Indic digits with ASCII digits.
///
/// Borrows the input when there is nothing to replace.
pub fn normalize_digits(text: &str) -> Cow<'_, str> {
    if text.chars().all(|c| ascii_digit(c).is_none()) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().map(|c| ascii_digit(c).unwrap_or(c)).collect())
}
