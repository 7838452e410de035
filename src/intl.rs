//! Locale-aware date and currency formatting.
//!
//! Supports a small fixed set of locales and currencies. Unknown tags are
//! rejected when parsed rather than silently falling back.

use std::str::FromStr;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::datetime::Zone;
use crate::error::UtilError;

/// Timestamps below this are taken as seconds.
const SECONDS_THRESHOLD: i64 = 10_000_000_000;

/// Placeholder returned when there is nothing to format.
pub const PLACEHOLDER: &str = "...";

const NARROW_NBSP: char = '\u{202F}';
const NBSP: char = '\u{00A0}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "fr-FR")]
    FrFr,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "de-DE")]
    DeDe,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FrFr => "fr-FR",
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::DeDe => "de-DE",
        }
    }

    fn month_names(&self) -> [&'static str; 12] {
        match self {
            Self::FrFr => [
                "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août",
                "septembre", "octobre", "novembre", "décembre",
            ],
            Self::EnUs | Self::EnGb => [
                "January", "February", "March", "April", "May", "June", "July", "August",
                "September", "October", "November", "December",
            ],
            Self::DeDe => [
                "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August",
                "September", "Oktober", "November", "Dezember",
            ],
        }
    }

    fn short_month_names(&self) -> [&'static str; 12] {
        match self {
            Self::FrFr => [
                "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.",
                "oct.", "nov.", "déc.",
            ],
            Self::EnUs | Self::EnGb => [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
                "Dec",
            ],
            Self::DeDe => [
                "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.",
                "Nov.", "Dez.",
            ],
        }
    }

    /// Whether numeric day and month fields are zero-padded.
    fn pads_numeric_fields(&self) -> bool {
        matches!(self, Self::FrFr | Self::EnGb)
    }

    fn group_separator(&self) -> char {
        match self {
            Self::FrFr => NARROW_NBSP,
            Self::EnUs | Self::EnGb => ',',
            Self::DeDe => '.',
        }
    }

    fn decimal_separator(&self) -> char {
        match self {
            Self::FrFr | Self::DeDe => ',',
            Self::EnUs | Self::EnGb => '.',
        }
    }

    fn symbol_after_amount(&self) -> bool {
        matches!(self, Self::FrFr | Self::DeDe)
    }
}

impl FromStr for Locale {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "fr" | "fr-fr" => Ok(Self::FrFr),
            "en" | "en-us" => Ok(Self::EnUs),
            "en-gb" => Ok(Self::EnGb),
            "de" | "de-de" => Ok(Self::DeDe),
            _ => Err(UtilError::UnsupportedLocale(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Eur,
    Usd,
    Gbp,
    Jpy,
    Chf,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Chf => "CHF",
        }
    }

    /// Display symbol as written in `locale`.
    ///
    /// Foreign dollars, pounds and yen are disambiguated where the locale
    /// does so (`$US` in French, `US$` in British English).
    pub fn symbol(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Eur, _) => "€",
            (Self::Usd, Locale::FrFr) => "$US",
            (Self::Usd, Locale::EnGb) => "US$",
            (Self::Usd, _) => "$",
            (Self::Gbp, Locale::FrFr) => "£GB",
            (Self::Gbp, _) => "£",
            (Self::Jpy, Locale::FrFr) => "JPY",
            (Self::Jpy, Locale::EnGb) => "JP¥",
            (Self::Jpy, _) => "¥",
            (Self::Chf, _) => "CHF",
        }
    }

    /// Number of minor-unit digits.
    pub fn decimals(&self) -> usize {
        match self {
            Self::Jpy => 0,
            _ => 2,
        }
    }
}

impl FromStr for Currency {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            "GBP" => Ok(Self::Gbp),
            "JPY" => Ok(Self::Jpy),
            "CHF" => Ok(Self::Chf),
            _ => Err(UtilError::UnsupportedCurrency(s.to_string())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dates
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearStyle {
    #[default]
    Numeric,
    TwoDigit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthStyle {
    #[default]
    Numeric,
    TwoDigit,
    Long,
    Short,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayStyle {
    #[default]
    Numeric,
    TwoDigit,
}

/// Options for [`convert_to_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateFormat {
    pub locale: Locale,
    pub year: YearStyle,
    pub month: MonthStyle,
    pub day: DayStyle,
    pub zone: Zone,
}

/// Format a timestamp as a calendar date.
///
/// `None` and `0` yield [`PLACEHOLDER`]. Timestamps below 10^10 are seconds,
/// larger ones milliseconds. `year_2digit` forces a two-digit year. Without
/// `params` the date is numeric `fr-FR` in the system time zone.
pub fn convert_to_date(timestamp: Option<i64>, year_2digit: bool, params: Option<&DateFormat>) -> String {
    let timestamp = match timestamp {
        Some(ts) if ts != 0 => ts,
        _ => return PLACEHOLDER.to_string(),
    };
    let millis = if timestamp < SECONDS_THRESHOLD {
        timestamp.saturating_mul(1000)
    } else {
        timestamp
    };

    let mut format = params.copied().unwrap_or_default();
    if year_2digit {
        format.year = YearStyle::TwoDigit;
    }

    let Some(instant) = DateTime::<Utc>::from_timestamp_millis(millis) else {
        tracing::debug!("Timestamp {} out of range for date formatting", timestamp);
        return PLACEHOLDER.to_string();
    };
    let date = format.zone.localize(instant);

    let locale = format.locale;
    let pad = |n: u32, two_digit: bool| {
        if two_digit {
            format!("{:02}", n)
        } else {
            n.to_string()
        }
    };

    let year = match format.year {
        YearStyle::Numeric => date.year().to_string(),
        YearStyle::TwoDigit => format!("{:02}", date.year().rem_euclid(100)),
    };
    let day_two_digit = format.day == DayStyle::TwoDigit;
    let month_index = date.month0() as usize;

    let textual_month = match format.month {
        MonthStyle::Long => Some(locale.month_names()[month_index]),
        MonthStyle::Short => Some(locale.short_month_names()[month_index]),
        MonthStyle::Numeric | MonthStyle::TwoDigit => None,
    };

    // Locale padding only applies to all-numeric dates
    let Some(month) = textual_month else {
        let numeric_pad = locale.pads_numeric_fields();
        let day = pad(date.day(), day_two_digit || numeric_pad);
        let month = pad(date.month(), format.month == MonthStyle::TwoDigit || numeric_pad);
        return match locale {
            Locale::EnUs => format!("{}/{}/{}", month, day, year),
            Locale::DeDe => format!("{}.{}.{}", day, month, year),
            Locale::FrFr | Locale::EnGb => format!("{}/{}/{}", day, month, year),
        };
    };

    let day = pad(date.day(), day_two_digit);
    match locale {
        Locale::EnUs => format!("{} {}, {}", month, day, year),
        Locale::DeDe => format!("{}. {} {}", day, month, year),
        Locale::FrFr | Locale::EnGb => format!("{} {} {}", day, month, year),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Money
// ─────────────────────────────────────────────────────────────────────────────

/// Options for [`convert_to_money`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoneyFormat {
    pub locale: Locale,
    pub currency: Currency,
}

/// Format an amount as currency. Defaults to `fr-FR` euros.
///
/// `None` or NaN yields `"... <symbol>"`.
pub fn convert_to_money(amount: Option<f64>, params: Option<&MoneyFormat>) -> String {
    let format = params.copied().unwrap_or_default();
    let symbol = format.currency.symbol(format.locale);

    let amount = match amount {
        Some(n) if !n.is_nan() => n,
        _ => return format!("{} {}", PLACEHOLDER, symbol),
    };
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return place_symbol(format.locale, symbol, &format!("{}∞", sign));
    }

    let fixed = format!("{:.*}", format.currency.decimals(), amount.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut number = group_thousands(integer, format.locale.group_separator());
    if let Some(fraction) = fraction {
        number.push(format.locale.decimal_separator());
        number.push_str(fraction);
    }
    // Rounding may turn a tiny negative amount into zero
    if amount < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        number.insert(0, '-');
    }

    place_symbol(format.locale, symbol, &number)
}

fn place_symbol(locale: Locale, symbol: &str, number: &str) -> String {
    if locale.symbol_after_amount() {
        return format!("{}{}{}", number, NBSP, symbol);
    }

    // A leading symbol ending in a letter (`CHF`) is spaced from the digits
    let gap = if symbol.ends_with(char::is_alphabetic) {
        NBSP.to_string()
    } else {
        String::new()
    };
    match number.strip_prefix('-') {
        Some(unsigned) => format!("-{}{}{}", symbol, gap, unsigned),
        None => format!("{}{}{}", symbol, gap, number),
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() * 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}
