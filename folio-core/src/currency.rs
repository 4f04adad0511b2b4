//! Whole-unit currency formatting for a small, fixed locale table.
//!
//! Amounts are rounded half away from zero and never show fractional
//! digits, whatever the locale would normally print.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors when parsing a locale tag or currency code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurrencyError {
    #[error("unsupported locale '{0}' (expected one of en-IN, en-US, en-GB, de-DE, fr-FR)")]
    UnknownLocale(String),
    #[error("unsupported currency '{0}' (expected one of INR, USD, EUR, GBP)")]
    UnknownCurrency(String),
}

/// Supported formatting locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    EnIn,
    EnUs,
    EnGb,
    DeDe,
    FrFr,
}

/// Supported ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CurrencyCode {
    Inr,
    Usd,
    Eur,
    Gbp,
}

/// How digits are grouped to the left of the decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    /// 1,234,567
    Thousands,
    /// 12,34,567 - last group of three, then groups of two.
    Indian,
}

const NBSP: &str = "\u{a0}";
const NARROW_NBSP: &str = "\u{202f}";

impl Locale {
    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnIn => "en-IN",
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
            Locale::FrFr => "fr-FR",
        }
    }

    fn grouping(self) -> Grouping {
        match self {
            Locale::EnIn => Grouping::Indian,
            _ => Grouping::Thousands,
        }
    }

    fn group_separator(self) -> &'static str {
        match self {
            Locale::EnIn | Locale::EnUs | Locale::EnGb => ",",
            Locale::DeDe => ".",
            Locale::FrFr => NARROW_NBSP,
        }
    }

    fn symbol_is_prefix(self) -> bool {
        matches!(self, Locale::EnIn | Locale::EnUs | Locale::EnGb)
    }
}

impl CurrencyCode {
    pub fn code(self) -> &'static str {
        match self {
            CurrencyCode::Inr => "INR",
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CurrencyCode::Inr => "₹",
            CurrencyCode::Usd => "$",
            CurrencyCode::Eur => "€",
            CurrencyCode::Gbp => "£",
        }
    }
}

impl FromStr for Locale {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "en-in" => Ok(Locale::EnIn),
            "en-us" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            "de-de" => Ok(Locale::DeDe),
            "fr-fr" => Ok(Locale::FrFr),
            _ => Err(CurrencyError::UnknownLocale(s.to_string())),
        }
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INR" => Ok(CurrencyCode::Inr),
            "USD" => Ok(CurrencyCode::Usd),
            "EUR" => Ok(CurrencyCode::Eur),
            "GBP" => Ok(CurrencyCode::Gbp),
            _ => Err(CurrencyError::UnknownCurrency(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<String> for Locale {
    type Error = CurrencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.tag().to_string()
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CurrencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.code().to_string()
    }
}

/// Format `amount` as a whole-unit currency string for `locale`.
///
/// `format_currency(15000.0, Locale::EnIn, CurrencyCode::Inr)` gives
/// `"₹15,000"`; `150000.6` gives `"₹1,50,001"`.
pub fn format_currency(amount: f64, locale: Locale, currency: CurrencyCode) -> String {
    let rounded = amount.round();
    // -0.4 rounds to -0.0; print it unsigned.
    let negative = rounded < 0.0;

    let digits = if rounded.is_nan() {
        "NaN".to_string()
    } else if rounded.is_infinite() {
        "∞".to_string()
    } else {
        group_digits(
            &format!("{:.0}", rounded.abs()),
            locale.grouping(),
            locale.group_separator(),
        )
    };

    let sign = if negative { "-" } else { "" };
    let symbol = currency.symbol();
    if locale.symbol_is_prefix() {
        format!("{sign}{symbol}{digits}")
    } else {
        format!("{sign}{digits}{NBSP}{symbol}")
    }
}

/// Short label such as `"₹8.5K"`, `"₹50K"` or `"$1.2M"`.
pub fn format_compact(amount: f64, currency: CurrencyCode) -> String {
    let sign = if amount.round() < 0.0 { "-" } else { "" };
    format!("{sign}{}{}", currency.symbol(), compact_digits(amount.abs()))
}

/// Range label for a tier chip: `"₹8.5K-15K"`, or `"₹50K+"` when open-ended.
pub fn format_tier_range(lower: f64, upper: Option<f64>, currency: CurrencyCode) -> String {
    let start = format_compact(lower, currency);
    match upper {
        Some(upper) => format!("{start}-{}", compact_digits(upper.abs())),
        None => format!("{start}+"),
    }
}

fn compact_digits(amount: f64) -> String {
    let (scaled, suffix) = if amount >= 1_000_000.0 {
        (amount / 1_000_000.0, "M")
    } else if amount >= 1_000.0 {
        (amount / 1_000.0, "K")
    } else {
        return format!("{:.0}", amount.round());
    };
    let text = format!("{scaled:.1}");
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{text}{suffix}")
}

fn group_digits(digits: &str, grouping: Grouping, separator: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let head_group = match grouping {
        Grouping::Thousands => 3,
        Grouping::Indian => 2,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(head_group);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(separator)
}
