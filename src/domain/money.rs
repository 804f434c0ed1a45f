use std::fmt;

use serde::Serialize;

/// Currency symbol used for every formatted amount.
pub const CURRENCY_SYMBOL: char = '\u{00A7}';

/// A validated entry amount.
///
/// Amounts keep the exact text that was ingested: optional integer digits, a
/// decimal point, exactly two fractional digits, no sign. They are converted
/// to a float only when balances are summed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Amount(String);

impl Amount {
    pub fn parse(input: &str) -> Result<Self, AmountError> {
        let Some((units, cents)) = input.split_once('.') else {
            return Err(AmountError::InvalidFormat);
        };
        if cents.len() != 2 || !cents.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::InvalidFormat);
        }
        if !units.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::InvalidFormat);
        }
        Ok(Self(input.to_string()))
    }

    /// Numeric value for aggregation. The constructor only admits text that
    /// parses as a float, so the fallback is never taken.
    pub fn value(&self) -> f64 {
        self.0.parse().unwrap_or(0.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Format a computed value as currency: symbol, sign, thousands-separated
/// integer digits, and exactly two fractional digits.
/// Example: 32300.0 -> "§32,300.00", -321.0 -> "§-321.00"
pub fn format_currency(value: f64) -> Result<String, AmountError> {
    if !value.is_finite() {
        return Err(AmountError::NotFinite);
    }

    let fixed = format!("{value:.2}");
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (units, cents) = digits.split_once('.').unwrap_or((digits, "00"));

    Ok(format!(
        "{CURRENCY_SYMBOL}{sign}{}.{cents}",
        group_thousands(units)
    ))
}

/// Insert a comma before every group of three digits, counted from the right.
fn group_thousands(units: &str) -> String {
    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    /// The ingested text does not match the "####.##" entry format.
    InvalidFormat,
    /// A computed value could not be rendered as currency.
    NotFinite,
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::InvalidFormat => {
                write!(f, "amount must match the format ####.## without commas")
            }
            AmountError::NotFinite => write!(f, "amount is not a finite number"),
        }
    }
}

impl std::error::Error for AmountError {}
