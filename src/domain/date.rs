use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// A calendar date attached to a ledger entry, kept as plain year/month/day
/// fields so entries can be ordered by date without timezone handling.
///
/// The entry format is deliberately loose about month lengths: any day in
/// 1-31 is accepted for any month, so "2017-02-30" parses. Years must start
/// with 10, 19, 20 or 29; that is the historical range check of the entry
/// format and it is narrower than the 1900-2099 span it suggests (2017
/// passes, 2025 does not).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryDate {
    year: u16,
    month: u8,
    day: u8,
}

impl EntryDate {
    /// Check a date string against the entry format without keeping the
    /// parsed result.
    pub fn is_valid(input: &str) -> bool {
        input.parse::<Self>().is_ok()
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }
}

impl FromStr for EntryDate {
    type Err = ParseDateError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = input.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseDateError);
        };

        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseDateError);
        }
        if !matches!(&year[..2], "10" | "19" | "20" | "29") {
            return Err(ParseDateError);
        }

        Ok(Self {
            year: year.parse().map_err(|_| ParseDateError)?,
            month: parse_component(month, 12)?,
            day: parse_component(day, 31)?,
        })
    }
}

/// Parse a 1-or-2-digit month or day, with an optional leading zero.
fn parse_component(text: &str, max: u8) -> Result<u8, ParseDateError> {
    if text.is_empty() || text.len() > 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseDateError);
    }
    let value: u8 = text.parse().map_err(|_| ParseDateError)?;
    if value < 1 || value > max {
        return Err(ParseDateError);
    }
    Ok(value)
}

impl fmt::Display for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Serialize for EntryDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseDateError;

impl fmt::Display for ParseDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "date must match the format YYYY-mm-dd")
    }
}

impl std::error::Error for ParseDateError {}
