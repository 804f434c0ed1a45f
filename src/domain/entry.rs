use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Amount, AmountError, EntryDate, ParseDateError};

/// One completed payment between two parties.
///
/// Entries are immutable once appended to the ledger. Parties are plain
/// strings compared by exact equality; the same name with different casing
/// is a different party.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub date: EntryDate,
    pub payer: String,
    pub payee: String,
    pub amount: Amount,
    /// When the entry was ingested, as opposed to when the payment happened.
    pub recorded_at: DateTime<Utc>,
}

impl Entry {
    /// Parse one raw ledger line of the form
    /// "YYYY-mm-dd,Payer Name,Payee Name,####.##".
    ///
    /// The field count is checked before any field content, so a line with
    /// the wrong shape always reports `Malformed` rather than a date or
    /// amount problem.
    pub fn parse_line(raw: &str) -> Result<Self, EntryParseError> {
        let fields: Vec<&str> = raw.split(',').collect();
        let [date, payer, payee, amount] = fields.as_slice() else {
            return Err(EntryParseError::Malformed);
        };

        let date: EntryDate = date.parse()?;
        let amount = Amount::parse(amount)?;

        Ok(Self {
            date,
            payer: (*payer).to_string(),
            payee: (*payee).to_string(),
            amount,
            recorded_at: Utc::now(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryParseError {
    /// The line does not split into exactly four comma-separated fields.
    Malformed,
    Date(ParseDateError),
    Amount(AmountError),
}

impl fmt::Display for EntryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryParseError::Malformed => write!(
                f,
                r#"entry must have the form "YYYY-mm-dd,Payer Name,Payee Name,####.##""#
            ),
            EntryParseError::Date(err) => err.fmt(f),
            EntryParseError::Amount(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for EntryParseError {}

impl From<ParseDateError> for EntryParseError {
    fn from(err: ParseDateError) -> Self {
        EntryParseError::Date(err)
    }
}

impl From<AmountError> for EntryParseError {
    fn from(err: AmountError) -> Self {
        EntryParseError::Amount(err)
    }
}
