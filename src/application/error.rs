use thiserror::Error;

use crate::domain::{AmountError, EntryParseError, ParseDateError};

/// Public error taxonomy surfaced by the ledger entry points.
///
/// Every failure is synchronous and leaves the ledger untouched; none is
/// fatal to the process.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppError {
    #[error(r#"ledger entry is invalid, expected "YYYY-mm-dd,Payer Name,Payee Name,####.##""#)]
    MalformedEntry,

    #[error("date is invalid, expected format YYYY-mm-dd")]
    InvalidDate,

    #[error("amount is invalid, expected format ####.## without commas")]
    InvalidAmount,
}

impl From<EntryParseError> for AppError {
    fn from(err: EntryParseError) -> Self {
        match err {
            EntryParseError::Malformed => AppError::MalformedEntry,
            EntryParseError::Date(_) => AppError::InvalidDate,
            EntryParseError::Amount(_) => AppError::InvalidAmount,
        }
    }
}

impl From<ParseDateError> for AppError {
    fn from(_: ParseDateError) -> Self {
        AppError::InvalidDate
    }
}

impl From<AmountError> for AppError {
    fn from(_: AmountError) -> Self {
        AppError::InvalidAmount
    }
}
