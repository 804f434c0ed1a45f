use crate::domain::{Entry, EntryDate, Ledger, format_currency};

use super::{AppError, SAMPLE_LEDGER};

/// Application service providing the ledger entry points for any client
/// (CLI, console, tests).
///
/// The service owns its ledger outright, so independent services never share
/// state and queries never observe a half-committed entry.
#[derive(Debug, Default)]
pub struct LedgerService {
    ledger: Ledger,
}

impl LedgerService {
    /// Create a service with an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service pre-populated with the bundled sample ledger.
    ///
    /// The sample set is fixed at build time; a malformed line in it is a
    /// programming error, not a runtime condition to recover from.
    pub fn with_sample_data() -> Self {
        let mut service = Self::new();
        for line in SAMPLE_LEDGER.lines() {
            service
                .add_transaction_entry(line)
                .expect("bundled sample ledger is well formed");
        }
        service
    }

    /// Validate one raw entry line and append it to the ledger.
    ///
    /// On success the ledger grows by exactly one entry and a human-readable
    /// confirmation is returned. On failure the ledger is left untouched.
    pub fn add_transaction_entry(&mut self, raw: &str) -> Result<String, AppError> {
        let entry = Entry::parse_line(raw)?;
        let confirmation = format!(
            "Transaction added: on {}, {} paid {} {}.",
            entry.date,
            entry.payer,
            entry.payee,
            format_currency(entry.amount.value())?,
        );
        self.ledger.append(entry);
        Ok(confirmation)
    }

    /// Current net balance for a party, formatted as currency.
    pub fn get_balance(&self, party: &str) -> Result<String, AppError> {
        self.get_balance_as_of_date(party, None)
    }

    /// Net balance for a party counting only entries dated on or before the
    /// cutoff. An unknown party yields the zero balance, not an error; a
    /// malformed cutoff date does fail.
    pub fn get_balance_as_of_date(
        &self,
        party: &str,
        cutoff: Option<&str>,
    ) -> Result<String, AppError> {
        let cutoff = cutoff.map(|date| date.parse::<EntryDate>()).transpose()?;
        Ok(format_currency(self.ledger.balance(party, cutoff))?)
    }

    /// Read access to the underlying ledger for presentation layers.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingestion_appends_exactly_one_entry() {
        let mut service = LedgerService::new();

        let confirmation = service
            .add_transaction_entry("2017-04-01,John Smith,Mary Moore,32.50")
            .unwrap();

        assert_eq!(service.ledger().len(), 1);
        assert_eq!(
            confirmation,
            "Transaction added: on 2017-04-01, John Smith paid Mary Moore \u{00A7}32.50."
        );
    }

    #[test]
    fn test_rejected_entries_leave_the_ledger_unchanged() {
        let mut service = LedgerService::new();
        service
            .add_transaction_entry("2017-04-01,John,Mary,100.00")
            .unwrap();

        let rejected = [
            ("", AppError::MalformedEntry),
            ("bad entry", AppError::MalformedEntry),
            ("one,bad,entry", AppError::MalformedEntry),
            ("this,is,one,more,bad,entry", AppError::MalformedEntry),
            ("02/02/2017,John,Mary,65.50", AppError::InvalidDate),
            ("2025-02-12,John,Mary,65.50", AppError::InvalidDate),
            ("2017-02-12,John,Mary,65", AppError::InvalidAmount),
        ];
        for (line, expected) in rejected {
            assert_eq!(service.add_transaction_entry(line), Err(expected));
            assert_eq!(service.ledger().len(), 1);
        }
    }

    #[test]
    fn test_balance_scenario_from_a_single_entry() {
        let mut service = LedgerService::new();
        service
            .add_transaction_entry("2017-04-01,John,Mary,100.00")
            .unwrap();

        assert_eq!(service.get_balance("John").unwrap(), "\u{00A7}-100.00");
        assert_eq!(service.get_balance("Mary").unwrap(), "\u{00A7}100.00");
    }

    #[test]
    fn test_get_balance_matches_query_without_cutoff() {
        let service = LedgerService::with_sample_data();

        for party in ["Alex", "John Smith", "Mary Moore", "Nobody"] {
            assert_eq!(
                service.get_balance(party).unwrap(),
                service.get_balance_as_of_date(party, None).unwrap()
            );
        }
    }

    #[test]
    fn test_repeated_queries_are_idempotent() {
        let service = LedgerService::with_sample_data();

        let first = service.get_balance("Mary Moore").unwrap();
        let second = service.get_balance("Mary Moore").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_party_yields_zero_balance() {
        let service = LedgerService::with_sample_data();
        assert_eq!(service.get_balance("Nobody").unwrap(), "\u{00A7}0.00");
    }

    #[test]
    fn test_malformed_cutoff_date_is_rejected() {
        let service = LedgerService::with_sample_data();
        assert_eq!(
            service.get_balance_as_of_date("Alex", Some("03/15/2017")),
            Err(AppError::InvalidDate)
        );
        assert_eq!(
            service.get_balance_as_of_date("Alex", Some("2025-03-15")),
            Err(AppError::InvalidDate)
        );
    }

    #[test]
    fn test_sample_data_balances() {
        let service = LedgerService::with_sample_data();

        // Alex: ten 5000.00 salary payments in, ten 750.00 tuition
        // payments out.
        assert_eq!(service.get_balance("Alex").unwrap(), "\u{00A7}42,500.00");
        assert_eq!(
            service
                .get_balance_as_of_date("Alex", Some("2017-01-31"))
                .unwrap(),
            "\u{00A7}4,250.00"
        );
    }
}
