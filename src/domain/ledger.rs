use super::{Entry, EntryDate};

/// The append-only record of every ingested entry, in insertion order.
///
/// Duplicate entries are allowed; there is no identity key. Balances are
/// derived by scanning the full history on every query, so the ledger never
/// caches per-party totals.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<Entry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated entry. Existing entries are never replaced or
    /// reordered.
    pub fn append(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Net balance for a party: everything received as payee minus everything
    /// paid out as payer, optionally bounded by an inclusive cutoff date.
    ///
    /// A party with no matching entries on a side contributes zero on that
    /// side; an unknown name is not an error.
    pub fn balance(&self, party: &str, cutoff: Option<EntryDate>) -> f64 {
        let paid_out = self.sum_where(cutoff, |entry| entry.payer == party);
        let earned = self.sum_where(cutoff, |entry| entry.payee == party);
        earned - paid_out
    }

    fn sum_where(&self, cutoff: Option<EntryDate>, matches: impl Fn(&Entry) -> bool) -> f64 {
        self.entries
            .iter()
            .filter(|entry| matches(entry) && cutoff.is_none_or(|date| entry.date <= date))
            .map(|entry| entry.amount.value())
            .sum()
    }
}
