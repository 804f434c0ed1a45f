use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::LedgerService;
use crate::domain::Entry;

/// Ledger snapshot for JSON export.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub entries: Vec<Entry>,
}

/// Exporter for rendering the in-memory ledger in machine-readable formats.
pub struct Exporter<'a> {
    service: &'a LedgerService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a LedgerService) -> Self {
        Self { service }
    }

    /// Export all entries to CSV in insertion order. Returns the number of
    /// rows written.
    pub fn export_entries_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["date", "payer", "payee", "amount", "recorded_at"])?;

        let mut count = 0;
        for entry in self.service.ledger().entries() {
            csv_writer.write_record([
                entry.date.to_string(),
                entry.payer.clone(),
                entry.payee.clone(),
                entry.amount.as_str().to_string(),
                entry.recorded_at.to_rfc3339(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the full ledger as a JSON snapshot.
    pub fn export_json<W: Write>(&self, mut writer: W) -> Result<LedgerSnapshot> {
        let snapshot = LedgerSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            entries: self.service.ledger().entries().to_vec(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }
}
