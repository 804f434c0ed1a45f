use std::io::Read;

use anyhow::Result;

use crate::application::{AppError, LedgerService};

/// Result of a bulk load.
#[derive(Debug, Clone)]
pub struct ImportResult {
    pub imported: usize,
    pub errors: Vec<ImportError>,
}

/// A line that failed validation during a bulk load.
#[derive(Debug, Clone)]
pub struct ImportError {
    /// 1-based line number in the input.
    pub line: usize,
    pub error: AppError,
}

/// Importer feeding newline-separated entry lines through the validated
/// ingestion entry point.
pub struct Importer<'a> {
    service: &'a mut LedgerService,
}

impl<'a> Importer<'a> {
    pub fn new(service: &'a mut LedgerService) -> Self {
        Self { service }
    }

    /// Load entries from a reader, one "YYYY-mm-dd,Payer,Payee,####.##" line
    /// at a time. Blank lines are skipped; invalid lines are collected with
    /// their line numbers and never touch the ledger.
    pub fn import_entries<R: Read>(&mut self, mut reader: R) -> Result<ImportResult> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        let mut imported = 0;
        let mut errors = Vec::new();

        for (line_num, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match self.service.add_transaction_entry(line) {
                Ok(_) => imported += 1,
                Err(error) => errors.push(ImportError {
                    line: line_num + 1,
                    error,
                }),
            }
        }

        Ok(ImportResult { imported, errors })
    }
}
