// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use partita::application::LedgerService;

/// Helper to build a service pre-loaded with a fixed set of entry lines.
pub fn service_with_entries(lines: &[&str]) -> LedgerService {
    let mut service = LedgerService::new();
    for line in lines {
        service
            .add_transaction_entry(line)
            .expect("test entry is well formed");
    }
    service
}
