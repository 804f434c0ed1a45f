mod common;

use common::service_with_entries;
use partita::application::{AppError, LedgerService};

#[test]
fn test_well_formed_entry_appends_one_record() {
    let mut service = LedgerService::new();
    assert_eq!(service.ledger().len(), 0);

    let confirmation = service
        .add_transaction_entry("2017-10-28,Mary Moore,Acme Supermarket,678.22")
        .unwrap();

    assert_eq!(service.ledger().len(), 1);
    assert_eq!(
        confirmation,
        "Transaction added: on 2017-10-28, Mary Moore paid Acme Supermarket \u{00A7}678.22."
    );
}

#[test]
fn test_entries_accumulate_in_insertion_order() {
    let service = service_with_entries(&[
        "2017-04-01,John Smith,Mary Moore,32.50",
        "2017-04-03,John Smith,Costco,650.25",
        "2017-05-15,Mary Moore,Rent,1800.00",
        "2017-06-01,IBM,Mary Moore,5000.00",
    ]);

    assert_eq!(service.ledger().len(), 4);
    let payees: Vec<&str> = service
        .ledger()
        .entries()
        .iter()
        .map(|e| e.payee.as_str())
        .collect();
    assert_eq!(payees, ["Mary Moore", "Costco", "Rent", "Mary Moore"]);
}

#[test]
fn test_wrong_field_count_is_malformed_entry() {
    let mut service = LedgerService::new();

    for line in ["", "bad entry", "one,bad,entry", "this,is,one,more,bad,entry"] {
        assert_eq!(
            service.add_transaction_entry(line),
            Err(AppError::MalformedEntry),
            "line {line:?} should be malformed"
        );
    }
    assert!(service.ledger().is_empty());
}

#[test]
fn test_bad_date_is_invalid_date() {
    let mut service = LedgerService::new();

    for line in [
        "02/02/2017,John,Mary,65.50",
        "2017-02-32,John,Mary,65.50",
        "2017-13-01,John,Mary,65.50",
        // The entry format only accepts years starting with 10, 19, 20
        // or 29.
        "2025-02-12,John,Mary,65.50",
    ] {
        assert_eq!(
            service.add_transaction_entry(line),
            Err(AppError::InvalidDate),
            "line {line:?} should have an invalid date"
        );
    }
    assert!(service.ledger().is_empty());
}

#[test]
fn test_impossible_day_of_month_is_still_accepted() {
    // Day-of-month is not checked against the month length.
    let mut service = LedgerService::new();
    service
        .add_transaction_entry("2017-02-30,John,Mary,65.50")
        .unwrap();
    assert_eq!(service.ledger().len(), 1);
}

#[test]
fn test_bad_amount_is_invalid_amount() {
    let mut service = LedgerService::new();

    for line in [
        "2017-02-12,John,Mary,65",
        "2017-02-12,John,Mary,65.5",
        "2017-02-12,John,Mary,65.500",
        "2017-02-12,John,Mary,-65.00",
    ] {
        assert_eq!(
            service.add_transaction_entry(line),
            Err(AppError::InvalidAmount),
            "line {line:?} should have an invalid amount"
        );
    }
    assert!(service.ledger().is_empty());

    // A comma inside the amount changes the field count, so it reports as
    // a malformed entry rather than a bad amount.
    assert_eq!(
        service.add_transaction_entry("2017-02-12,John,Mary,1,650.00"),
        Err(AppError::MalformedEntry)
    );
}

#[test]
fn test_error_messages_are_fixed_per_kind() {
    assert_eq!(
        AppError::MalformedEntry.to_string(),
        r#"ledger entry is invalid, expected "YYYY-mm-dd,Payer Name,Payee Name,####.##""#
    );
    assert_eq!(
        AppError::InvalidDate.to_string(),
        "date is invalid, expected format YYYY-mm-dd"
    );
    assert_eq!(
        AppError::InvalidAmount.to_string(),
        "amount is invalid, expected format ####.## without commas"
    );
}
