mod common;

use books_core::domain::{ExpenseRecord, IncomeRecord};
use books_core::ledger::{Ledger, EXPENSE_SHEET, INCOME_SHEET};
use chrono::NaiveDate;
use common::{books_path, open_manager};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, day).unwrap()
}

fn parse_rows(bytes: &[u8]) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);
    reader
        .records()
        .map(|record| {
            record
                .expect("well-formed csv")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

#[test]
fn income_export_round_trips_through_the_same_schema() {
    let path = books_path();
    let mut manager = open_manager(&path);
    let records = vec![
        IncomeRecord::new(date(1), "Asha", "Facial", 1500.25).with_notes("paid, cash"),
        IncomeRecord::new(date(2), "Riya", "Haircut", 300.5),
        IncomeRecord::new(date(3), "Priya \"P\" S", "Manicure", 0.0),
    ];
    for record in &records {
        manager.add_income(record.clone()).expect("add income");
    }

    let bytes = manager.income_report_csv().expect("export");
    let income_rows = parse_rows(&bytes);
    assert_eq!(income_rows.len(), records.len() + 1, "header plus data rows");

    let reparsed = Ledger::from_rows(income_rows, vec![EXPENSE_SHEET.header()])
        .expect("re-parse exported csv");
    assert_eq!(reparsed.income(), records.as_slice());
}

#[test]
fn expense_export_round_trips_through_the_same_schema() {
    let path = books_path();
    let mut manager = open_manager(&path);
    let records = vec![
        ExpenseRecord::new(date(5), "Supplies", 300.0).with_notes("brushes"),
        ExpenseRecord::new(date(6), "Rent", 5000.0),
    ];
    for record in &records {
        manager.add_expense(record.clone()).expect("add expense");
    }

    let bytes = manager.expense_report_csv().expect("export");
    let expense_rows = parse_rows(&bytes);

    let reparsed = Ledger::from_rows(vec![INCOME_SHEET.header()], expense_rows)
        .expect("re-parse exported csv");
    assert_eq!(reparsed.expenses(), records.as_slice());
}

#[test]
fn export_is_byte_identical_for_identical_books() {
    let path = books_path();
    let mut manager = open_manager(&path);
    manager
        .add_income(IncomeRecord::new(date(1), "Asha", "Facial", 1500.0))
        .expect("add income");

    let first = manager.income_report_csv().expect("export");
    let second = manager.income_report_csv().expect("export");
    assert_eq!(first, second);

    let reopened = open_manager(&path);
    assert_eq!(reopened.income_report_csv().expect("export"), first);
}
