mod common;

use books_core::domain::{ExpenseRecord, IncomeRecord};
use books_core::store::RecordStore;
use chrono::NaiveDate;
use common::{books_path, open_manager, store_at};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

#[test]
fn totals_match_the_reference_scenario() {
    let path = books_path();
    let mut manager = open_manager(&path);

    manager
        .add_income(IncomeRecord::new(date(10), "Asha", "Facial", 1500.0))
        .expect("add income");
    manager
        .add_expense(ExpenseRecord::new(date(11), "Supplies", 300.0))
        .expect("add expense");

    let totals = manager.totals();
    assert_eq!(totals.total_income, 1500.0);
    assert_eq!(totals.total_expense, 300.0);
    assert_eq!(totals.net_profit, 1200.0);
}

#[test]
fn totals_are_exact_sums_over_interleaved_appends() {
    let path = books_path();
    let mut manager = open_manager(&path);

    manager
        .add_income(IncomeRecord::new(date(1), "Asha", "Facial", 1500.25))
        .expect("income");
    manager
        .add_expense(ExpenseRecord::new(date(2), "Rent", 5000.0))
        .expect("expense");
    manager
        .add_income(IncomeRecord::new(date(3), "Riya", "Haircut", 300.5))
        .expect("income");
    manager
        .add_expense(ExpenseRecord::new(date(4), "Supplies", 120.75))
        .expect("expense");

    let totals = manager.totals();
    assert_eq!(totals.total_income, 1800.75);
    assert_eq!(totals.total_expense, 5120.75);
    assert_eq!(totals.net_profit, 1800.75 - 5120.75);
}

#[test]
fn totals_survive_a_reload_from_the_store() {
    let path = books_path();
    {
        let mut manager = open_manager(&path);
        manager
            .add_income(IncomeRecord::new(date(10), "Asha", "Facial", 1500.0))
            .expect("add income");
    }

    let manager = open_manager(&path);
    assert_eq!(manager.totals().total_income, 1500.0);
}

#[test]
fn malformed_amount_loads_as_zero_without_aborting() {
    let path = books_path();
    // Seed the worksheets, then write a corrupt row behind the core's back.
    open_manager(&path);
    let store = store_at(&path);
    store
        .append_row(
            "Income",
            &[
                "2024-01-10".to_string(),
                "Asha".to_string(),
                "Facial".to_string(),
                "abc".to_string(),
                String::new(),
            ],
        )
        .expect("seed corrupt row");
    store
        .append_row(
            "Income",
            &[
                "2024-01-11".to_string(),
                "Riya".to_string(),
                "Haircut".to_string(),
                "500.00".to_string(),
                String::new(),
            ],
        )
        .expect("seed good row");

    let manager = open_manager(&path);
    assert_eq!(manager.ledger().income().len(), 2, "both rows load");
    assert_eq!(manager.ledger().income()[0].amount, 0.0);
    assert_eq!(manager.totals().total_income, 500.0);
}
