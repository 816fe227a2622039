//! Loading and appending ledger records through the record store.

use crate::core::errors::{BooksError, Result};
use crate::domain::{ExpenseRecord, IncomeRecord};
use crate::ledger::{Ledger, EXPENSE_SHEET, INCOME_SHEET};
use crate::store::RecordStore;

/// Orchestrates ledger persistence. Appends are write-then-confirm: the
/// store write happens first, and the in-memory ledger only changes after
/// the store reported success.
pub struct LedgerService;

impl LedgerService {
    /// Creates missing worksheets and loads the full ledger from the store.
    /// A store read failure propagates; it is never substituted with empty
    /// books.
    pub fn load(store: &dyn RecordStore) -> Result<Ledger> {
        store.ensure_worksheet(INCOME_SHEET.name, &INCOME_SHEET.header())?;
        store.ensure_worksheet(EXPENSE_SHEET.name, &EXPENSE_SHEET.header())?;
        let income_rows = store.read_all_rows(INCOME_SHEET.name)?;
        let expense_rows = store.read_all_rows(EXPENSE_SHEET.name)?;
        Ledger::from_rows(income_rows, expense_rows)
    }

    /// Persists one income record, then records it in memory.
    ///
    /// Not idempotent: retrying after an ambiguous transport failure (the
    /// write may have landed) can double-append. The caller owns that
    /// decision.
    pub fn append_income(
        store: &dyn RecordStore,
        ledger: &mut Ledger,
        record: IncomeRecord,
    ) -> Result<()> {
        validate_amount(record.amount)?;
        store.append_row(INCOME_SHEET.name, &record.to_row())?;
        ledger.record_income(record);
        Ok(())
    }

    /// Persists one expense record, then records it in memory.
    pub fn append_expense(
        store: &dyn RecordStore,
        ledger: &mut Ledger,
        record: ExpenseRecord,
    ) -> Result<()> {
        validate_amount(record.amount)?;
        store.append_row(EXPENSE_SHEET.name, &record.to_row())?;
        ledger.record_expense(record);
        Ok(())
    }
}

fn validate_amount(amount: f64) -> Result<()> {
    if amount < 0.0 || !amount.is_finite() {
        return Err(BooksError::Validation(format!(
            "amount must be a non-negative number, got {amount}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{self, CsvStore};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    /// Store stub whose writes always fail, for exercising the
    /// write-then-confirm ordering.
    struct BrokenStore;

    impl RecordStore for BrokenStore {
        fn read_all_rows(&self, sheet: &str) -> store::Result<Vec<Vec<String>>> {
            Err(BooksError::StoreRead(format!("`{sheet}` unreachable")))
        }

        fn append_row(&self, sheet: &str, _fields: &[String]) -> store::Result<()> {
            Err(BooksError::StoreWrite(format!("`{sheet}` unreachable")))
        }

        fn conditional_append_row(
            &self,
            sheet: &str,
            _fields: &[String],
            _expected_data_rows: usize,
        ) -> store::Result<()> {
            Err(BooksError::StoreWrite(format!("`{sheet}` unreachable")))
        }

        fn ensure_worksheet(&self, sheet: &str, _header: &[String]) -> store::Result<()> {
            Err(BooksError::StoreWrite(format!("`{sheet}` unreachable")))
        }
    }

    fn sample_income() -> IncomeRecord {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        IncomeRecord::new(date, "Asha", "Facial", 1500.0)
    }

    #[test]
    fn failed_write_leaves_ledger_unchanged() {
        let mut ledger = Ledger::new();
        let err = LedgerService::append_income(&BrokenStore, &mut ledger, sample_income())
            .expect_err("write failure must surface");
        assert!(matches!(err, BooksError::StoreWrite(_)), "got {err:?}");
        assert!(ledger.income().is_empty(), "no optimistic local append");
    }

    #[test]
    fn negative_amount_fails_validation_before_any_write() {
        let mut ledger = Ledger::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let record = IncomeRecord::new(date, "Asha", "Facial", -5.0);
        let err = LedgerService::append_income(&BrokenStore, &mut ledger, record)
            .expect_err("negative amount must be rejected");
        assert!(matches!(err, BooksError::Validation(_)), "got {err:?}");
    }

    #[test]
    fn append_survives_reload() {
        let temp = TempDir::new().expect("temp dir");
        let store = CsvStore::new(temp.path().join("books")).expect("csv store");
        let mut ledger = LedgerService::load(&store).expect("load empty books");

        LedgerService::append_income(&store, &mut ledger, sample_income()).expect("append");
        let date = NaiveDate::from_ymd_opt(2024, 1, 11).unwrap();
        LedgerService::append_expense(
            &store,
            &mut ledger,
            ExpenseRecord::new(date, "Supplies", 300.0),
        )
        .expect("append expense");

        let reloaded = LedgerService::load(&store).expect("reload");
        assert_eq!(reloaded.total_income(), 1500.0);
        assert_eq!(reloaded.total_expense(), 300.0);
        assert_eq!(reloaded.net_profit(), 1200.0);
    }
}
