//! CSV serialization of ledger contents for download.

use crate::core::errors::{BooksError, Result};
use crate::ledger::{Ledger, EXPENSE_SHEET, INCOME_SHEET};

/// Serializes ledger records into portable CSV bytes. Output is
/// deterministic: the same records in the same order always produce
/// byte-identical documents.
pub struct ReportService;

impl ReportService {
    pub fn income_csv(ledger: &Ledger) -> Result<Vec<u8>> {
        let rows = ledger.income().iter().map(|record| record.to_row());
        write_csv(&INCOME_SHEET.header(), rows)
    }

    pub fn expense_csv(ledger: &Ledger) -> Result<Vec<u8>> {
        let rows = ledger.expenses().iter().map(|record| record.to_row());
        write_csv(&EXPENSE_SHEET.header(), rows)
    }
}

fn write_csv(header: &[String], rows: impl Iterator<Item = Vec<String>>) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(header).map_err(export_error)?;
    for row in rows {
        writer.write_record(&row).map_err(export_error)?;
    }
    writer
        .into_inner()
        .map_err(|err| BooksError::Render(format!("csv export failed: {err}")))
}

fn export_error(err: csv::Error) -> BooksError {
    BooksError::Render(format!("csv export failed: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IncomeRecord;
    use chrono::NaiveDate;

    fn ledger_with_income() -> Ledger {
        let mut ledger = Ledger::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        ledger.record_income(
            IncomeRecord::new(date, "Asha", "Facial", 1500.0).with_notes("paid, cash"),
        );
        ledger
    }

    #[test]
    fn income_csv_has_header_and_plain_amounts() {
        let ledger = ledger_with_income();
        let bytes = ReportService::income_csv(&ledger).expect("export");
        let text = String::from_utf8(bytes).expect("utf8 csv");
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Date,Client,Service,Amount,Notes"));
        assert_eq!(
            lines.next(),
            Some("2024-01-10,Asha,Facial,1500.00,\"paid, cash\"")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn export_is_deterministic() {
        let ledger = ledger_with_income();
        let first = ReportService::income_csv(&ledger).expect("export");
        let second = ReportService::income_csv(&ledger).expect("export");
        assert_eq!(first, second);
    }
}
