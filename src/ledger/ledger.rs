//! In-memory collection of income and expense records plus derived totals.

use crate::core::errors::Result;
use crate::domain::{ExpenseRecord, IncomeRecord};

use super::coerce;
use super::schema::{EXPENSE_SHEET, INCOME_SHEET};

/// All loaded records for one set of books. Totals are always recomputed
/// from the full record set; nothing aggregate is cached or persisted.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    income: Vec<IncomeRecord>,
    expenses: Vec<ExpenseRecord>,
}

/// Aggregate totals derived from the full record set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BooksSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_profit: f64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from raw worksheet rows, header row included as row 0.
    /// Headers are validated once into named-column maps; data rows then go
    /// through the lenient coercion in [`coerce`].
    pub fn from_rows(
        income_rows: Vec<Vec<String>>,
        expense_rows: Vec<Vec<String>>,
    ) -> Result<Self> {
        let mut ledger = Ledger::new();

        let mut income_iter = income_rows.into_iter();
        let income_header = income_iter.next().unwrap_or_default();
        let income_map = INCOME_SHEET.column_map(&income_header)?;
        for row in income_iter {
            let Some(date) = coerce::parse_date(income_map.field(&row, 0), INCOME_SHEET.name)
            else {
                continue;
            };
            ledger.income.push(
                IncomeRecord::new(
                    date,
                    income_map.field(&row, 1),
                    income_map.field(&row, 2),
                    coerce::coerce_amount(income_map.field(&row, 3), INCOME_SHEET.name),
                )
                .with_notes(income_map.field(&row, 4)),
            );
        }

        let mut expense_iter = expense_rows.into_iter();
        let expense_header = expense_iter.next().unwrap_or_default();
        let expense_map = EXPENSE_SHEET.column_map(&expense_header)?;
        for row in expense_iter {
            let Some(date) = coerce::parse_date(expense_map.field(&row, 0), EXPENSE_SHEET.name)
            else {
                continue;
            };
            ledger.expenses.push(
                ExpenseRecord::new(
                    date,
                    expense_map.field(&row, 1),
                    coerce::coerce_amount(expense_map.field(&row, 2), EXPENSE_SHEET.name),
                )
                .with_notes(expense_map.field(&row, 3)),
            );
        }

        Ok(ledger)
    }

    pub fn income(&self) -> &[IncomeRecord] {
        &self.income
    }

    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    pub fn total_income(&self) -> f64 {
        self.income.iter().map(|record| record.amount).sum()
    }

    pub fn total_expense(&self) -> f64 {
        self.expenses.iter().map(|record| record.amount).sum()
    }

    pub fn net_profit(&self) -> f64 {
        self.total_income() - self.total_expense()
    }

    pub fn summary(&self) -> BooksSummary {
        BooksSummary {
            total_income: self.total_income(),
            total_expense: self.total_expense(),
            net_profit: self.net_profit(),
        }
    }

    /// In-memory append. Persistence goes through the ledger service, which
    /// only calls this after the store confirmed the write.
    pub(crate) fn record_income(&mut self, record: IncomeRecord) {
        self.income.push(record);
    }

    pub(crate) fn record_expense(&mut self, record: ExpenseRecord) {
        self.expenses.push(record);
    }
}
