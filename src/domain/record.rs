//! Domain models for income and expense records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::currency::export_amount;

/// Date format used in the persisted worksheets.
pub const STORE_DATE_FORMAT: &str = "%Y-%m-%d";

/// One unit of revenue: a service performed for a client on a given day.
/// Immutable once appended; the ledger has no update or delete path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub date: NaiveDate,
    pub client_name: String,
    pub service: String,
    pub amount: f64,
    #[serde(default)]
    pub notes: String,
}

impl IncomeRecord {
    pub fn new(
        date: NaiveDate,
        client_name: impl Into<String>,
        service: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date,
            client_name: client_name.into(),
            service: service.into(),
            amount,
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Serializes the record into worksheet field order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.date.format(STORE_DATE_FORMAT).to_string(),
            self.client_name.clone(),
            self.service.clone(),
            export_amount(self.amount),
            self.notes.clone(),
        ]
    }
}

/// One unit of spend, grouped by free-form category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub notes: String,
}

impl ExpenseRecord {
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Serializes the record into worksheet field order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.date.format(STORE_DATE_FORMAT).to_string(),
            self.category.clone(),
            export_amount(self.amount),
            self.notes.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn income_row_uses_plain_two_decimal_amount() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let record = IncomeRecord::new(date, "Asha", "Facial", 1500.0).with_notes("paid cash");
        assert_eq!(
            record.to_row(),
            vec!["2024-01-10", "Asha", "Facial", "1500.00", "paid cash"]
        );
    }

    #[test]
    fn expense_row_has_four_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 11).unwrap();
        let record = ExpenseRecord::new(date, "Supplies", 300.0);
        assert_eq!(record.to_row(), vec!["2024-01-11", "Supplies", "300.00", ""]);
    }
}
