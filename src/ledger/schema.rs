//! Worksheet layouts and header validation.
//!
//! Rows are never mapped by raw position alone: each worksheet's header is
//! validated once at load time into a named-column map, so a reordered or
//! truncated header fails fast instead of silently misaligning fields.

use crate::core::errors::{BooksError, Result};

/// Fixed layout of one worksheet: name plus ordered column labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetSchema {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

pub const INCOME_SHEET: SheetSchema = SheetSchema {
    name: "Income",
    columns: &["Date", "Client", "Service", "Amount", "Notes"],
};

pub const EXPENSE_SHEET: SheetSchema = SheetSchema {
    name: "Expenses",
    columns: &["Date", "Category", "Amount", "Notes"],
};

pub const CUSTOMER_SHEET: SheetSchema = SheetSchema {
    name: "Customers",
    columns: &["Customer Code", "Client Name"],
};

impl SheetSchema {
    /// The header row written when the worksheet is created.
    pub fn header(&self) -> Vec<String> {
        self.columns.iter().map(|label| label.to_string()).collect()
    }

    /// Resolves each schema column to its position in the stored header.
    pub fn column_map(&self, header: &[String]) -> Result<ColumnMap> {
        let mut indices = Vec::with_capacity(self.columns.len());
        for label in self.columns {
            let position = header
                .iter()
                .position(|stored| stored.trim() == *label)
                .ok_or_else(|| BooksError::Schema {
                    sheet: self.name.to_string(),
                    detail: format!("missing column `{}` in header {:?}", label, header),
                })?;
            indices.push(position);
        }
        Ok(ColumnMap { indices })
    }
}

/// Resolved positions of a schema's columns within a stored header row.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    indices: Vec<usize>,
}

impl ColumnMap {
    /// Field value for the schema column at `column`. Missing trailing
    /// fields resolve to the empty string; extra stored columns are ignored.
    pub fn field<'r>(&self, row: &'r [String], column: usize) -> &'r str {
        self.indices
            .get(column)
            .and_then(|index| row.get(*index))
            .map(String::as_str)
            .unwrap_or("")
    }
}
