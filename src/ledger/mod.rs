pub mod coerce;
pub mod ledger;
pub mod schema;

pub use ledger::{BooksSummary, Ledger};
pub use schema::{ColumnMap, SheetSchema, CUSTOMER_SHEET, EXPENSE_SHEET, INCOME_SHEET};
