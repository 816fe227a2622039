pub mod csv_backend;

use crate::core::errors::BooksError;

pub type Result<T> = std::result::Result<T, BooksError>;

/// Abstraction over append-only tabular persistence (a spreadsheet or an
/// equivalent worksheet-shaped store). Rows are ordered sequences of text
/// fields; row 0 of every worksheet is its header.
pub trait RecordStore: Send + Sync {
    /// All rows of the worksheet, header included as row 0.
    fn read_all_rows(&self, sheet: &str) -> Result<Vec<Vec<String>>>;

    /// Appends one row. No update or delete exists anywhere in this store.
    fn append_row(&self, sheet: &str, fields: &[String]) -> Result<()>;

    /// Appends one row only if the worksheet still holds exactly
    /// `expected_data_rows` data rows (header excluded). A mismatch fails
    /// with a write error so the caller can reload and retry; this keeps
    /// size-derived identifiers consistent without a store-side counter.
    fn conditional_append_row(
        &self,
        sheet: &str,
        fields: &[String],
        expected_data_rows: usize,
    ) -> Result<()>;

    /// Creates the worksheet with the given header if absent; no-op if
    /// already present.
    fn ensure_worksheet(&self, name: &str, header: &[String]) -> Result<()>;
}

pub use csv_backend::CsvStore;
