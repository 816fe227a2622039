pub mod html;

use crate::core::errors::BooksError;
use crate::domain::Invoice;

pub type Result<T> = std::result::Result<T, BooksError>;

/// Renders invoice documents to raw bytes for download or printing. Record
/// persistence never depends on this seam; a failed render leaves the books
/// intact and the document regenerable.
pub trait DocumentRenderer: Send + Sync {
    fn render_to_bytes(&self, invoice: &Invoice) -> Result<Vec<u8>>;
}

pub use html::HtmlRenderer;
