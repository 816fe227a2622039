pub mod customer_service;
pub mod invoice_service;
pub mod ledger_service;
pub mod report_service;

pub use customer_service::CustomerService;
pub use invoice_service::{DocumentOutcome, GeneratedInvoice, InvoiceParams, InvoiceService};
pub use ledger_service::LedgerService;
pub use report_service::ReportService;
