//! Invoice generation: persistence first, document rendering second.

use chrono::{NaiveDate, NaiveDateTime};

use crate::core::errors::{BooksError, Result};
use crate::domain::{Customer, CustomerDirectory, Invoice};
use crate::ledger::Ledger;
use crate::render::DocumentRenderer;
use crate::store::RecordStore;

use super::{CustomerService, LedgerService};

/// Operator input for one invoice.
#[derive(Debug, Clone)]
pub struct InvoiceParams {
    pub date: NaiveDate,
    pub client_name: String,
    pub service: String,
    pub amount: f64,
    pub notes: String,
}

/// Outcome of the rendering phase. The underlying income record is already
/// persisted in both cases.
#[derive(Debug)]
pub enum DocumentOutcome {
    Rendered(Vec<u8>),
    /// Record saved, document missing; re-render via
    /// [`InvoiceService::render`] without touching the books again.
    Failed(String),
}

#[derive(Debug)]
pub struct GeneratedInvoice {
    pub invoice: Invoice,
    pub customer: Customer,
    pub document: DocumentOutcome,
}

impl GeneratedInvoice {
    pub fn is_rendered(&self) -> bool {
        matches!(self.document, DocumentOutcome::Rendered(_))
    }
}

pub struct InvoiceService;

impl InvoiceService {
    /// Validates the input, registers the client if unknown, appends the
    /// income record, then renders the document.
    ///
    /// Generation is deliberately not transactional across persistence and
    /// rendering: a render failure is reported alongside the already-saved
    /// record rather than rolling anything back.
    pub fn generate(
        store: &dyn RecordStore,
        ledger: &mut Ledger,
        directory: &mut CustomerDirectory,
        renderer: &dyn DocumentRenderer,
        params: InvoiceParams,
        now: NaiveDateTime,
    ) -> Result<GeneratedInvoice> {
        if params.client_name.trim().is_empty() {
            return Err(BooksError::Validation("client name must not be empty".into()));
        }
        if params.amount < 0.0 || !params.amount.is_finite() {
            return Err(BooksError::Validation(format!(
                "amount must be a non-negative number, got {}",
                params.amount
            )));
        }

        let invoice = Invoice {
            invoice_id: Invoice::id_for(now),
            date: params.date,
            client_name: params.client_name,
            service: params.service,
            amount: params.amount,
            notes: params.notes,
        };

        let customer = CustomerService::register_if_new(store, directory, &invoice.client_name)?;
        LedgerService::append_income(store, ledger, invoice.income_record())?;

        let document = match renderer.render_to_bytes(&invoice) {
            Ok(bytes) => DocumentOutcome::Rendered(bytes),
            Err(err) => {
                tracing::warn!(invoice_id = %invoice.invoice_id, %err, "record saved, render failed");
                DocumentOutcome::Failed(err.to_string())
            }
        };

        Ok(GeneratedInvoice {
            invoice,
            customer,
            document,
        })
    }

    /// Re-renders the document for an already persisted invoice.
    pub fn render(renderer: &dyn DocumentRenderer, invoice: &Invoice) -> Result<Vec<u8>> {
        renderer.render_to_bytes(invoice)
    }
}
