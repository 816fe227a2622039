//! Session facade owning the record store, ledger, and customer directory.

use chrono::NaiveDateTime;

use crate::core::errors::Result;
use crate::core::services::{
    CustomerService, GeneratedInvoice, InvoiceParams, InvoiceService, LedgerService, ReportService,
};
use crate::domain::{Customer, CustomerDirectory, ExpenseRecord, IncomeRecord};
use crate::ledger::{BooksSummary, Ledger};
use crate::render::DocumentRenderer;
use crate::store::RecordStore;

/// One operator session over one set of books. The session owns all mutable
/// state explicitly; there is no ambient global to leak records between
/// interactions.
pub struct BooksManager {
    store: Box<dyn RecordStore>,
    ledger: Ledger,
    directory: CustomerDirectory,
}

impl BooksManager {
    /// Opens the books: ensures the worksheets exist and loads every record.
    pub fn open(store: Box<dyn RecordStore>) -> Result<Self> {
        let ledger = LedgerService::load(store.as_ref())?;
        let directory = CustomerService::load(store.as_ref())?;
        Ok(Self {
            store,
            ledger,
            directory,
        })
    }

    /// Re-reads everything from the store, discarding in-memory state. The
    /// recovery path after a conditional-append conflict.
    pub fn reload(&mut self) -> Result<()> {
        self.ledger = LedgerService::load(self.store.as_ref())?;
        self.directory = CustomerService::load(self.store.as_ref())?;
        Ok(())
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn directory(&self) -> &CustomerDirectory {
        &self.directory
    }

    pub fn totals(&self) -> BooksSummary {
        self.ledger.summary()
    }

    pub fn add_income(&mut self, record: IncomeRecord) -> Result<()> {
        LedgerService::append_income(self.store.as_ref(), &mut self.ledger, record)
    }

    pub fn add_expense(&mut self, record: ExpenseRecord) -> Result<()> {
        LedgerService::append_expense(self.store.as_ref(), &mut self.ledger, record)
    }

    pub fn suggestions(&self, partial: &str) -> Vec<&Customer> {
        self.directory.find_suggestions(partial)
    }

    pub fn generate_invoice(
        &mut self,
        renderer: &dyn DocumentRenderer,
        params: InvoiceParams,
        now: NaiveDateTime,
    ) -> Result<GeneratedInvoice> {
        InvoiceService::generate(
            self.store.as_ref(),
            &mut self.ledger,
            &mut self.directory,
            renderer,
            params,
            now,
        )
    }

    pub fn income_report_csv(&self) -> Result<Vec<u8>> {
        ReportService::income_csv(&self.ledger)
    }

    pub fn expense_report_csv(&self) -> Result<Vec<u8>> {
        ReportService::expense_csv(&self.ledger)
    }
}
