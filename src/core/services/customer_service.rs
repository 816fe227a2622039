//! Customer directory loading and auto-registration.

use crate::core::errors::Result;
use crate::domain::{Customer, CustomerDirectory};
use crate::ledger::CUSTOMER_SHEET;
use crate::store::RecordStore;

pub struct CustomerService;

impl CustomerService {
    /// Creates the worksheet if missing and loads the directory in stored
    /// order. Rows with neither code nor name are skipped.
    pub fn load(store: &dyn RecordStore) -> Result<CustomerDirectory> {
        store.ensure_worksheet(CUSTOMER_SHEET.name, &CUSTOMER_SHEET.header())?;
        let mut rows = store.read_all_rows(CUSTOMER_SHEET.name)?.into_iter();
        let header = rows.next().unwrap_or_default();
        let map = CUSTOMER_SHEET.column_map(&header)?;

        let mut customers = Vec::new();
        for row in rows {
            let code = map.field(&row, 0);
            let name = map.field(&row, 1);
            if code.trim().is_empty() && name.trim().is_empty() {
                continue;
            }
            customers.push(Customer::new(code, name));
        }
        Ok(CustomerDirectory::from_customers(customers))
    }

    /// Returns the existing customer for an exact (case-sensitive) name
    /// match, otherwise registers a new one with the next sequential code.
    ///
    /// The append is conditional on the directory size observed here, so a
    /// concurrent registration surfaces as a write conflict instead of two
    /// customers sharing a code. On conflict, reload the directory and call
    /// again.
    pub fn register_if_new(
        store: &dyn RecordStore,
        directory: &mut CustomerDirectory,
        client_name: &str,
    ) -> Result<Customer> {
        if let Some(existing) = directory.find_exact(client_name) {
            return Ok(existing.clone());
        }
        let customer = Customer::new(directory.next_code(), client_name);
        store.conditional_append_row(CUSTOMER_SHEET.name, &customer.to_row(), directory.len())?;
        tracing::info!(code = %customer.customer_code, "customer registered");
        directory.push(customer.clone());
        Ok(customer)
    }
}
