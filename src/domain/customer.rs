//! Customer registry with sequential code assignment.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const CUSTOMER_CODE_PREFIX: &str = "CUST-";

/// A known client, identified by a sequentially assigned code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_code: String,
    pub client_name: String,
}

impl Customer {
    pub fn new(customer_code: impl Into<String>, client_name: impl Into<String>) -> Self {
        Self {
            customer_code: customer_code.into(),
            client_name: client_name.into(),
        }
    }

    /// Serializes the customer into worksheet field order.
    pub fn to_row(&self) -> Vec<String> {
        vec![self.customer_code.clone(), self.client_name.clone()]
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.client_name, self.customer_code)
    }
}

/// Deduplicated client registry, insertion-ordered.
///
/// Name matching is case-sensitive and exact: "Jane Doe " and "Jane Doe"
/// are distinct customers. Code assignment is a function of directory size
/// at the moment of insertion, so insertions must stay serialized (the
/// store-side conditional append enforces this).
#[derive(Debug, Default, Clone)]
pub struct CustomerDirectory {
    customers: Vec<Customer>,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_customers(customers: Vec<Customer>) -> Self {
        Self { customers }
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Case-sensitive exact-match lookup.
    pub fn find_exact(&self, client_name: &str) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|customer| customer.client_name == client_name)
    }

    /// Case-insensitive substring matches in insertion order, recomputed on
    /// every call. Backs interactive autocomplete.
    pub fn find_suggestions(&self, partial: &str) -> Vec<&Customer> {
        let needle = partial.to_lowercase();
        self.customers
            .iter()
            .filter(|customer| customer.client_name.to_lowercase().contains(&needle))
            .collect()
    }

    /// The code the next registration would receive.
    pub fn next_code(&self) -> String {
        format!("{}{:04}", CUSTOMER_CODE_PREFIX, self.customers.len() + 1)
    }

    pub(crate) fn push(&mut self, customer: Customer) {
        self.customers.push(customer);
    }
}
