#![doc(test(attr(deny(warnings))))]

//! Books Core offers ledger, customer-directory, and invoice-generation
//! primitives for a small service business, plus the interactive CLI on top.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod ledger;
pub mod render;
pub mod store;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("Books Core tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::from_default_env().add_directive("books_core=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
