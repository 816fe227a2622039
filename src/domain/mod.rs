//! Pure domain models (records, customers, invoices). No I/O, no CLI,
//! no storage. Only data types and small behavior methods.

pub mod customer;
pub mod invoice;
pub mod record;

pub use customer::*;
pub use invoice::*;
pub use record::*;
