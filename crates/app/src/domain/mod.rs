//! Tillpoint Domain Concerns

pub mod carts;
pub mod inventory;
pub mod invoices;
pub mod reports;
pub mod sales;
