//! Invoices

mod errors;
mod handlers;

pub(crate) use handlers::*;
