//! Invoice Handlers

pub(crate) mod get;
