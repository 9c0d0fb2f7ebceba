//! Shared application domain, in-memory store and services for Tillpoint.

pub mod auth;
pub mod context;
pub mod domain;
pub mod pricing;
pub mod seed;
pub mod store;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;
