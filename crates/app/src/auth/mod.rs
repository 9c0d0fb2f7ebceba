//! Authentication
//!
//! A single configured administrator logs in with email and password and receives a signed
//! session token. Every other request presents that token.

mod errors;
mod models;
mod service;
mod token;

pub use errors::*;
pub use models::*;
pub use service::*;
pub use token::*;
