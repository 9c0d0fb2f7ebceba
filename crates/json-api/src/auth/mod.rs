//! Authentication

mod cookie;
mod errors;
mod handlers;
pub(crate) mod middleware;

pub(crate) use cookie::SESSION_COOKIE;
pub(crate) use handlers::*;
