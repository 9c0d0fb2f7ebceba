//! Auth service errors.

use thiserror::Error;

use crate::auth::SessionTokenError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("session token error")]
    Token(#[from] SessionTokenError),
}
