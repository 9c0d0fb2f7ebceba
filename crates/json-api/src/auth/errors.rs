//! Auth Errors

use salvo::http::StatusError;
use tracing::error;

use tillpoint_app::auth::{AuthServiceError, SessionTokenError};

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::InvalidCredentials => {
            StatusError::unauthorized().brief("Invalid credentials")
        }
        AuthServiceError::Token(SessionTokenError::Expired) => {
            StatusError::unauthorized().brief("Session expired")
        }
        AuthServiceError::Token(SessionTokenError::Invalid(_)) => {
            StatusError::unauthorized().brief("Invalid session token")
        }
        AuthServiceError::Token(source) => {
            error!("failed to process session token: {source}");

            StatusError::internal_server_error()
        }
    }
}
