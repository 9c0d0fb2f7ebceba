//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use tillpoint_app::auth::SessionUser;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Store the authenticated user for downstream handlers.
    fn insert_session_user(&mut self, user: SessionUser);

    fn session_user_or_401(&self) -> Result<&SessionUser, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_session_user(&mut self, user: SessionUser) {
        self.inject(user);
    }

    fn session_user_or_401(&self) -> Result<&SessionUser, StatusError> {
        self.obtain::<SessionUser>()
            .map_err(|_ignored| StatusError::unauthorized().brief("Not authenticated"))
    }
}
