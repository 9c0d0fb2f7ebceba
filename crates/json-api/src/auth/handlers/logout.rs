//! Logout Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{auth::cookie::cleared_session_cookie, extensions::*, state::State};

/// Logout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LogoutResponse {
    pub success: bool,
}

/// Logout Handler
///
/// Clears the session cookie. Tokens are stateless, so a copied token stays valid until it
/// expires.
#[endpoint(tags("auth"), summary = "Log Out")]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<LogoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    res.add_cookie(cleared_session_cookie(state.cookie.secure));

    Ok(Json(LogoutResponse { success: true }))
}
