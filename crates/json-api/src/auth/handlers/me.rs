//! Current User Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use tillpoint_app::auth::SessionUser;

use crate::extensions::*;

/// Authenticated user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<SessionUser> for UserResponse {
    fn from(user: SessionUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

/// Current user response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MeResponse {
    pub user: UserResponse,
}

/// Current User Handler
///
/// Returns the user the session token was issued to.
#[endpoint(
    tags("auth"),
    summary = "Current User",
    security(("cookie_auth" = []), ("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<MeResponse>, StatusError> {
    let user = depot.session_user_or_401()?.clone();

    Ok(Json(MeResponse { user: user.into() }))
}
