//! Session cookie construction.

use jiff::SignedDuration;
use salvo::http::cookie::{Cookie, SameSite, time::Duration};

/// Name of the cookie carrying the session token.
pub(crate) const SESSION_COOKIE: &str = "auth-token";

/// HttpOnly, `SameSite=Lax` cookie scoped to the whole site, living for `max_age`.
pub(super) fn session_cookie(token: String, max_age: SignedDuration, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(secure)
        .max_age(Duration::seconds(max_age.as_secs().max(0)))
        .build()
}

/// A cookie that overwrites and immediately expires the session cookie.
pub(super) fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    session_cookie(String::new(), SignedDuration::ZERO, secure)
}
