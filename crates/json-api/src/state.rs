//! State

use std::sync::Arc;

use tillpoint_app::context::AppContext;

/// How the session cookie is issued.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CookieSettings {
    /// Only send the cookie over HTTPS.
    pub(crate) secure: bool,
}

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) cookie: CookieSettings,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, cookie: CookieSettings) -> Self {
        Self { app, cookie }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, cookie: CookieSettings) -> Arc<Self> {
        Arc::new(Self::new(app, cookie))
    }
}
