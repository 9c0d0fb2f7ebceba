//! Auth Config

use clap::Args;
use jiff::SignedDuration;

/// Admin account and session settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Admin user id carried in session tokens
    #[arg(long, env = "ADMIN_ID", default_value = "1")]
    pub admin_id: String,

    /// Admin login email
    #[arg(long, env = "ADMIN_EMAIL")]
    pub admin_email: String,

    /// Admin login password
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    pub admin_password: String,

    /// Admin display name
    #[arg(long, env = "ADMIN_NAME", default_value = "Admin User")]
    pub admin_name: String,

    /// Secret used to sign session tokens
    #[arg(long, env = "SESSION_SECRET", hide_env_values = true)]
    pub session_secret: String,

    /// Session lifetime in hours
    #[arg(long, env = "SESSION_TTL_HOURS", default_value_t = 24)]
    pub session_ttl_hours: u32,

    /// Mark the session cookie `Secure`
    #[arg(long, env = "COOKIE_SECURE", default_value_t = false)]
    pub cookie_secure: bool,
}

impl AuthConfig {
    /// Session lifetime as a duration.
    #[must_use]
    pub fn session_ttl(&self) -> SignedDuration {
        SignedDuration::from_hours(i64::from(self.session_ttl_hours))
    }
}
