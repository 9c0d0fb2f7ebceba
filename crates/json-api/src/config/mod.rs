//! Server configuration module

use clap::Parser;
use thiserror::Error;
use zeroize::Zeroizing;

use tillpoint_app::{
    auth::{AdminAccount, SessionSigner, SessionUser},
    context::AppSettings,
    domain::invoices::models::CompanyDetails,
    pricing::{PricingError, TaxRate},
};

use crate::config::{
    auth::AuthConfig,
    business::BusinessConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    seed::SeedConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod auth;
pub(crate) mod business;
pub(crate) mod observability;
pub(crate) mod seed;
pub(crate) mod server;

/// Errors raised while turning parsed arguments into application settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `TAX_RATE` was out of range.
    #[error("invalid TAX_RATE: {0}")]
    TaxRate(#[source] PricingError),

    /// `REPORT_TIME_ZONE` did not name a known zone.
    #[error("unknown REPORT_TIME_ZONE {name:?}: {source}")]
    TimeZone {
        name: String,
        #[source]
        source: jiff::Error,
    },

    /// `SESSION_TTL_HOURS` was zero.
    #[error("SESSION_TTL_HOURS must be at least 1")]
    SessionTtl,
}

/// Tillpoint JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "tillpoint-json", about = "Tillpoint JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request diagnostics settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Admin account and session settings.
    #[command(flatten)]
    pub auth: AuthConfig,

    /// Tax, reporting and invoice settings.
    #[command(flatten)]
    pub business: BusinessConfig,

    /// Demo data settings.
    #[command(flatten)]
    pub seed: SeedConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Build the settings the application services are constructed from.
    ///
    /// # Errors
    ///
    /// Returns an error if the tax rate, time zone or session lifetime is invalid.
    pub fn app_settings(&self) -> Result<AppSettings, ConfigError> {
        let tax_rate = TaxRate::new(self.business.tax_rate).map_err(ConfigError::TaxRate)?;
        let time_zone = self.business.time_zone()?;

        if self.auth.session_ttl_hours == 0 {
            return Err(ConfigError::SessionTtl);
        }

        Ok(AppSettings {
            tax_rate,
            time_zone,
            company: CompanyDetails {
                name: self.business.company_name.clone(),
                address: self.business.company_address.clone(),
                city: self.business.company_city.clone(),
                phone: self.business.company_phone.clone(),
                email: self.business.company_email.clone(),
            },
            admin: AdminAccount {
                user: SessionUser {
                    id: self.auth.admin_id.clone(),
                    email: self.auth.admin_email.clone(),
                    name: self.auth.admin_name.clone(),
                },
                password: Zeroizing::new(self.auth.admin_password.clone()),
            },
            signer: SessionSigner::new(
                self.auth.session_secret.as_bytes(),
                self.auth.session_ttl(),
            ),
            seed_demo_data: self.seed.seed_demo_data,
            rng_seed: self.seed.seed_rng_seed,
        })
    }
}
