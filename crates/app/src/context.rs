//! App Context

use std::{fmt, sync::Arc};

use jiff::{Timestamp, tz::TimeZone};
use thiserror::Error;
use tracing::info;

use crate::{
    auth::{AdminAccount, AuthService, ConfiguredAuthService, SessionSigner},
    domain::{
        carts::{CartsService, MemoryCartsService},
        inventory::{InventoryService, MemoryInventoryService},
        invoices::{InvoicesService, MemoryInvoicesService, models::CompanyDetails},
        reports::{MemoryReportsService, ReportsService},
        sales::{MemorySalesService, SalesService},
    },
    pricing::TaxRate,
    seed::{SeedOptions, demo_tables},
    store::{Store, Tables},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to seed demo data")]
    Seed(#[source] jiff::Error),
}

/// Business and account settings the services are built from.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub tax_rate: TaxRate,

    /// Zone calendar dates are taken in for report buckets and "today".
    pub time_zone: TimeZone,

    pub company: CompanyDetails,
    pub admin: AdminAccount,
    pub signer: SessionSigner,
    pub seed_demo_data: bool,
    pub rng_seed: Option<u64>,
}

#[derive(Clone)]
pub struct AppContext {
    pub store: Store,
    pub inventory: Arc<dyn InventoryService>,
    pub sales: Arc<dyn SalesService>,
    pub carts: Arc<dyn CartsService>,
    pub invoices: Arc<dyn InvoicesService>,
    pub reports: Arc<dyn ReportsService>,
    pub auth: Arc<dyn AuthService>,
}

impl fmt::Debug for AppContext {
    /// Services are trait objects and the store can be large, so neither is printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build the store, seeding it if asked to, and every service on top of it.
    ///
    /// # Errors
    ///
    /// Returns an error when the demo data cannot be generated.
    pub fn from_settings(settings: AppSettings) -> Result<Self, AppInitError> {
        let tables = if settings.seed_demo_data {
            demo_tables(&SeedOptions {
                now: Timestamp::now(),
                time_zone: settings.time_zone.clone(),
                tax_rate: settings.tax_rate,
                rng_seed: settings.rng_seed,
            })
            .map_err(AppInitError::Seed)?
        } else {
            info!("starting with an empty store");

            Tables::default()
        };

        info!(
            inventory_items = tables.inventory.len(),
            sales = tables.sales.len(),
            "store initialized"
        );

        Ok(Self::with_store(Store::new(tables), settings))
    }

    /// Build every service over an existing store.
    #[must_use]
    pub fn with_store(store: Store, settings: AppSettings) -> Self {
        let AppSettings {
            tax_rate,
            time_zone,
            company,
            admin,
            signer,
            ..
        } = settings;

        Self {
            inventory: Arc::new(MemoryInventoryService::new(store.clone())),
            sales: Arc::new(MemorySalesService::new(store.clone(), tax_rate)),
            carts: Arc::new(MemoryCartsService::new(store.clone(), tax_rate)),
            invoices: Arc::new(MemoryInvoicesService::new(store.clone(), tax_rate, company)),
            reports: Arc::new(MemoryReportsService::new(store.clone(), time_zone)),
            auth: Arc::new(ConfiguredAuthService::new(admin, signer)),
            store,
        }
    }
}
