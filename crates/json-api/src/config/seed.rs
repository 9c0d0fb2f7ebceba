//! Seed Config

use clap::Args;

/// Demo data settings.
#[derive(Debug, Args)]
pub struct SeedConfig {
    /// Fill the store with demo inventory and 30 days of sales on startup
    #[arg(
        long,
        env = "SEED_DEMO_DATA",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub seed_demo_data: bool,

    /// Fixed RNG seed for reproducible demo data
    #[arg(long, env = "SEED_RNG_SEED")]
    pub seed_rng_seed: Option<u64>,
}
