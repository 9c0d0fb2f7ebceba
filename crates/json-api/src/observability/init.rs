//! Tracing subscriber lifecycle management.

use crate::config::ServerConfig;

use super::{ObservabilityError, logging, settings};

/// Apply runtime request settings and install the global log subscriber.
pub(crate) fn init(config: &ServerConfig) -> Result<(), ObservabilityError> {
    settings::apply_runtime_config(config);

    logging::init_subscriber(config)
}
