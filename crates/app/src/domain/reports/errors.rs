//! Reports service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportsServiceError {
    /// The reporting window could not be computed for the requested point in time.
    #[error("report window out of range: {0}")]
    Window(#[from] jiff::Error),
}
