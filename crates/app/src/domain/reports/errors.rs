//! Reports service errors.

use sqlx::Error;
use thiserror::Error;

/// Reports are read-only; every failure is a storage failure.
#[derive(Debug, Error)]
pub enum ReportsServiceError {
    #[error("storage error")]
    Sql(#[from] Error),
}
