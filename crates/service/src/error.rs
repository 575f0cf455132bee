//! Service-level error type.

use thiserror::Error;

/// Errors produced by the service layer.
///
/// Services add no failure modes of their own; today this only wraps the
/// persistence error so handlers can match on `DbError::NotFound`.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Persistence error from the db crate.
    #[error("database error: {0}")]
    Db(#[from] db::DbError),
}
