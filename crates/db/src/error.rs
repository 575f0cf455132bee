//! Typed error type for the db crate.

use thiserror::Error;

/// Errors surfaced by repositories and the pool.
///
/// `NotFound` is kept separate from the catch-all `Sqlx` variant so callers
/// can answer "row missing" differently from "database broken".
#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("row not found")]
    NotFound,
}
