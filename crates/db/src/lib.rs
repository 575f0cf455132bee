//! `db` crate — pure persistence layer.
//!
//! Provides a connection pool, domain models, repository traits, and the
//! Postgres implementations for every table in the townhall schema.
//! No business logic lives here.

pub mod error;
pub mod mock;
pub mod models;
pub mod pool;
pub mod repository;
pub mod traits;

pub use error::DbError;
pub use pool::DbPool;
pub use traits::{TownRepository, UserRepository};
