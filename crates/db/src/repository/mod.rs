//! Postgres repository implementations — one module per table.
//!
//! Every query is parameterized with `$n` placeholders; no SQL is ever
//! assembled from request data.

pub mod towns;
pub mod users;

pub use towns::PgTownRepository;
pub use users::PgUserRepository;
