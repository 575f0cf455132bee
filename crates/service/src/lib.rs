//! `service` crate — per-entity orchestration between HTTP handlers and the
//! repositories.
//!
//! Services construct models from caller-supplied fields and delegate
//! persistence to a repository trait object. No business rules live here;
//! repository errors propagate unchanged.

pub mod error;
pub mod town;
pub mod user;

pub use error::ServiceError;
pub use town::TownService;
pub use user::UserService;

#[cfg(test)]
mod service_tests;
