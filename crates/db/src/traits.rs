//! Repository traits — the persistence contract each entity exposes.
//!
//! Defined here so the `service` crate can depend on the contract without
//! caring whether rows live in Postgres or in the in-memory mocks.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{NewTown, NewUser, Town, User};
use crate::DbError;

/// Persistence operations for the `users` table.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. The repository assigns `id` and `created_at` and
    /// returns the completed row.
    async fn create(&self, new: NewUser) -> Result<User, DbError>;

    /// Fetch a user by primary key. `DbError::NotFound` when no row exists.
    async fn get_by_id(&self, id: Uuid) -> Result<User, DbError>;

    /// Fetch a user by nickname. `DbError::NotFound` when no row exists.
    async fn get_by_nickname(&self, nickname: &str) -> Result<User, DbError>;

    /// Overwrite all mutable columns of an existing user and stamp
    /// `updated_at`. `DbError::NotFound` when no row was affected.
    async fn update(&self, id: Uuid, changes: &NewUser) -> Result<(), DbError>;

    /// Delete a user by primary key. `DbError::NotFound` when no row was
    /// affected.
    async fn delete(&self, id: Uuid) -> Result<(), DbError>;
}

/// Persistence operations for the `towns` table.
#[async_trait]
pub trait TownRepository: Send + Sync {
    /// Insert a new town. The repository assigns `id` and `created_at` and
    /// returns the completed row.
    async fn create(&self, new: NewTown) -> Result<Town, DbError>;

    /// Fetch a town by primary key. `DbError::NotFound` when no row exists.
    async fn get_by_id(&self, id: Uuid) -> Result<Town, DbError>;

    /// Fetch a town by name. `DbError::NotFound` when no row exists.
    async fn get_by_name(&self, name: &str) -> Result<Town, DbError>;

    /// Fetch a town by its owner's nickname. `DbError::NotFound` when no row
    /// exists.
    async fn get_by_owner(&self, nickname: &str) -> Result<Town, DbError>;

    /// Overwrite all mutable columns of an existing town.
    /// `DbError::NotFound` when no row was affected.
    async fn update(&self, id: Uuid, changes: &NewTown) -> Result<(), DbError>;

    /// Delete a town by primary key. `DbError::NotFound` when no row was
    /// affected.
    async fn delete(&self, id: Uuid) -> Result<(), DbError>;
}
