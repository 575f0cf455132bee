//! User service.

use std::sync::Arc;

use uuid::Uuid;

use db::models::{NewUser, User};
use db::UserRepository;

use crate::ServiceError;

/// Thin orchestration over a [`UserRepository`].
///
/// Cheap to clone; intended to be constructed once at startup and handed to
/// the API layer.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Create a new user. The repository assigns the identifier and
    /// creation timestamp.
    pub async fn register(&self, new: NewUser) -> Result<User, ServiceError> {
        Ok(self.repo.create(new).await?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<User, ServiceError> {
        Ok(self.repo.get_by_id(id).await?)
    }

    pub async fn get_by_nickname(&self, nickname: &str) -> Result<User, ServiceError> {
        Ok(self.repo.get_by_nickname(nickname).await?)
    }

    /// Overwrite all mutable fields of an existing user and return the
    /// refreshed row (including its new `updated_at`).
    pub async fn update(&self, id: Uuid, changes: NewUser) -> Result<User, ServiceError> {
        self.repo.update(id, &changes).await?;
        Ok(self.repo.get_by_id(id).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        Ok(self.repo.delete(id).await?)
    }
}
