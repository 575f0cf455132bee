//! Town service.

use std::sync::Arc;

use uuid::Uuid;

use db::models::{NewTown, Town};
use db::TownRepository;

use crate::ServiceError;

/// Thin orchestration over a [`TownRepository`].
#[derive(Clone)]
pub struct TownService {
    repo: Arc<dyn TownRepository>,
}

impl TownService {
    pub fn new(repo: Arc<dyn TownRepository>) -> Self {
        Self { repo }
    }

    /// Create a new town. The repository assigns the identifier and
    /// creation timestamp.
    pub async fn register(&self, new: NewTown) -> Result<Town, ServiceError> {
        Ok(self.repo.create(new).await?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Town, ServiceError> {
        Ok(self.repo.get_by_id(id).await?)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Town, ServiceError> {
        Ok(self.repo.get_by_name(name).await?)
    }

    pub async fn get_by_owner(&self, nickname: &str) -> Result<Town, ServiceError> {
        Ok(self.repo.get_by_owner(nickname).await?)
    }

    /// Overwrite all mutable fields of an existing town and return the
    /// refreshed row.
    pub async fn update(&self, id: Uuid, changes: NewTown) -> Result<Town, ServiceError> {
        self.repo.update(id, &changes).await?;
        Ok(self.repo.get_by_id(id).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        Ok(self.repo.delete(id).await?)
    }
}
