//! In-memory repositories — test doubles for the repository traits.
//!
//! Useful in service and handler tests where a real Postgres instance is
//! either unavailable or irrelevant. Same contract as the Postgres
//! implementations, including `NotFound` on zero affected rows.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::{NewTown, NewUser, Town, User};
use crate::traits::{TownRepository, UserRepository};
use crate::DbError;

/// `UserRepository` over a plain `HashMap`.
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new: NewUser) -> Result<User, DbError> {
        let user = User {
            id: Uuid::new_v4(),
            nickname: new.nickname,
            password: new.password,
            discord: new.discord,
            email: new.email,
            balance: new.balance,
            towns: new.towns,
            created_at: Utc::now(),
            updated_at: None,
        };
        self.rows.lock().unwrap().insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<User, DbError> {
        self.rows
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(DbError::NotFound)
    }

    async fn get_by_nickname(&self, nickname: &str) -> Result<User, DbError> {
        self.rows
            .lock()
            .unwrap()
            .values()
            .find(|u| u.nickname == nickname)
            .cloned()
            .ok_or(DbError::NotFound)
    }

    async fn update(&self, id: Uuid, changes: &NewUser) -> Result<(), DbError> {
        let mut rows = self.rows.lock().unwrap();
        let user = rows.get_mut(&id).ok_or(DbError::NotFound)?;
        user.nickname = changes.nickname.clone();
        user.password = changes.password.clone();
        user.discord = changes.discord.clone();
        user.email = changes.email.clone();
        user.balance = changes.balance;
        user.towns = changes.towns.clone();
        user.updated_at = Some(Utc::now());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(DbError::NotFound)
    }
}

/// `TownRepository` over a plain `HashMap`.
#[derive(Default)]
pub struct InMemoryTownRepository {
    rows: Mutex<HashMap<Uuid, Town>>,
}

impl InMemoryTownRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TownRepository for InMemoryTownRepository {
    async fn create(&self, new: NewTown) -> Result<Town, DbError> {
        let town = Town {
            id: Uuid::new_v4(),
            name: new.name,
            balance: new.balance,
            owner_nickname: new.owner_nickname,
            x_coord_overworld: new.x_coord_overworld,
            y_coord_overworld: new.y_coord_overworld,
            z_coord_overworld: new.z_coord_overworld,
            x_coord_nether: new.x_coord_nether,
            y_coord_nether: new.y_coord_nether,
            z_coord_nether: new.z_coord_nether,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().insert(town.id, town.clone());
        Ok(town)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Town, DbError> {
        self.rows
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(DbError::NotFound)
    }

    async fn get_by_name(&self, name: &str) -> Result<Town, DbError> {
        self.rows
            .lock()
            .unwrap()
            .values()
            .find(|t| t.name == name)
            .cloned()
            .ok_or(DbError::NotFound)
    }

    async fn get_by_owner(&self, nickname: &str) -> Result<Town, DbError> {
        self.rows
            .lock()
            .unwrap()
            .values()
            .find(|t| t.owner_nickname == nickname)
            .cloned()
            .ok_or(DbError::NotFound)
    }

    async fn update(&self, id: Uuid, changes: &NewTown) -> Result<(), DbError> {
        let mut rows = self.rows.lock().unwrap();
        let town = rows.get_mut(&id).ok_or(DbError::NotFound)?;
        town.name = changes.name.clone();
        town.balance = changes.balance;
        town.owner_nickname = changes.owner_nickname.clone();
        town.x_coord_overworld = changes.x_coord_overworld;
        town.y_coord_overworld = changes.y_coord_overworld;
        town.z_coord_overworld = changes.z_coord_overworld;
        town.x_coord_nether = changes.x_coord_nether;
        town.y_coord_nether = changes.y_coord_nether;
        town.z_coord_nether = changes.z_coord_nether;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(DbError::NotFound)
    }
}
