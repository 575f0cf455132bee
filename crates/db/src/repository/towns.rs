//! Town CRUD operations against Postgres.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::{NewTown, Town};
use crate::traits::TownRepository;
use crate::{DbError, DbPool};

const TOWN_COLUMNS: &str = "id, name, balance, owner_nickname, \
     x_coord_overworld, y_coord_overworld, z_coord_overworld, \
     x_coord_nether, y_coord_nether, z_coord_nether, created_at";

/// `TownRepository` backed by the shared Postgres pool.
#[derive(Clone)]
pub struct PgTownRepository {
    pool: DbPool,
}

impl PgTownRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn get_by_column(&self, column: &'static str, value: &str) -> Result<Town, DbError> {
        // `column` is a compile-time constant, never request data.
        let town = sqlx::query_as::<_, Town>(&format!(
            "SELECT {TOWN_COLUMNS} FROM towns WHERE {column} = $1"
        ))
        .bind(value)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(town)
    }
}

#[async_trait]
impl TownRepository for PgTownRepository {
    async fn create(&self, new: NewTown) -> Result<Town, DbError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let town = sqlx::query_as::<_, Town>(
            r#"
            INSERT INTO towns
                (id, name, balance, owner_nickname,
                 x_coord_overworld, y_coord_overworld, z_coord_overworld,
                 x_coord_nether, y_coord_nether, z_coord_nether, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, name, balance, owner_nickname,
                      x_coord_overworld, y_coord_overworld, z_coord_overworld,
                      x_coord_nether, y_coord_nether, z_coord_nether, created_at
            "#,
        )
        .bind(id)
        .bind(&new.name)
        .bind(new.balance)
        .bind(&new.owner_nickname)
        .bind(new.x_coord_overworld)
        .bind(new.y_coord_overworld)
        .bind(new.z_coord_overworld)
        .bind(new.x_coord_nether)
        .bind(new.y_coord_nether)
        .bind(new.z_coord_nether)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(town)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Town, DbError> {
        let town = sqlx::query_as::<_, Town>(&format!(
            "SELECT {TOWN_COLUMNS} FROM towns WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(town)
    }

    async fn get_by_name(&self, name: &str) -> Result<Town, DbError> {
        self.get_by_column("name", name).await
    }

    async fn get_by_owner(&self, nickname: &str) -> Result<Town, DbError> {
        self.get_by_column("owner_nickname", nickname).await
    }

    async fn update(&self, id: Uuid, changes: &NewTown) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE towns
            SET name = $1, balance = $2, owner_nickname = $3,
                x_coord_overworld = $4, y_coord_overworld = $5, z_coord_overworld = $6,
                x_coord_nether = $7, y_coord_nether = $8, z_coord_nether = $9
            WHERE id = $10
            "#,
        )
        .bind(&changes.name)
        .bind(changes.balance)
        .bind(&changes.owner_nickname)
        .bind(changes.x_coord_overworld)
        .bind(changes.y_coord_overworld)
        .bind(changes.z_coord_overworld)
        .bind(changes.x_coord_nether)
        .bind(changes.y_coord_nether)
        .bind(changes.z_coord_nether)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM towns WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }

        Ok(())
    }
}
