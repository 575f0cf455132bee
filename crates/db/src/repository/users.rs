//! User CRUD operations against Postgres.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::{NewUser, User};
use crate::traits::UserRepository;
use crate::{DbError, DbPool};

const USER_COLUMNS: &str =
    "id, nickname, password, discord, email, balance, towns, created_at, updated_at";

/// `UserRepository` backed by the shared Postgres pool.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: DbPool,
}

impl PgUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new: NewUser) -> Result<User, DbError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, nickname, password, discord, email, balance, towns, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, nickname, password, discord, email, balance, towns, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&new.nickname)
        .bind(&new.password)
        .bind(&new.discord)
        .bind(&new.email)
        .bind(new.balance)
        .bind(&new.towns)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<User, DbError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(user)
    }

    async fn get_by_nickname(&self, nickname: &str) -> Result<User, DbError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE nickname = $1"
        ))
        .bind(nickname)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(user)
    }

    async fn update(&self, id: Uuid, changes: &NewUser) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET nickname = $1, password = $2, discord = $3, email = $4,
                balance = $5, towns = $6, updated_at = $7
            WHERE id = $8
            "#,
        )
        .bind(&changes.nickname)
        .bind(&changes.password)
        .bind(&changes.discord)
        .bind(&changes.email)
        .bind(changes.balance)
        .bind(&changes.towns)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }

        Ok(())
    }
}
