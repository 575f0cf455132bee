use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::error;
use uuid::Uuid;

use db::models::{NewUser, User};
use db::DbError;
use service::ServiceError;

use super::AppState;

type HandlerError = (StatusCode, &'static str);

#[derive(serde::Deserialize)]
pub struct UserDto {
    pub nickname: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub discord: Option<String>,
    pub email: String,
    #[serde(default)]
    pub balance: i64,
    #[serde(default)]
    pub towns: Option<String>,
}

impl From<UserDto> for NewUser {
    fn from(dto: UserDto) -> Self {
        Self {
            nickname: dto.nickname,
            password: dto.password,
            discord: dto.discord,
            email: dto.email,
            balance: dto.balance,
            towns: dto.towns,
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<UserDto>,
) -> Result<Json<User>, HandlerError> {
    match state.users.register(payload.into()).await {
        Ok(user) => Ok(Json(user)),
        Err(err) => {
            error!(error = %err, "failed to create user");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "internal error"))
        }
    }
}

pub async fn get(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<User>, HandlerError> {
    match state.users.get_by_id(id).await {
        Ok(user) => Ok(Json(user)),
        Err(ServiceError::Db(DbError::NotFound)) => {
            Err((StatusCode::NOT_FOUND, "user not found"))
        }
        Err(err) => {
            error!(error = %err, %id, "failed to get user");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "internal error"))
        }
    }
}

pub async fn get_by_nickname(
    Path(nickname): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<User>, HandlerError> {
    match state.users.get_by_nickname(&nickname).await {
        Ok(user) => Ok(Json(user)),
        Err(ServiceError::Db(DbError::NotFound)) => {
            Err((StatusCode::NOT_FOUND, "user not found"))
        }
        Err(err) => {
            error!(error = %err, %nickname, "failed to get user");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "internal error"))
        }
    }
}

pub async fn update(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<UserDto>,
) -> Result<Json<User>, HandlerError> {
    match state.users.update(id, payload.into()).await {
        Ok(user) => Ok(Json(user)),
        Err(ServiceError::Db(DbError::NotFound)) => {
            Err((StatusCode::NOT_FOUND, "user not found"))
        }
        Err(err) => {
            error!(error = %err, %id, "failed to update user");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "internal error"))
        }
    }
}

pub async fn remove(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, HandlerError> {
    match state.users.delete(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(ServiceError::Db(DbError::NotFound)) => {
            Err((StatusCode::NOT_FOUND, "user not found"))
        }
        Err(err) => {
            error!(error = %err, %id, "failed to delete user");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "internal error"))
        }
    }
}
