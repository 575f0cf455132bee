use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::error;
use uuid::Uuid;

use db::models::{NewTown, Town};
use db::DbError;
use service::ServiceError;

use super::AppState;

type HandlerError = (StatusCode, &'static str);

#[derive(serde::Deserialize)]
pub struct TownDto {
    pub name: String,
    #[serde(default)]
    pub balance: i64,
    pub owner_nickname: String,
    pub x_coord_overworld: i32,
    pub y_coord_overworld: i32,
    pub z_coord_overworld: i32,
    pub x_coord_nether: i32,
    pub y_coord_nether: i32,
    pub z_coord_nether: i32,
}

impl From<TownDto> for NewTown {
    fn from(dto: TownDto) -> Self {
        Self {
            name: dto.name,
            balance: dto.balance,
            owner_nickname: dto.owner_nickname,
            x_coord_overworld: dto.x_coord_overworld,
            y_coord_overworld: dto.y_coord_overworld,
            z_coord_overworld: dto.z_coord_overworld,
            x_coord_nether: dto.x_coord_nether,
            y_coord_nether: dto.y_coord_nether,
            z_coord_nether: dto.z_coord_nether,
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<TownDto>,
) -> Result<Json<Town>, HandlerError> {
    match state.towns.register(payload.into()).await {
        Ok(town) => Ok(Json(town)),
        Err(err) => {
            error!(error = %err, "failed to create town");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "internal error"))
        }
    }
}

pub async fn get(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Town>, HandlerError> {
    match state.towns.get_by_id(id).await {
        Ok(town) => Ok(Json(town)),
        Err(ServiceError::Db(DbError::NotFound)) => {
            Err((StatusCode::NOT_FOUND, "town not found"))
        }
        Err(err) => {
            error!(error = %err, %id, "failed to get town");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "internal error"))
        }
    }
}

pub async fn get_by_name(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Town>, HandlerError> {
    match state.towns.get_by_name(&name).await {
        Ok(town) => Ok(Json(town)),
        Err(ServiceError::Db(DbError::NotFound)) => {
            Err((StatusCode::NOT_FOUND, "town not found"))
        }
        Err(err) => {
            error!(error = %err, %name, "failed to get town");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "internal error"))
        }
    }
}

pub async fn get_by_owner(
    Path(nickname): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Town>, HandlerError> {
    match state.towns.get_by_owner(&nickname).await {
        Ok(town) => Ok(Json(town)),
        Err(ServiceError::Db(DbError::NotFound)) => {
            Err((StatusCode::NOT_FOUND, "town not found"))
        }
        Err(err) => {
            error!(error = %err, %nickname, "failed to get town");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "internal error"))
        }
    }
}

pub async fn update(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<TownDto>,
) -> Result<Json<Town>, HandlerError> {
    match state.towns.update(id, payload.into()).await {
        Ok(town) => Ok(Json(town)),
        Err(ServiceError::Db(DbError::NotFound)) => {
            Err((StatusCode::NOT_FOUND, "town not found"))
        }
        Err(err) => {
            error!(error = %err, %id, "failed to update town");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "internal error"))
        }
    }
}

pub async fn remove(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, HandlerError> {
    match state.towns.delete(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(ServiceError::Db(DbError::NotFound)) => {
            Err((StatusCode::NOT_FOUND, "town not found"))
        }
        Err(err) => {
            error!(error = %err, %id, "failed to delete town");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "internal error"))
        }
    }
}
