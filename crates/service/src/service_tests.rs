//! Service-layer tests against the in-memory repositories.
//!
//! These cover the persistence contract without a real Postgres connection:
//! server-assigned identifiers, create/get round-trips, and the `NotFound`
//! semantics of update and delete on missing rows.

use std::sync::Arc;

use uuid::Uuid;

use db::mock::{InMemoryTownRepository, InMemoryUserRepository};
use db::models::{NewTown, NewUser};
use db::DbError;

use crate::{ServiceError, TownService, UserService};

fn user_service() -> UserService {
    UserService::new(Arc::new(InMemoryUserRepository::new()))
}

fn town_service() -> TownService {
    TownService::new(Arc::new(InMemoryTownRepository::new()))
}

fn alice() -> NewUser {
    NewUser {
        nickname: "alice".to_string(),
        password: Some("hunter2".to_string()),
        discord: None,
        email: "a@x.com".to_string(),
        balance: 100,
        towns: Some("alpha,beta".to_string()),
    }
}

fn alpha_town() -> NewTown {
    NewTown {
        name: "alpha".to_string(),
        balance: 5_000,
        owner_nickname: "alice".to_string(),
        x_coord_overworld: 120,
        y_coord_overworld: 64,
        z_coord_overworld: -340,
        x_coord_nether: 15,
        y_coord_nether: 64,
        z_coord_nether: -42,
    }
}

fn assert_not_found(err: ServiceError) {
    assert!(matches!(err, ServiceError::Db(DbError::NotFound)), "expected NotFound, got {err}");
}

// ============================================================
// Users
// ============================================================

#[tokio::test]
async fn register_assigns_server_side_identifier() {
    let svc = user_service();
    let user = svc.register(alice()).await.unwrap();

    assert_ne!(user.id, Uuid::nil());
    assert_eq!(user.nickname, "alice");
    assert!(user.updated_at.is_none());
}

#[tokio::test]
async fn get_after_register_round_trips_all_fields() {
    let svc = user_service();
    let created = svc.register(alice()).await.unwrap();

    let fetched = svc.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let by_nickname = svc.get_by_nickname("alice").await.unwrap();
    assert_eq!(by_nickname, created);
}

#[tokio::test]
async fn update_overwrites_fields_and_stamps_updated_at() {
    let svc = user_service();
    let created = svc.register(alice()).await.unwrap();

    let mut changes = alice();
    changes.balance = 250;
    changes.towns = None;

    let updated = svc.update(created.id, changes).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.balance, 250);
    assert_eq!(updated.towns, None);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at.is_some());
}

#[tokio::test]
async fn update_on_missing_user_is_not_found_and_creates_nothing() {
    let svc = user_service();
    let id = Uuid::new_v4();

    assert_not_found(svc.update(id, alice()).await.unwrap_err());
    assert_not_found(svc.get_by_id(id).await.unwrap_err());
}

#[tokio::test]
async fn delete_on_missing_user_is_not_found() {
    let svc = user_service();
    assert_not_found(svc.delete(Uuid::new_v4()).await.unwrap_err());
}

#[tokio::test]
async fn deleted_user_is_gone() {
    let svc = user_service();
    let created = svc.register(alice()).await.unwrap();

    svc.delete(created.id).await.unwrap();
    assert_not_found(svc.get_by_id(created.id).await.unwrap_err());
}

// ============================================================
// Towns
// ============================================================

#[tokio::test]
async fn register_town_round_trips_by_every_lookup() {
    let svc = town_service();
    let created = svc.register(alpha_town()).await.unwrap();

    assert_ne!(created.id, Uuid::nil());
    assert_eq!(svc.get_by_id(created.id).await.unwrap(), created);
    assert_eq!(svc.get_by_name("alpha").await.unwrap(), created);
    assert_eq!(svc.get_by_owner("alice").await.unwrap(), created);
}

#[tokio::test]
async fn town_update_is_full_field_overwrite() {
    let svc = town_service();
    let created = svc.register(alpha_town()).await.unwrap();

    let mut changes = alpha_town();
    changes.owner_nickname = "bob".to_string();
    changes.x_coord_nether = 99;

    let updated = svc.update(created.id, changes).await.unwrap();
    assert_eq!(updated.owner_nickname, "bob");
    assert_eq!(updated.x_coord_nether, 99);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn town_update_and_delete_on_missing_id_are_not_found() {
    let svc = town_service();
    let id = Uuid::new_v4();

    assert_not_found(svc.update(id, alpha_town()).await.unwrap_err());
    assert_not_found(svc.delete(id).await.unwrap_err());
}

#[tokio::test]
async fn deleted_town_is_gone() {
    let svc = town_service();
    let created = svc.register(alpha_town()).await.unwrap();

    svc.delete(created.id).await.unwrap();
    assert_not_found(svc.get_by_id(created.id).await.unwrap_err());
    assert_not_found(svc.get_by_name("alpha").await.unwrap_err());
}
