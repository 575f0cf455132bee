//! Domain models that map 1-to-1 onto database tables.
//!
//! These types carry no behaviour beyond serialization; business
//! orchestration lives in the `service` crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// users
// ---------------------------------------------------------------------------

/// A persisted user row.
///
/// `id` and `created_at` are assigned by the repository on create and are
/// never accepted from a client. `password` is stored but never serialized
/// into responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub nickname: String,
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
    pub discord: Option<String>,
    pub email: String,
    pub balance: i64,
    /// Comma-joined town names. Free text, not a foreign key.
    pub towns: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// The mutable user columns, as supplied by a caller on create or update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub nickname: String,
    pub password: Option<String>,
    pub discord: Option<String>,
    pub email: String,
    pub balance: i64,
    pub towns: Option<String>,
}

// ---------------------------------------------------------------------------
// towns
// ---------------------------------------------------------------------------

/// A persisted town row.
///
/// `owner_nickname` is an informal reference to a user by name; there is no
/// foreign key and no cascading behaviour between the two tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Town {
    pub id: Uuid,
    pub name: String,
    pub balance: i64,
    pub owner_nickname: String,
    pub x_coord_overworld: i32,
    pub y_coord_overworld: i32,
    pub z_coord_overworld: i32,
    pub x_coord_nether: i32,
    pub y_coord_nether: i32,
    pub z_coord_nether: i32,
    pub created_at: DateTime<Utc>,
}

/// The mutable town columns, as supplied by a caller on create or update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTown {
    pub name: String,
    pub balance: i64,
    pub owner_nickname: String,
    pub x_coord_overworld: i32,
    pub y_coord_overworld: i32,
    pub z_coord_overworld: i32,
    pub x_coord_nether: i32,
    pub y_coord_nether: i32,
    pub z_coord_nether: i32,
}

/// Join town names into the comma-separated form stored on `users.towns`.
pub fn list_to_string(towns: &[Town]) -> String {
    towns
        .iter()
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn town(name: &str) -> Town {
        Town {
            id: Uuid::new_v4(),
            name: name.to_string(),
            balance: 0,
            owner_nickname: "owner".to_string(),
            x_coord_overworld: 0,
            y_coord_overworld: 64,
            z_coord_overworld: 0,
            x_coord_nether: 0,
            y_coord_nether: 64,
            z_coord_nether: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_list_joins_to_empty_string() {
        assert_eq!(list_to_string(&[]), "");
    }

    #[test]
    fn single_town_has_no_delimiter() {
        assert_eq!(list_to_string(&[town("alpha")]), "alpha");
    }

    #[test]
    fn many_towns_are_comma_separated() {
        let towns = [town("alpha"), town("beta"), town("gamma")];
        assert_eq!(list_to_string(&towns), "alpha,beta,gamma");
    }
}
