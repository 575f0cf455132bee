//! Handler modules and the router wiring them to method + path patterns.
//!
//! Error mapping is uniform across entities: malformed body or path id →
//! 4xx via axum's extractor rejections, `NotFound` → 404, anything else the
//! repository reports → 500. Error bodies are short plain-text messages.

pub mod towns;
pub mod users;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use service::{TownService, UserService};

/// Shared handler state: one service per entity, injected at startup.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub towns: TownService,
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/users", post(users::create))
        .route(
            "/users/{id}",
            get(users::get).put(users::update).delete(users::remove),
        )
        .route("/users/by-nickname/{nickname}", get(users::get_by_nickname))
        .route("/towns", post(towns::create))
        .route(
            "/towns/{id}",
            get(towns::get).put(towns::update).delete(towns::remove),
        )
        .route("/towns/by-name/{name}", get(towns::get_by_name))
        .route("/towns/by-owner/{nickname}", get(towns::get_by_owner))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
