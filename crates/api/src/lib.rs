//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   GET    /health
//!   POST   /users
//!   GET    /users/{id}
//!   GET    /users/by-nickname/{nickname}
//!   PUT    /users/{id}
//!   DELETE /users/{id}
//!   POST   /towns
//!   GET    /towns/{id}
//!   GET    /towns/by-name/{name}
//!   GET    /towns/by-owner/{nickname}
//!   PUT    /towns/{id}
//!   DELETE /towns/{id}

pub mod handlers;

pub use handlers::{router, AppState};

use tokio::net::TcpListener;
use tracing::info;

/// Bind `addr` and serve the API until a shutdown signal arrives.
///
/// In-flight requests are drained before this returns; the caller drops the
/// connection pool afterwards.
pub async fn serve(addr: &str, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting shutdown");
        }
    }
}
