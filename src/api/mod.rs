//! HTTP API module.
//!
//! Exposes the balance endpoint and a liveness probe.

pub mod balance;
pub mod health;
pub mod state;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use balance::{get_balance, BalanceQuery};
pub use state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/balance", get(balance::get_balance))
        .route("/health", get(health::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let app = router(AppState::from_config(&Config::default()));
        let _ = app.into_make_service();
    }
}
