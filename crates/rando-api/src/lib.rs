//! Rando API — HTTP surface for the constrained scalar generators.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;

use crate::state::AppState;

/// Builds the full application router.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/integers", routes::integers::router())
        .nest("/api/v1/floats", routes::floats::router())
        .nest("/api/v1/complex", routes::complex::router())
        .with_state(app_state)
}
