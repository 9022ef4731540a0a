//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes over the injected in-memory store
//! - Role-gating middleware (`X-Role` header mapped through the authz policy)
//! - Error mapping from core/domain errors to JSON responses
//! - Demo fixture seeding

pub mod error;
pub mod middleware;
pub mod routes;
pub mod seed;
pub mod state;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::{AppState, MemoryStore};

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .fallback(routes::unknown_route)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
