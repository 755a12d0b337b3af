//! Route definitions for the PlanHub HTTP API.
//!
//! Routes are organized by domain and mounted at the root, mirroring the
//! `/auth` and `/projects` prefixes of the original deployment. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes as usize;

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(auth_routes())
        .merge(project_routes())
        .merge(health_routes())
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: signup, login, own profile
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
        .route(
            "/auth/profile",
            get(handlers::user::get_profile).put(handlers::user::update_profile),
        )
}

/// Project CRUD and nested-collection mutations (all bearer-guarded)
fn project_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/projects",
            get(handlers::project::list_projects).post(handlers::project::create_project),
        )
        .route(
            "/projects/{id}",
            get(handlers::project::get_project)
                .put(handlers::project::update_project)
                .delete(handlers::project::delete_project),
        )
        .route(
            "/projects/{id}/progress",
            patch(handlers::project::update_progress),
        )
        .route(
            "/projects/{id}/team",
            post(handlers::project::add_team_member),
        )
        .route(
            "/projects/{id}/team/{member_id}",
            delete(handlers::project::remove_team_member),
        )
        .route("/projects/{id}/phases", post(handlers::project::add_phase))
}

/// Liveness endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
