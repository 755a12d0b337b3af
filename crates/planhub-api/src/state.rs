//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use planhub_auth::jwt::decoder::JwtDecoder;
use planhub_auth::jwt::encoder::JwtEncoder;
use planhub_auth::password::hasher::PasswordHasher;
use planhub_core::config::AppConfig;
use planhub_database::repositories::project::ProjectRepository;
use planhub_database::repositories::user::UserRepository;
use planhub_service::auth::service::AuthService;
use planhub_service::project::service::ProjectService;
use planhub_service::user::service::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks; nothing in
/// here is mutable after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Project repository
    pub project_repo: Arc<ProjectRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Registration and login service
    pub auth_service: Arc<AuthService>,
    /// User self-service
    pub user_service: Arc<UserService>,
    /// Project service
    pub project_service: Arc<ProjectService>,
}
