//! PlanHub Server — project-management backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use planhub_core::config::AppConfig;
use planhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("PLANHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting PlanHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db_pool = planhub_database::connection::DatabasePool::connect(&config.database)
        .await?
        .into_pool();

    tracing::info!("Running database migrations...");
    planhub_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Initialize auth system ───────────────────────────
    let password_hasher = Arc::new(planhub_auth::password::hasher::PasswordHasher::new());
    let password_validator = Arc::new(planhub_auth::password::validator::PasswordValidator::new(
        &config.auth,
    ));
    let jwt_encoder = Arc::new(planhub_auth::jwt::encoder::JwtEncoder::new(&config.auth)?);
    let jwt_decoder = Arc::new(planhub_auth::jwt::decoder::JwtDecoder::new(&config.auth)?);

    // ── Step 3: Initialize repositories ──────────────────────────
    let user_repo = Arc::new(planhub_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let project_repo = Arc::new(
        planhub_database::repositories::project::ProjectRepository::new(db_pool.clone()),
    );

    // ── Step 4: Initialize services ──────────────────────────────
    let auth_service = Arc::new(planhub_service::auth::service::AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        Arc::clone(&jwt_encoder),
    ));
    let user_service = Arc::new(planhub_service::user::service::UserService::new(
        Arc::clone(&user_repo),
    ));
    let project_service = Arc::new(planhub_service::project::service::ProjectService::new(
        Arc::clone(&project_repo),
    ));

    // ── Step 5: Build and start HTTP server ──────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app_state = planhub_api::state::AppState {
        config: Arc::new(config),
        db_pool: db_pool.clone(),
        jwt_encoder,
        jwt_decoder,
        password_hasher,
        user_repo,
        project_repo,
        auth_service,
        user_service,
        project_service,
    };

    let app = planhub_api::router::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("PlanHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    db_pool.close().await;
    tracing::info!("PlanHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
