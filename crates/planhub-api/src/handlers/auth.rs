//! Auth handlers — signup and login.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use planhub_core::error::AppError;
use planhub_service::auth::service::Registration;

use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::AuthResponse;
use crate::state::AppState;

/// POST /auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state
        .auth_service
        .register(Registration {
            name: req.name,
            email: req.email,
            password: req.password,
            date_of_birth: req.date_of_birth,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            token: result.token.token,
            expires_at: result.token.expires_at,
            user: result.user.into(),
        }),
    ))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state
        .auth_service
        .authenticate(req.email.trim(), &req.password)
        .await?;

    Ok(Json(AuthResponse {
        message: "User signed in successfully".to_string(),
        token: result.token.token,
        expires_at: result.token.expires_at,
        user: result.user.into(),
    }))
}
