//! User self-service handlers.

use axum::Json;
use axum::extract::State;

use planhub_core::error::AppError;

use crate::dto::request::UpdateProfileRequest;
use crate::dto::response::{UserEnvelope, UserResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /auth/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_profile(&auth).await?;

    Ok(Json(user.into()))
}

/// PUT /auth/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserEnvelope>, AppError> {
    let user = state
        .user_service
        .update_profile(&auth, req.name, req.date_of_birth)
        .await?;

    Ok(Json(UserEnvelope {
        message: "Profile updated successfully".to_string(),
        user: user.into(),
    }))
}
