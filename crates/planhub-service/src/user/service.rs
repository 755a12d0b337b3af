//! User self-service operations — profile viewing and updates.

use std::sync::Arc;

use tracing::info;

use planhub_core::error::AppError;
use planhub_database::repositories::user::UserRepository;
use planhub_entity::user::{UpdateProfile, User};

use crate::auth::service::{parse_birth_date, validate_name};
use crate::context::RequestContext;

/// Handles user self-service operations.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Gets the current user's own record.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates the current user's profile.
    ///
    /// Only name and date of birth are mutable here; email and password
    /// changes are outside this operation's contract.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        name: Option<String>,
        date_of_birth: Option<String>,
    ) -> Result<User, AppError> {
        let name = match name {
            Some(name) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(AppError::validation("Name cannot be empty"));
                }
                validate_name(&name)?;
                Some(name)
            }
            None => None,
        };

        let date_of_birth = match date_of_birth {
            Some(value) => Some(parse_birth_date(value.trim())?),
            None => None,
        };

        let update = UpdateProfile {
            name,
            date_of_birth,
        };

        let user = self.user_repo.update_profile(ctx.user_id, &update).await?;

        info!(user_id = %ctx.user_id, "Profile updated");

        Ok(user)
    }
}
