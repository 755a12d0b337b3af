//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header, verifies it, and injects the resolved identity.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use planhub_core::error::AppError;
use planhub_service::context::RequestContext;

use crate::state::AppState;

/// Extracted authenticated identity available in handlers.
///
/// This is the request-boundary auth guard: `NoToken -> Rejected`,
/// `TokenPresent & Invalid -> Rejected`, `TokenPresent & Valid ->
/// Authorized(subject)`. Verification is purely local — tokens are
/// self-contained, so no database access happens here.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let claims = state.jwt_decoder.verify(token)?;

        Ok(AuthUser(RequestContext::new(claims.sub, claims.email)))
    }
}
