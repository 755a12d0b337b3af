//! Request context carrying the authenticated identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for the current authenticated request.
///
/// Built by the HTTP layer's auth guard from verified token claims and
/// passed into service methods so that every operation knows *who* is
/// acting. Tokens are self-contained, so building this requires no
/// database access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The email embedded in the token (convenience field).
    pub email: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, email: String) -> Self {
        Self {
            user_id,
            email,
            request_time: Utc::now(),
        }
    }
}
