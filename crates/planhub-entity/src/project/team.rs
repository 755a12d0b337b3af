//! Project team membership.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A member of a project's team.
///
/// Stored inside the project row's `team` JSONB array; the id is assigned
/// server-side when the member is added so that individual members can be
/// removed later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Member identifier within the project.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Member name.
    pub name: String,
    /// Member role on the project (free text, e.g. "Foreman").
    pub role: String,
}

impl TeamMember {
    /// Creates a member with a freshly assigned id.
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            role: role.into(),
        }
    }
}
