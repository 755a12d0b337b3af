//! Request DTOs with validation.
//!
//! Wire field names are camelCase, matching the original client contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use planhub_entity::project::{Milestone, Phase, PhaseStatus, TeamMember};

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Full name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Date of birth as `YYYY-MM-DD`.
    #[validate(length(min = 1, message = "Date of birth is required"))]
    pub date_of_birth: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Update own-profile request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// New name.
    pub name: Option<String>,
    /// New date of birth as `YYYY-MM-DD`.
    pub date_of_birth: Option<String>,
}

/// Create project request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// Project name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// External project number.
    #[validate(length(min = 1, message = "Project number is required"))]
    pub project_number: String,
    /// Responsible manager.
    #[validate(length(min = 1, message = "Manager is required"))]
    pub manager: String,
    /// Initial status.
    pub status: Option<String>,
    /// Initial progress.
    pub progress: Option<i32>,
    /// Delivery deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Initial team.
    pub team: Option<Vec<TeamMember>>,
    /// Initial phases.
    pub phases: Option<Vec<Phase>>,
    /// Calculator: total estimated man-hours.
    pub total_man_hours: Option<i32>,
    /// Calculator: desired crew size.
    pub desired_manpower: Option<i32>,
    /// Calculator: crew efficiency factor.
    pub efficiency: Option<f64>,
    /// Calculator: target duration in weeks.
    pub target_duration_weeks: Option<i32>,
}

/// Update project request (partial).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    /// New name.
    pub name: Option<String>,
    /// New project number.
    pub project_number: Option<String>,
    /// New manager.
    pub manager: Option<String>,
    /// New status.
    pub status: Option<String>,
    /// New progress.
    pub progress: Option<i32>,
    /// New deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// New total man-hours.
    pub total_man_hours: Option<i32>,
    /// New desired crew size.
    pub desired_manpower: Option<i32>,
    /// New efficiency factor.
    pub efficiency: Option<f64>,
    /// New target duration in weeks.
    pub target_duration_weeks: Option<i32>,
}

/// Update project progress request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProgressRequest {
    /// New progress percentage (0-100).
    pub progress: i32,
}

/// Add team member request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddTeamMemberRequest {
    /// Member name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Member role.
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

/// Add phase request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddPhaseRequest {
    /// Phase name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Scheduled start.
    pub start_date: Option<DateTime<Utc>>,
    /// Scheduled end.
    pub end_date: Option<DateTime<Utc>>,
    /// Initial status.
    pub status: Option<PhaseStatus>,
    /// Initial progress.
    pub progress: Option<i32>,
    /// Assignee names.
    pub assignees: Option<Vec<String>>,
    /// Milestones.
    pub milestones: Option<Vec<Milestone>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_wire_field_names() {
        let req: SignupRequest = serde_json::from_str(
            r#"{"name":"Ada Lovelace","email":"ada@x.com","password":"longenough1","dateOfBirth":"1990-01-01"}"#,
        )
        .unwrap();
        assert_eq!(req.date_of_birth, "1990-01-01");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_fields_fail_validation() {
        let req = LoginRequest {
            email: String::new(),
            password: "pw".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
