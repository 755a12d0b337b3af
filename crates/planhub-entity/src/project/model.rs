//! Project entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::phase::Phase;
use super::team::TeamMember;

/// A managed project record.
///
/// The nested `team` and `phases` collections live in JSONB columns on the
/// project row, so every mutation of them is a single-row write and
/// concurrent updates are last-write-wins.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique project identifier.
    pub id: Uuid,
    /// Project name.
    pub name: String,
    /// External project number (e.g. "#21000").
    pub project_number: String,
    /// Responsible manager.
    pub manager: String,
    /// Overall status (free text, e.g. "Active").
    pub status: String,
    /// Overall completion percentage, 0-100.
    pub progress: i32,
    /// Delivery deadline (optional).
    pub deadline: Option<DateTime<Utc>>,
    /// Team members.
    #[sqlx(json)]
    pub team: Vec<TeamMember>,
    /// Schedule phases.
    #[sqlx(json)]
    pub phases: Vec<Phase>,
    /// Calculator: total estimated man-hours.
    pub total_man_hours: i32,
    /// Calculator: desired crew size.
    pub desired_manpower: i32,
    /// Calculator: crew efficiency factor (0.0-1.0).
    pub efficiency: f64,
    /// Calculator: target duration in weeks.
    pub target_duration_weeks: i32,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
    /// When the project was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    /// Project name.
    pub name: String,
    /// External project number.
    pub project_number: String,
    /// Responsible manager.
    pub manager: String,
    /// Initial status (defaults to "Active").
    pub status: Option<String>,
    /// Initial progress (defaults to 0).
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

/// Partial update of a project's scalar and calculator fields.
///
/// Team and phase mutations go through their dedicated operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProject {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_serializes_nested_collections() {
        let project = Project {
            id: Uuid::new_v4(),
            name: "BECO TYSONS".to_string(),
            project_number: "#21000".to_string(),
            manager: "Gary Golden".to_string(),
            status: "Active".to_string(),
            progress: 65,
            deadline: None,
            team: vec![TeamMember::new("John Dennis", "Foreman")],
            phases: vec![],
            total_man_hours: 2000,
            desired_manpower: 6,
            efficiency: 0.6,
            target_duration_weeks: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json: serde_json::Value = serde_json::to_value(&project).unwrap();
        assert_eq!(json["team"][0]["role"], "Foreman");
        assert_eq!(json["progress"], 65);
    }
}
