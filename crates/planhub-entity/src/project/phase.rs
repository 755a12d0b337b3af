//! Project phases and milestones.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use planhub_core::AppError;

/// Lifecycle status of a single project phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseStatus {
    /// Not yet started.
    #[default]
    Planning,
    /// In progress.
    Active,
    /// Behind plan but recoverable.
    #[serde(rename = "At Risk")]
    AtRisk,
    /// Past its end date.
    Delayed,
    /// Completed.
    Done,
}

impl PhaseStatus {
    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::Active => "Active",
            Self::AtRisk => "At Risk",
            Self::Delayed => "Delayed",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for PhaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PhaseStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Planning" => Ok(Self::Planning),
            "Active" => Ok(Self::Active),
            "At Risk" => Ok(Self::AtRisk),
            "Delayed" => Ok(Self::Delayed),
            "Done" => Ok(Self::Done),
            _ => Err(AppError::validation(format!(
                "Invalid phase status: '{s}'. Expected one of: Planning, Active, At Risk, Delayed, Done"
            ))),
        }
    }
}

/// A dated milestone within a phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Milestone name.
    pub name: String,
    /// Target date (optional).
    pub date: Option<DateTime<Utc>>,
}

/// A phase of a project's schedule.
///
/// Stored inside the project row's `phases` JSONB array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    /// Phase identifier within the project.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Phase name.
    pub name: String,
    /// Scheduled start (optional).
    pub start_date: Option<DateTime<Utc>>,
    /// Scheduled end (optional).
    pub end_date: Option<DateTime<Utc>>,
    /// Lifecycle status.
    #[serde(default)]
    pub status: PhaseStatus,
    /// Completion percentage, 0-100.
    #[serde(default)]
    pub progress: i32,
    /// Names of people assigned to this phase.
    #[serde(default)]
    pub assignees: Vec<String>,
    /// Milestones within this phase.
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(PhaseStatus::AtRisk.to_string(), "At Risk");
        assert_eq!("At Risk".parse::<PhaseStatus>().unwrap(), PhaseStatus::AtRisk);
        assert!("Stalled".parse::<PhaseStatus>().is_err());
    }

    #[test]
    fn test_status_serde_round_trip() {
        let json = serde_json::to_string(&PhaseStatus::AtRisk).unwrap();
        assert_eq!(json, "\"At Risk\"");
        let back: PhaseStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PhaseStatus::AtRisk);
    }

    #[test]
    fn test_phase_defaults_on_deserialize() {
        let phase: Phase = serde_json::from_str(
            r#"{"id":"6f7a0a38-9f4e-4a6d-9f2a-0e2e9da11111","name":"Rough-in","startDate":null,"endDate":null}"#,
        )
        .unwrap();
        assert_eq!(phase.status, PhaseStatus::Planning);
        assert_eq!(phase.progress, 0);
        assert!(phase.assignees.is_empty());
        assert!(phase.milestones.is_empty());
    }
}
