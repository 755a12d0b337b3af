//! Project CRUD and nested-collection mutations.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use planhub_core::error::AppError;
use planhub_database::repositories::project::ProjectRepository;
use planhub_entity::project::{
    CreateProject, Milestone, Phase, PhaseStatus, Project, TeamMember, UpdateProject,
};

/// Handles project lifecycle and schedule operations.
#[derive(Debug, Clone)]
pub struct ProjectService {
    /// Project repository.
    project_repo: Arc<ProjectRepository>,
}

/// Input for adding a phase to a project's schedule.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NewPhase {
    /// Phase name.
    pub name: String,
    /// Scheduled start.
    pub start_date: Option<DateTime<Utc>>,
    /// Scheduled end.
    pub end_date: Option<DateTime<Utc>>,
    /// Initial status (defaults to Planning).
    pub status: Option<PhaseStatus>,
    /// Initial progress (defaults to 0).
    pub progress: Option<i32>,
    /// Assignee names.
    pub assignees: Option<Vec<String>>,
    /// Milestones.
    pub milestones: Option<Vec<Milestone>>,
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(project_repo: Arc<ProjectRepository>) -> Self {
        Self { project_repo }
    }

    /// Lists all projects, newest first.
    pub async fn list(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.find_all().await
    }

    /// Gets a project by ID.
    pub async fn get(&self, id: Uuid) -> Result<Project, AppError> {
        self.project_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Project {id} not found")))
    }

    /// Creates a new project.
    pub async fn create(&self, data: CreateProject) -> Result<Project, AppError> {
        if data.name.trim().is_empty()
            || data.project_number.trim().is_empty()
            || data.manager.trim().is_empty()
        {
            return Err(AppError::validation(
                "name, projectNumber, and manager are required",
            ));
        }

        if let Some(progress) = data.progress {
            validate_progress(progress)?;
        }

        let project = self.project_repo.create(&data).await?;

        info!(project_id = %project.id, name = %project.name, "Project created");

        Ok(project)
    }

    /// Partially updates a project's scalar and calculator fields.
    pub async fn update(&self, id: Uuid, data: UpdateProject) -> Result<Project, AppError> {
        if let Some(progress) = data.progress {
            validate_progress(progress)?;
        }

        self.project_repo.update(id, &data).await
    }

    /// Updates a project's overall progress percentage.
    pub async fn set_progress(&self, id: Uuid, progress: i32) -> Result<Project, AppError> {
        validate_progress(progress)?;
        self.project_repo.update_progress(id, progress).await
    }

    /// Adds a team member to a project.
    pub async fn add_team_member(
        &self,
        id: Uuid,
        name: &str,
        role: &str,
    ) -> Result<Project, AppError> {
        if name.trim().is_empty() || role.trim().is_empty() {
            return Err(AppError::validation("name and role are required"));
        }

        let mut project = self.get(id).await?;
        project.team.push(TeamMember::new(name.trim(), role.trim()));

        let project = self.project_repo.set_team(id, &project.team).await?;

        info!(project_id = %id, "Team member added");

        Ok(project)
    }

    /// Removes a team member from a project.
    ///
    /// Removing an unknown member id leaves the team unchanged and still
    /// returns the project.
    pub async fn remove_team_member(&self, id: Uuid, member_id: Uuid) -> Result<Project, AppError> {
        let mut project = self.get(id).await?;
        project.team.retain(|member| member.id != member_id);

        let project = self.project_repo.set_team(id, &project.team).await?;

        info!(project_id = %id, member_id = %member_id, "Team member removed");

        Ok(project)
    }

    /// Adds a phase to the front of a project's schedule.
    pub async fn add_phase(&self, id: Uuid, new_phase: NewPhase) -> Result<Project, AppError> {
        if new_phase.name.trim().is_empty() {
            return Err(AppError::validation("Phase name is required"));
        }

        let progress = new_phase.progress.unwrap_or(0);
        validate_progress(progress)?;

        let phase = Phase {
            id: Uuid::new_v4(),
            name: new_phase.name.trim().to_string(),
            start_date: new_phase.start_date,
            end_date: new_phase.end_date,
            status: new_phase.status.unwrap_or_default(),
            progress,
            assignees: new_phase.assignees.unwrap_or_default(),
            milestones: new_phase.milestones.unwrap_or_default(),
        };

        let mut project = self.get(id).await?;
        // Newest phase goes first, matching how the schedule is displayed.
        project.phases.insert(0, phase);

        let project = self.project_repo.set_phases(id, &project.phases).await?;

        info!(project_id = %id, "Phase added");

        Ok(project)
    }

    /// Deletes a project.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.project_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("Project {id} not found")));
        }

        info!(project_id = %id, "Project deleted");

        Ok(())
    }
}

/// Progress percentages are bounded to 0-100.
fn validate_progress(progress: i32) -> Result<(), AppError> {
    if !(0..=100).contains(&progress) {
        return Err(AppError::validation("Progress must be between 0 and 100"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bounds() {
        assert!(validate_progress(0).is_ok());
        assert!(validate_progress(100).is_ok());
        assert!(validate_progress(-1).is_err());
        assert!(validate_progress(101).is_err());
    }
}
