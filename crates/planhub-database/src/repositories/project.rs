//! Project repository implementation.

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use planhub_core::error::{AppError, ErrorKind};
use planhub_core::result::AppResult;
use planhub_entity::project::{CreateProject, Phase, Project, TeamMember, UpdateProject};

/// Repository for project CRUD and nested-collection writes.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// Create a new project repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all projects, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list projects", e))
    }

    /// Find a project by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find project by id", e)
            })
    }

    /// Create a new project, applying the schema defaults for absent fields.
    pub async fn create(&self, data: &CreateProject) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "INSERT INTO projects (name, project_number, manager, status, progress, deadline, \
                                   team, phases, total_man_hours, desired_manpower, efficiency, \
                                   target_duration_weeks) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.project_number)
        .bind(&data.manager)
        .bind(data.status.as_deref().unwrap_or("Active"))
        .bind(data.progress.unwrap_or(0))
        .bind(data.deadline)
        .bind(Json(data.team.clone().unwrap_or_default()))
        .bind(Json(data.phases.clone().unwrap_or_default()))
        .bind(data.total_man_hours.unwrap_or(0))
        .bind(data.desired_manpower.unwrap_or(1))
        .bind(data.efficiency.unwrap_or(0.8))
        .bind(data.target_duration_weeks.unwrap_or(0))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create project", e))
    }

    /// Partially update a project's scalar and calculator fields.
    pub async fn update(&self, id: Uuid, data: &UpdateProject) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "UPDATE projects SET name = COALESCE($2, name), \
                                 project_number = COALESCE($3, project_number), \
                                 manager = COALESCE($4, manager), \
                                 status = COALESCE($5, status), \
                                 progress = COALESCE($6, progress), \
                                 deadline = COALESCE($7, deadline), \
                                 total_man_hours = COALESCE($8, total_man_hours), \
                                 desired_manpower = COALESCE($9, desired_manpower), \
                                 efficiency = COALESCE($10, efficiency), \
                                 target_duration_weeks = COALESCE($11, target_duration_weeks), \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.project_number)
        .bind(&data.manager)
        .bind(&data.status)
        .bind(data.progress)
        .bind(data.deadline)
        .bind(data.total_man_hours)
        .bind(data.desired_manpower)
        .bind(data.efficiency)
        .bind(data.target_duration_weeks)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update project", e))?
        .ok_or_else(|| AppError::not_found(format!("Project {id} not found")))
    }

    /// Update a project's overall progress.
    pub async fn update_progress(&self, id: Uuid, progress: i32) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "UPDATE projects SET progress = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(progress)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update progress", e))?
        .ok_or_else(|| AppError::not_found(format!("Project {id} not found")))
    }

    /// Replace a project's team array.
    ///
    /// Whole-array writes keep nested mutations single-statement; concurrent
    /// writers are last-write-wins.
    pub async fn set_team(&self, id: Uuid, team: &[TeamMember]) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "UPDATE projects SET team = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Json(team))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update team", e))?
        .ok_or_else(|| AppError::not_found(format!("Project {id} not found")))
    }

    /// Replace a project's phase array.
    pub async fn set_phases(&self, id: Uuid, phases: &[Phase]) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "UPDATE projects SET phases = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Json(phases))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update phases", e))?
        .ok_or_else(|| AppError::not_found(format!("Project {id} not found")))
    }

    /// Delete a project by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete project", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
