//! Project handlers — CRUD plus nested team/phase mutations.
//!
//! Every route here sits behind the auth guard; the handlers themselves
//! only need the guard's presence, not the resolved identity.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use planhub_core::error::AppError;
use planhub_entity::project::{CreateProject, Project, UpdateProject};
use planhub_service::project::service::NewPhase;

use crate::dto::request::{
    AddPhaseRequest, AddTeamMemberRequest, CreateProjectRequest, UpdateProgressRequest,
    UpdateProjectRequest,
};
use crate::dto::response::{MessageResponse, ProjectEnvelope};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /projects
pub async fn list_projects(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<Project>>, AppError> {
    let projects = state.project_service.list().await?;
    Ok(Json(projects))
}

/// GET /projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Project>, AppError> {
    let project = state.project_service.get(id).await?;
    Ok(Json(project))
}

/// POST /projects
pub async fn create_project(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectEnvelope>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let project = state
        .project_service
        .create(CreateProject {
            name: req.name,
            project_number: req.project_number,
            manager: req.manager,
            status: req.status,
            progress: req.progress,
            deadline: req.deadline,
            team: req.team,
            phases: req.phases,
            total_man_hours: req.total_man_hours,
            desired_manpower: req.desired_manpower,
            efficiency: req.efficiency,
            target_duration_weeks: req.target_duration_weeks,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ProjectEnvelope {
            message: "Project created successfully".to_string(),
            project,
        }),
    ))
}

/// PUT /projects/{id}
pub async fn update_project(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<Json<ProjectEnvelope>, AppError> {
    let project = state
        .project_service
        .update(
            id,
            UpdateProject {
                name: req.name,
                project_number: req.project_number,
                manager: req.manager,
                status: req.status,
                progress: req.progress,
                deadline: req.deadline,
                total_man_hours: req.total_man_hours,
                desired_manpower: req.desired_manpower,
                efficiency: req.efficiency,
                target_duration_weeks: req.target_duration_weeks,
            },
        )
        .await?;

    Ok(Json(ProjectEnvelope {
        message: "Project updated successfully".to_string(),
        project,
    }))
}

/// PATCH /projects/{id}/progress
pub async fn update_progress(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProgressRequest>,
) -> Result<Json<ProjectEnvelope>, AppError> {
    let project = state.project_service.set_progress(id, req.progress).await?;

    Ok(Json(ProjectEnvelope {
        message: "Progress updated successfully".to_string(),
        project,
    }))
}

/// POST /projects/{id}/team
pub async fn add_team_member(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<AddTeamMemberRequest>,
) -> Result<Json<ProjectEnvelope>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let project = state
        .project_service
        .add_team_member(id, &req.name, &req.role)
        .await?;

    Ok(Json(ProjectEnvelope {
        message: "Team member added successfully".to_string(),
        project,
    }))
}

/// DELETE /projects/{id}/team/{member_id}
pub async fn remove_team_member(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path((id, member_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ProjectEnvelope>, AppError> {
    let project = state
        .project_service
        .remove_team_member(id, member_id)
        .await?;

    Ok(Json(ProjectEnvelope {
        message: "Team member removed successfully".to_string(),
        project,
    }))
}

/// POST /projects/{id}/phases
pub async fn add_phase(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<AddPhaseRequest>,
) -> Result<Json<ProjectEnvelope>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let project = state
        .project_service
        .add_phase(
            id,
            NewPhase {
                name: req.name,
                start_date: req.start_date,
                end_date: req.end_date,
                status: req.status,
                progress: req.progress,
                assignees: req.assignees,
                milestones: req.milestones,
            },
        )
        .await?;

    Ok(Json(ProjectEnvelope {
        message: "Phase added successfully".to_string(),
        project,
    }))
}

/// DELETE /projects/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    state.project_service.delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Project deleted successfully".to_string(),
    }))
}
