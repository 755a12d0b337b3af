//! Seeds the database with sample projects.
//!
//! Clears existing projects first, so re-running never duplicates data.

use chrono::{TimeZone, Utc};
use tracing_subscriber::EnvFilter;

use planhub_core::config::AppConfig;
use planhub_core::error::AppError;
use planhub_database::repositories::project::ProjectRepository;
use planhub_entity::project::CreateProject;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!("Seeding failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let env = std::env::var("PLANHUB_ENV").unwrap_or_else(|_| "development".to_string());
    let config = AppConfig::load(&env)?;

    let db_pool = planhub_database::connection::DatabasePool::connect(&config.database)
        .await?
        .into_pool();

    planhub_database::migration::run_migrations(&db_pool).await?;

    // Clear existing projects to prevent duplicates
    sqlx::query("DELETE FROM projects")
        .execute(&db_pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to clear projects: {e}")))?;
    tracing::info!("Cleared existing projects");

    let repo = ProjectRepository::new(db_pool.clone());

    for sample in sample_projects() {
        let project = repo.create(&sample).await?;
        tracing::info!(project_id = %project.id, name = %project.name, "Seeded project");
    }

    db_pool.close().await;
    tracing::info!("Sample projects have been added");
    Ok(())
}

fn sample_projects() -> Vec<CreateProject> {
    vec![
        CreateProject {
            name: "BECO TYSONS".to_string(),
            project_number: "#21000".to_string(),
            manager: "Gary Golden".to_string(),
            status: Some("Active".to_string()),
            progress: Some(65),
            deadline: Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).single(),
            team: None,
            phases: None,
            total_man_hours: Some(2000),
            desired_manpower: Some(6),
            efficiency: Some(0.60),
            target_duration_weeks: None,
        },
        CreateProject {
            name: "MAX9".to_string(),
            project_number: "#21007".to_string(),
            manager: "John Dennis".to_string(),
            status: Some("Active".to_string()),
            progress: Some(55),
            deadline: Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).single(),
            team: None,
            phases: None,
            total_man_hours: Some(1500),
            desired_manpower: Some(4),
            efficiency: Some(0.75),
            target_duration_weeks: None,
        },
    ]
}
