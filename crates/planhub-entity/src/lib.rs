//! # planhub-entity
//!
//! Domain entity models for PlanHub. Every struct in this crate represents
//! a database table row or a nested value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and table-backed entities
//! additionally derive `sqlx::FromRow`.

pub mod project;
pub mod user;
