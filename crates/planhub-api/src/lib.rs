//! # planhub-api
//!
//! HTTP API layer for PlanHub built on Axum.
//!
//! Provides all REST endpoints, middleware (CORS, logging), the auth-guard
//! extractor, and DTOs. Domain errors map to HTTP responses through the
//! `IntoResponse` impl on `planhub_core::AppError`.

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
