//! # planhub-service
//!
//! Business logic service layer for PlanHub. Each service orchestrates
//! repositories and authentication primitives to implement application-level
//! use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod project;
pub mod user;

pub use auth::AuthService;
pub use context::RequestContext;
pub use project::ProjectService;
pub use user::UserService;
