//! Project management operations.

pub mod service;

pub use service::{NewPhase, ProjectService};
