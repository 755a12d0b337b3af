//! # planhub-auth
//!
//! Authentication primitives for PlanHub.
//!
//! ## Modules
//!
//! - `jwt` — stateless JWT token creation and validation
//! - `password` — Argon2id password hashing and policy enforcement
//!
//! Tokens are self-contained: the signing secret is injected through
//! configuration at construction time, never ambient state, so multiple
//! encoders/decoders with different secrets can coexist in one process.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
