//! `assettrack-auth` — authentication boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it models
//! user credentials, JWT claims, and deterministic claims validation.

pub mod claims;
pub mod jwt;
pub mod user;

pub use claims::{Claims, TokenValidationError, validate_claims};
pub use jwt::{Hs256JwtValidator, JwtError, JwtValidator};
pub use user::{AuthError, User, UserProfile};
