//! Middleware: JWT bearer guard for protected HTTP routes.

pub mod auth;

pub use auth::{require_bearer, AuthUser};
