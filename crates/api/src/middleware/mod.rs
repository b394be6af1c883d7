//! Authentication extractors for the admin API.
//!
//! - [`auth::AuthUser`]: any valid Bearer token.
//! - [`rbac::RequireStaff`]: `admin` or `editor`.
//! - [`rbac::RequireAdmin`]: `admin` only.

pub mod auth;
pub mod rbac;
