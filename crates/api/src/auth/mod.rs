//! Admin authentication primitives.
//!
//! - [`password`]: Argon2id hashing and verification.
//! - [`jwt`]: access tokens and refresh-token hashing.

pub mod jwt;
pub mod password;
