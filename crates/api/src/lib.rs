//! Campus CMS API server library.
//!
//! Exposes config, state, error handling and routes so the binaries and
//! the integration tests share one router.

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod media;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod seo;
pub mod state;
