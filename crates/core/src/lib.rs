//! Pure domain logic for the campus content backend.
//!
//! Nothing in this crate performs I/O: it holds the error taxonomy, id and
//! timestamp aliases, SEO metadata generation, slug and search-pattern
//! helpers, choice-list validation and the admin model registry.

pub mod admin;
pub mod choices;
pub mod error;
pub mod media;
pub mod ordering;
pub mod roles;
pub mod search;
pub mod seo;
pub mod slug;
pub mod types;
pub mod validation;
