//! Row structs and request DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` structs matching database rows
//! - `Deserialize` + `Validate` create DTOs, required fields as `Option` so
//!   that a missing key is reported as "<field> is required"
//! - `Deserialize` update DTOs (all `Option`) for partial updates
//! - list filters deserialized from query strings

pub mod achievement;
pub mod career;
pub mod committee;
pub mod course;
pub mod course_section;
pub mod department;
pub mod department_section;
pub mod faculty;
pub mod form;
pub mod news;
pub mod placement;
pub mod role;
pub mod seo;
pub mod session;
pub mod user;
