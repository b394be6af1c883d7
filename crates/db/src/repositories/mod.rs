//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Parent-owned page sections
//! share the generic [`SectionRepo`].

pub mod achievement_repo;
pub mod career_repo;
pub mod committee_repo;
pub mod course_repo;
pub mod course_section_repo;
pub mod department_contact_repo;
pub mod department_repo;
pub mod department_section_repo;
pub mod designation_repo;
pub mod faculty_repo;
pub mod form_repo;
pub mod news_asset_repo;
pub mod news_repo;
pub mod placement_repo;
pub mod role_repo;
pub mod section;
pub mod seo_repo;
pub mod session_repo;
pub mod user_repo;

pub use achievement_repo::AchievementRepo;
pub use career_repo::{CareerOpeningRepo, CareerSuccessRepo, CompanyRepo};
pub use committee_repo::{CommitteeCategoryRepo, CommitteeMemberRepo};
pub use course_repo::CourseRepo;
pub use course_section_repo::CourseNumberRepo;
pub use department_contact_repo::DepartmentContactRepo;
pub use department_repo::DepartmentRepo;
pub use department_section_repo::{DepartmentProgramRepo, DepartmentStatisticRepo};
pub use designation_repo::DesignationRepo;
pub use faculty_repo::FacultyRepo;
pub use form_repo::{CareerFormRepo, ContactFormRepo, GrievanceRepo};
pub use news_asset_repo::{NewsImageRepo, NewsTagRepo, PageMetadataRepo};
pub use news_repo::NewsEventRepo;
pub use placement_repo::{PlacementImageRepo, PlacementStatRepo, ResearchStatRepo};
pub use role_repo::RoleRepo;
pub use section::{Section, SectionRepo};
pub use seo_repo::SeoRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
