//! Response shapes assembled from a row and its related rows.
//!
//! Detail DTOs flatten the plain row so list and detail payloads share the
//! same top-level fields.

use std::collections::HashMap;

use campus_core::choices::display_value;
use campus_core::types::{DbId, Timestamp};
use campus_db::models::course::Course;
use campus_db::models::course_section::{
    CourseAbout, CourseBanner, CourseBenefit, CourseContact, CourseCta, CourseCurriculum,
    CourseLab, CourseNumber, CourseQuickLink, CourseSubject,
};
use campus_db::models::department::{Department, DepartmentContact};
use campus_db::models::department_section::{
    DepartmentAbout, DepartmentBanner, DepartmentBenefit, DepartmentCta, DepartmentCurriculum,
    DepartmentFacility, DepartmentPoPsoPeo, DepartmentProgram, DepartmentQuickLink,
    DepartmentStatistic,
};
use campus_db::models::faculty::{Designation, Faculty, FacultyBanner};
use campus_db::models::form::GrievanceForm;
use campus_db::models::news::{NewsEvent, NewsImage, NewsTag, PageMetadata};
use campus_db::models::placement::{PlacementStat, ResearchStat};
use campus_db::repositories::{
    CourseRepo, DepartmentContactRepo, DepartmentRepo, DesignationRepo, NewsEventRepo,
    PageMetadataRepo, SectionRepo,
};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Departments
// ---------------------------------------------------------------------------

/// A department page with every section it owns.
#[derive(Debug, Serialize)]
pub struct DepartmentDetail {
    #[serde(flatten)]
    pub department: Department,
    pub contact: Option<DepartmentContact>,
    pub about_sections: Vec<DepartmentAbout>,
    pub statistics: Vec<DepartmentStatistic>,
    pub quick_links: Vec<DepartmentQuickLink>,
    pub programs: Vec<DepartmentProgram>,
    pub curriculum: Vec<DepartmentCurriculum>,
    pub benefits: Vec<DepartmentBenefit>,
    pub ctas: Vec<DepartmentCta>,
    pub po_pso_peo: Vec<DepartmentPoPsoPeo>,
    pub facilities: Vec<DepartmentFacility>,
    pub banners: Vec<DepartmentBanner>,
    pub courses: Vec<Course>,
}

impl DepartmentDetail {
    pub async fn load(pool: &PgPool, department: Department) -> Result<Self, sqlx::Error> {
        let id = department.id;
        let contact = match department.contact_id {
            Some(contact_id) => DepartmentContactRepo::find_by_id(pool, contact_id).await?,
            None => None,
        };

        let (about_sections, statistics, quick_links, programs, curriculum, benefits) = tokio::try_join!(
            SectionRepo::<DepartmentAbout>::list(pool, id),
            SectionRepo::<DepartmentStatistic>::list(pool, id),
            SectionRepo::<DepartmentQuickLink>::list(pool, id),
            SectionRepo::<DepartmentProgram>::list(pool, id),
            SectionRepo::<DepartmentCurriculum>::list(pool, id),
            SectionRepo::<DepartmentBenefit>::list(pool, id),
        )?;
        let (ctas, po_pso_peo, facilities, banners, courses) = tokio::try_join!(
            SectionRepo::<DepartmentCta>::list(pool, id),
            SectionRepo::<DepartmentPoPsoPeo>::list(pool, id),
            SectionRepo::<DepartmentFacility>::list(pool, id),
            SectionRepo::<DepartmentBanner>::list(pool, id),
            CourseRepo::list(pool, Some(id), None),
        )?;

        Ok(Self {
            department,
            contact,
            about_sections,
            statistics,
            quick_links,
            programs,
            curriculum,
            benefits,
            ctas,
            po_pso_peo,
            facilities,
            banners,
            courses,
        })
    }
}

/// Short department reference embedded in other payloads.
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentRef {
    pub id: DbId,
    pub name: String,
    pub slug: String,
}

impl From<&Department> for DepartmentRef {
    fn from(d: &Department) -> Self {
        Self {
            id: d.id,
            name: d.name.clone(),
            slug: d.slug.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct CourseAboutDetail {
    #[serde(flatten)]
    pub about: CourseAbout,
    pub numbers: Vec<CourseNumber>,
}

/// A course page with every section it owns.
#[derive(Debug, Serialize)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: Course,
    pub department: Option<DepartmentRef>,
    pub about_sections: Vec<CourseAboutDetail>,
    pub quick_links: Vec<CourseQuickLink>,
    pub subjects: Vec<CourseSubject>,
    pub labs: Vec<CourseLab>,
    pub curriculum: Vec<CourseCurriculum>,
    pub benefits: Vec<CourseBenefit>,
    pub contacts: Vec<CourseContact>,
    pub ctas: Vec<CourseCta>,
    pub banners: Vec<CourseBanner>,
}

impl CourseDetail {
    pub async fn load(pool: &PgPool, course: Course) -> Result<Self, sqlx::Error> {
        let id = course.id;
        let department = match course.department_id {
            Some(department_id) => DepartmentRepo::find_by_id(pool, department_id)
                .await?
                .as_ref()
                .map(DepartmentRef::from),
            None => None,
        };

        let abouts = SectionRepo::<CourseAbout>::list(pool, id).await?;
        let mut about_sections = Vec::with_capacity(abouts.len());
        for about in abouts {
            let numbers = SectionRepo::<CourseNumber>::list(pool, about.id).await?;
            about_sections.push(CourseAboutDetail { about, numbers });
        }

        let (quick_links, subjects, labs, curriculum) = tokio::try_join!(
            SectionRepo::<CourseQuickLink>::list(pool, id),
            SectionRepo::<CourseSubject>::list(pool, id),
            SectionRepo::<CourseLab>::list(pool, id),
            SectionRepo::<CourseCurriculum>::list(pool, id),
        )?;
        let (benefits, contacts, ctas, banners) = tokio::try_join!(
            SectionRepo::<CourseBenefit>::list(pool, id),
            SectionRepo::<CourseContact>::list(pool, id),
            SectionRepo::<CourseCta>::list(pool, id),
            SectionRepo::<CourseBanner>::list(pool, id),
        )?;

        Ok(Self {
            course,
            department,
            about_sections,
            quick_links,
            subjects,
            labs,
            curriculum,
            benefits,
            contacts,
            ctas,
            banners,
        })
    }
}

// ---------------------------------------------------------------------------
// Faculty
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct DesignationDetail {
    #[serde(flatten)]
    pub designation: Designation,
    pub faculty_count: i64,
}

#[derive(Debug, Serialize)]
pub struct FacultyDetail {
    #[serde(flatten)]
    pub faculty: Faculty,
    pub designation: Option<Designation>,
    pub department: Option<DepartmentRef>,
    pub banners: Vec<FacultyBanner>,
}

impl FacultyDetail {
    pub async fn load(pool: &PgPool, faculty: Faculty) -> Result<Self, sqlx::Error> {
        let (designation, department, banners) = tokio::try_join!(
            DesignationRepo::find_by_id(pool, faculty.designation_id),
            DepartmentRepo::find_by_id(pool, faculty.department_id),
            SectionRepo::<FacultyBanner>::list(pool, faculty.id),
        )?;
        Ok(Self {
            faculty,
            designation,
            department: department.as_ref().map(DepartmentRef::from),
            banners,
        })
    }
}

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

/// A news item with its tags and images.
#[derive(Debug, Serialize)]
pub struct NewsEventDto {
    #[serde(flatten)]
    pub event: NewsEvent,
    pub tags: Vec<NewsTag>,
    pub images: Vec<NewsImage>,
}

impl NewsEventDto {
    /// Attach tags and images to a page of news items with two queries.
    pub async fn load_many(pool: &PgPool, events: Vec<NewsEvent>) -> Result<Vec<Self>, sqlx::Error> {
        let ids: Vec<DbId> = events.iter().map(|e| e.id).collect();
        let (tags, images) = tokio::try_join!(
            NewsEventRepo::tags_for(pool, &ids),
            NewsEventRepo::images_for(pool, &ids),
        )?;

        let mut tags_by_event = group(tags);
        let mut images_by_event = group(images);
        Ok(events
            .into_iter()
            .map(|event| Self {
                tags: tags_by_event.remove(&event.id).unwrap_or_default(),
                images: images_by_event.remove(&event.id).unwrap_or_default(),
                event,
            })
            .collect())
    }

    pub async fn load(pool: &PgPool, event: NewsEvent) -> Result<Self, sqlx::Error> {
        let ids = [event.id];
        let (tags, images) = tokio::try_join!(
            NewsEventRepo::tags_for(pool, &ids),
            NewsEventRepo::images_for(pool, &ids),
        )?;
        Ok(Self {
            event,
            tags: tags.into_iter().map(|(_, tag)| tag).collect(),
            images: images.into_iter().map(|(_, image)| image).collect(),
        })
    }
}

fn group<T>(pairs: Vec<(DbId, T)>) -> HashMap<DbId, Vec<T>> {
    let mut map: HashMap<DbId, Vec<T>> = HashMap::new();
    for (owner, item) in pairs {
        map.entry(owner).or_default().push(item);
    }
    map
}

#[derive(Debug, Serialize)]
pub struct NewsEventDetail {
    #[serde(flatten)]
    pub item: NewsEventDto,
    pub metadata: Option<PageMetadata>,
    pub department: Option<DepartmentRef>,
}

impl NewsEventDetail {
    pub async fn load(pool: &PgPool, event: NewsEvent) -> Result<Self, sqlx::Error> {
        let metadata = match event.metadata_id {
            Some(metadata_id) => PageMetadataRepo::find_by_id(pool, metadata_id).await?,
            None => None,
        };
        let department = DepartmentRepo::find_by_id(pool, event.department_id).await?;
        Ok(Self {
            item: NewsEventDto::load(pool, event).await?,
            metadata,
            department: department.as_ref().map(DepartmentRef::from),
        })
    }
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// A statistic row plus its rendered `number + suffix`.
#[derive(Debug, Serialize)]
pub struct StatDto<T: Serialize> {
    #[serde(flatten)]
    pub stat: T,
    pub display_value: String,
}

impl From<PlacementStat> for StatDto<PlacementStat> {
    fn from(stat: PlacementStat) -> Self {
        let display_value = display_value(&stat.placement_number, stat.suffix.as_deref());
        Self {
            stat,
            display_value,
        }
    }
}

impl From<ResearchStat> for StatDto<ResearchStat> {
    fn from(stat: ResearchStat) -> Self {
        let display_value = display_value(&stat.number, stat.suffix.as_deref());
        Self {
            stat,
            display_value,
        }
    }
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

/// Public view of a grievance: status only, no personal details.
#[derive(Debug, Serialize)]
pub struct GrievanceStatusDto {
    pub reference_number: Uuid,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<GrievanceForm> for GrievanceStatusDto {
    fn from(form: GrievanceForm) -> Self {
        Self {
            reference_number: form.reference_number,
            status: form.status,
            created_at: form.created_at,
            updated_at: form.updated_at,
        }
    }
}
