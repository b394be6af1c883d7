//! SEO persistence for departments, courses, faculty and news items.
//!
//! Each entity offers a [`SeoSource`] built from its own content. After a
//! create or update, [`store`] writes any explicit values from the request,
//! then fills the columns that are still blank. Columns that already hold a
//! value are never touched.

use campus_core::choices::NewsCategory;
use campus_core::seo::{SeoFields, SeoKind, SeoSource, SiteSeo};
use campus_core::types::DbId;
use campus_db::models::course::Course;
use campus_db::models::department::Department;
use campus_db::models::faculty::Faculty;
use campus_db::models::news::NewsEvent;
use campus_db::models::seo::SeoTable;
use campus_db::repositories::SeoRepo;
use serde_json::json;
use sqlx::PgPool;

/// Persist explicit SEO values and fill the blanks.
///
/// `stored` is the row's SEO state before this call. Returns `true` when any
/// column may have changed, meaning the caller should re-read the row.
pub async fn store(
    pool: &PgPool,
    table: SeoTable,
    id: DbId,
    explicit: Option<&SeoFields>,
    stored: &SeoFields,
    source: &SeoSource,
    site: &SiteSeo,
) -> Result<bool, sqlx::Error> {
    let mut current = stored.clone();
    if let Some(explicit) = explicit {
        SeoRepo::assign(pool, table, id, explicit).await?;
        current.overlay(explicit);
    }

    let mut filled = current.clone();
    filled.fill_missing(source, site);
    let needs_fill = filled != current;
    if needs_fill {
        SeoRepo::fill_missing(pool, table, id, &filled).await?;
        tracing::debug!(table = table.table_name(), id, "Filled blank SEO columns");
    }

    Ok(explicit.is_some() || needs_fill)
}

pub fn department_source(department: &Department) -> SeoSource {
    let mut source = SeoSource::new(
        SeoKind::Department,
        &department.name,
        format!("/departments/{}", department.slug),
    )
    .summary(department.about.as_deref())
    .image(
        department.programs_image.as_deref(),
        department.programs_image_alt.as_deref(),
    );

    for (offered, label) in [
        (department.ug, "Undergraduate"),
        (department.pg, "Postgraduate"),
        (department.phd, "PhD"),
    ] {
        if offered {
            source = source.keyword(Some(label));
        }
    }
    source
}

pub fn course_source(course: &Course, department: Option<&Department>) -> SeoSource {
    let department_name = department.map(|d| d.name.as_str());
    SeoSource::new(
        SeoKind::Course,
        &course.name,
        format!("/courses/{}", course.slug),
    )
    .summary(course.about_the_course.as_deref())
    .keyword(department_name)
    .schema(
        "educationalCredentialAwarded",
        json!(credential(course.ug, course.pg, course.phd)),
    )
}

fn credential(ug: bool, pg: bool, phd: bool) -> Option<&'static str> {
    match (ug, pg, phd) {
        (_, _, true) => Some("Doctorate"),
        (_, true, _) => Some("Postgraduate degree"),
        (true, _, _) => Some("Undergraduate degree"),
        _ => None,
    }
}

pub fn faculty_source(
    faculty: &Faculty,
    designation: Option<&str>,
    department: Option<&str>,
) -> SeoSource {
    let summary = faculty.bio.as_deref().or(faculty.content.as_deref());
    let mut source = SeoSource::new(
        SeoKind::Faculty,
        &faculty.name,
        format!("/faculty/{}", faculty.id),
    )
    .summary(summary)
    .image(faculty.image.as_deref(), faculty.alt.as_deref())
    .author(Some(faculty.name.as_str()))
    .keyword(designation)
    .keyword(department)
    .schema("jobTitle", json!(designation));

    if let Some(department) = department {
        source = source.schema(
            "worksFor",
            json!({ "@type": "EducationalOrganization", "name": department }),
        );
    }
    if let Some(mail) = faculty.mail_id.as_deref().filter(|m| !m.trim().is_empty()) {
        source = source.schema("email", json!(mail));
    }
    source
}

pub fn news_source(event: &NewsEvent, department: Option<&str>, tags: &[String]) -> SeoSource {
    let kind = if event.category == NewsCategory::Events.as_str() {
        SeoKind::Event
    } else {
        SeoKind::NewsArticle
    };
    let date_key = match kind {
        SeoKind::Event => "startDate",
        _ => "datePublished",
    };

    let mut source = SeoSource::new(kind, &event.heading, format!("/news-events/{}", event.id))
        .summary(Some(event.content.as_str()))
        .keyword(department)
        .schema(date_key, json!(event.date.to_string()));
    for tag in tags {
        source = source.keyword(Some(tag.as_str()));
    }
    source
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highest_degree_wins() {
        assert_eq!(credential(true, true, true), Some("Doctorate"));
        assert_eq!(credential(true, true, false), Some("Postgraduate degree"));
        assert_eq!(credential(true, false, false), Some("Undergraduate degree"));
        assert_eq!(credential(false, false, false), None);
    }
}
