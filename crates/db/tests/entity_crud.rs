//! Integration tests for the content repositories.
//!
//! Exercises:
//! - create / find round trips for departments, courses and faculty
//! - cascade of department sections on department delete
//! - unique slug constraint
//! - `display_order` auto-assignment for statistics and programs
//! - case-insensitive search
//! - news tag set replacement
//! - grievance lookup by reference number
//! - company delete detaching career successes
//! - SEO fill idempotence

use campus_core::seo::{SeoFields, SeoKind, SeoSource, SiteSeo};
use campus_core::types::DbId;
use campus_db::models::career::{CreateCareerSuccess, CreateCompany};
use campus_db::models::course::CreateCourse;
use campus_db::models::department::{CreateDepartment, DepartmentFilter};
use campus_db::models::department_section::{
    CreateDepartmentProgram, CreateDepartmentQuickLink, CreateDepartmentStatistic,
    DepartmentProgram, DepartmentQuickLink, DepartmentStatistic,
};
use campus_db::models::faculty::{CreateDesignation, CreateFaculty, FacultyFilter};
use campus_db::models::form::CreateGrievanceForm;
use campus_db::models::news::{CreateNewsEvent, CreateNewsTag, NewsFilter, UpdateNewsEvent};
use campus_db::models::seo::SeoTable;
use campus_db::repositories::{
    CareerSuccessRepo, CommitteeCategoryRepo, CompanyRepo, CourseRepo, DepartmentProgramRepo,
    DepartmentRepo, DesignationRepo, FacultyRepo, GrievanceRepo, NewsEventRepo, NewsTagRepo,
    SectionRepo, SeoRepo,
};
use chrono::NaiveDate;
use sqlx::PgPool;

// ---- Helpers ----

fn new_department(name: &str) -> CreateDepartment {
    CreateDepartment {
        name: Some(name.to_string()),
        slug: None,
        ug: Some(true),
        pg: None,
        phd: None,
        about: Some(format!("<p>About {name}</p>")),
        vision: None,
        mission: None,
        programs_image: None,
        programs_image_alt: None,
        facilities_overview: None,
        contact_id: None,
        seo: None,
    }
}

fn new_course(name: &str, department_id: Option<DbId>) -> CreateCourse {
    CreateCourse {
        name: Some(name.to_string()),
        slug: None,
        department_id,
        ug: Some(true),
        pg: None,
        phd: None,
        about_the_course: None,
        vision: None,
        mission: None,
        seo: None,
    }
}

fn new_statistic(name: &str, display_order: Option<i32>) -> CreateDepartmentStatistic {
    CreateDepartmentStatistic {
        name: Some(name.to_string()),
        number: Some("40".to_string()),
        suffix: Some("+".to_string()),
        description: None,
        featured: None,
        display_order,
    }
}

fn new_program(name: &str, course_id: Option<DbId>) -> CreateDepartmentProgram {
    CreateDepartmentProgram {
        name: Some(name.to_string()),
        description: None,
        image: None,
        explore_link: None,
        apply_link: None,
        course_id,
        display_order: None,
    }
}

fn new_news(heading: &str, department_id: DbId, tag_ids: Vec<DbId>) -> CreateNewsEvent {
    CreateNewsEvent {
        heading: Some(heading.to_string()),
        date: NaiveDate::from_ymd_opt(2026, 3, 1),
        link: None,
        category: Some("news".to_string()),
        department_id: Some(department_id),
        content: Some("<p>Body</p>".to_string()),
        metadata_id: None,
        is_published: None,
        is_featured: None,
        tag_ids: Some(tag_ids),
        image_ids: None,
        seo: None,
    }
}

async fn seed_department(pool: &PgPool, name: &str) -> DbId {
    let slug = campus_core::slug::slugify(name);
    DepartmentRepo::create(pool, &new_department(name), &slug)
        .await
        .unwrap()
        .id
}

async fn seed_tag(pool: &PgPool, name: &str) -> DbId {
    NewsTagRepo::create(
        pool,
        &CreateNewsTag {
            tag_name: Some(name.to_string()),
        },
    )
    .await
    .unwrap()
    .id
}

fn site() -> SiteSeo {
    SiteSeo {
        site_name: "Campus".to_string(),
        base_url: "https://campus.example".to_string(),
        locale: "en_US".to_string(),
        twitter_handle: None,
        default_image: None,
    }
}

// ---- Departments ----

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_department_create_and_find(pool: PgPool) {
    let created = DepartmentRepo::create(&pool, &new_department("Physics"), "physics")
        .await
        .unwrap();
    assert_eq!(created.name, "Physics");
    assert!(created.ug);
    assert!(!created.pg);

    let by_id = DepartmentRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(by_id.slug, "physics");

    let by_slug = DepartmentRepo::find_by_slug(&pool, "physics").await.unwrap().unwrap();
    assert_eq!(by_slug.id, created.id);

    assert!(DepartmentRepo::slug_exists(&pool, "physics", None).await.unwrap());
    assert!(!DepartmentRepo::slug_exists(&pool, "physics", Some(created.id)).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_department_duplicate_slug_rejected(pool: PgPool) {
    DepartmentRepo::create(&pool, &new_department("Physics"), "physics")
        .await
        .unwrap();
    let err = DepartmentRepo::create(&pool, &new_department("Physics Two"), "physics")
        .await
        .unwrap_err();

    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_departments_slug"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_department_delete_cascades_sections(pool: PgPool) {
    let dept = seed_department(&pool, "Chemistry").await;
    for name in ["Syllabus", "Timetable"] {
        SectionRepo::<DepartmentQuickLink>::create(
            &pool,
            dept,
            &CreateDepartmentQuickLink {
                name: Some(name.to_string()),
                link: Some(format!("/chemistry/{}", name.to_lowercase())),
            },
        )
        .await
        .unwrap();
    }
    assert_eq!(
        SectionRepo::<DepartmentQuickLink>::list(&pool, dept).await.unwrap().len(),
        2
    );

    assert!(DepartmentRepo::delete(&pool, dept).await.unwrap());

    let (remaining,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM department_quick_links WHERE department_id = $1")
            .bind(dept)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(remaining, 0);
    assert!(!DepartmentRepo::delete(&pool, dept).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_department_search_is_case_insensitive(pool: PgPool) {
    seed_department(&pool, "Computer Science").await;
    seed_department(&pool, "Mechanical Engineering").await;

    let filter = DepartmentFilter {
        search: Some("comp".to_string()),
        ..Default::default()
    };
    let found = DepartmentRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Computer Science");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_wildcards_are_literal(pool: PgPool) {
    seed_department(&pool, "Physics").await;

    let filter = DepartmentFilter {
        search: Some("%".to_string()),
        ..Default::default()
    };
    assert!(DepartmentRepo::list(&pool, &filter).await.unwrap().is_empty());
}

// ---- Section ordering ----

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_statistic_display_order_defaults_to_max_plus_one(pool: PgPool) {
    let dept = seed_department(&pool, "Biology").await;
    let other = seed_department(&pool, "History").await;

    let first = SectionRepo::<DepartmentStatistic>::create(&pool, dept, &new_statistic("Labs", None))
        .await
        .unwrap();
    assert_eq!(first.display_order, 1);

    SectionRepo::<DepartmentStatistic>::create(&pool, dept, &new_statistic("Faculty", Some(7)))
        .await
        .unwrap();
    let third = SectionRepo::<DepartmentStatistic>::create(&pool, dept, &new_statistic("Papers", None))
        .await
        .unwrap();
    assert_eq!(third.display_order, 8);

    // Ordering is per department.
    let elsewhere =
        SectionRepo::<DepartmentStatistic>::create(&pool, other, &new_statistic("Books", None))
            .await
            .unwrap();
    assert_eq!(elsewhere.display_order, 1);

    let listed = SectionRepo::<DepartmentStatistic>::list(&pool, dept).await.unwrap();
    let orders: Vec<i32> = listed.iter().map(|s| s.display_order).collect();
    assert_eq!(orders, vec![1, 7, 8]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_program_order_and_course_link(pool: PgPool) {
    let dept = seed_department(&pool, "Mathematics").await;
    let course = CourseRepo::create(&pool, &new_course("BSc Mathematics", Some(dept)), "bsc-mathematics")
        .await
        .unwrap();

    let a = SectionRepo::<DepartmentProgram>::create(&pool, dept, &new_program("BSc", Some(course.id)))
        .await
        .unwrap();
    let b = SectionRepo::<DepartmentProgram>::create(&pool, dept, &new_program("MSc", None))
        .await
        .unwrap();
    assert_eq!((a.display_order, b.display_order), (1, 2));

    assert!(DepartmentProgramRepo::course_already_linked(&pool, dept, course.id, None)
        .await
        .unwrap());
    assert!(!DepartmentProgramRepo::course_already_linked(&pool, dept, course.id, Some(a.id))
        .await
        .unwrap());

    let available = CourseRepo::list_available_for_department(&pool, dept).await.unwrap();
    assert!(available.iter().all(|c| c.id != course.id));

    DepartmentProgramRepo::apply_order(&pool, dept, &[(b.id, 1), (a.id, 2)])
        .await
        .unwrap();
    let ids = DepartmentProgramRepo::list_ids(&pool, dept).await.unwrap();
    assert_eq!(ids, vec![b.id, a.id]);
}

// ---- Courses / faculty ----

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_course_department_set_null_on_delete(pool: PgPool) {
    let dept = seed_department(&pool, "Economics").await;
    let course = CourseRepo::create(&pool, &new_course("BA Economics", Some(dept)), "ba-economics")
        .await
        .unwrap();

    DepartmentRepo::delete(&pool, dept).await.unwrap();

    let orphan = CourseRepo::find_by_id(&pool, course.id).await.unwrap().unwrap();
    assert_eq!(orphan.department_id, None);
    let without = CourseRepo::list_without_department(&pool).await.unwrap();
    assert_eq!(without.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_faculty_find_by_name_and_search(pool: PgPool) {
    let dept = seed_department(&pool, "Physics").await;
    let designation = DesignationRepo::create(
        &pool,
        &CreateDesignation {
            name: Some("Professor".to_string()),
        },
    )
    .await
    .unwrap();

    let input = CreateFaculty {
        name: Some("Ada Lovelace".to_string()),
        alt: None,
        image: None,
        designation_id: Some(designation.id),
        department_id: Some(dept),
        mail_id: None,
        phone_number: None,
        link: None,
        content: None,
        qualification: Some("PhD Mathematics".to_string()),
        bio: None,
        publication: None,
        awards: None,
        workshop: None,
        work_experience: None,
        projects: None,
        seo: None,
    };
    let created = FacultyRepo::create(&pool, &input).await.unwrap();

    let found = FacultyRepo::find_by_name(&pool, "ada LOVELACE").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);

    let filter = FacultyFilter {
        search: Some("mathem".to_string()),
        ..Default::default()
    };
    assert_eq!(FacultyRepo::list(&pool, &filter).await.unwrap().len(), 1);
    assert_eq!(DesignationRepo::faculty_count(&pool, designation.id).await.unwrap(), 1);

    // (name, department) is unique.
    let err = FacultyRepo::create(&pool, &input).await.unwrap_err();
    assert_eq!(
        err.as_database_error().and_then(|e| e.constraint()),
        Some("uq_faculty_name_department_id")
    );
}

// ---- News ----

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_news_tags_are_replaced_on_update(pool: PgPool) {
    let dept = seed_department(&pool, "Physics").await;
    let science = seed_tag(&pool, "science").await;
    let campus = seed_tag(&pool, "campus").await;
    let alumni = seed_tag(&pool, "alumni").await;

    let event = NewsEventRepo::create(&pool, &new_news("Open day", dept, vec![science, campus]))
        .await
        .unwrap();
    let tags = NewsEventRepo::tags_for(&pool, &[event.id]).await.unwrap();
    assert_eq!(tags.len(), 2);

    let update = UpdateNewsEvent {
        tag_ids: Some(vec![alumni]),
        ..Default::default()
    };
    NewsEventRepo::update(&pool, event.id, &update).await.unwrap().unwrap();

    let tags = NewsEventRepo::tags_for(&pool, &[event.id]).await.unwrap();
    let names: Vec<&str> = tags.iter().map(|(_, t)| t.tag_name.as_str()).collect();
    assert_eq!(names, vec!["alumni"]);

    // Leaving tag_ids out keeps the current set.
    let update = UpdateNewsEvent {
        heading: Some("Open day 2026".to_string()),
        ..Default::default()
    };
    NewsEventRepo::update(&pool, event.id, &update).await.unwrap().unwrap();
    assert_eq!(NewsEventRepo::tags_for(&pool, &[event.id]).await.unwrap().len(), 1);

    let filter = NewsFilter {
        tag: Some("ALUM".to_string()),
        ..Default::default()
    };
    let listed = NewsEventRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].heading, "Open day 2026");
}

// ---- Careers / forms ----

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_company_delete_detaches_successes(pool: PgPool) {
    let dept = seed_department(&pool, "Commerce").await;
    let company = CompanyRepo::create(
        &pool,
        &CreateCompany {
            name: Some("Acme".to_string()),
            image: None,
            website: None,
            description: None,
        },
    )
    .await
    .unwrap();

    let success = CareerSuccessRepo::create(
        &pool,
        &CreateCareerSuccess {
            student_name: Some("Grace".to_string()),
            image: None,
            alt: Some("Grace".to_string()),
            description: Some("Placed at Acme".to_string()),
            company_id: Some(company.id),
            department_id: Some(dept),
            batch: Some("2025".to_string()),
        },
    )
    .await
    .unwrap();

    assert!(CompanyRepo::delete(&pool, company.id).await.unwrap());

    let kept = CareerSuccessRepo::find_by_id(&pool, success.id).await.unwrap().unwrap();
    assert_eq!(kept.company_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_grievance_reference_lookup_and_status(pool: PgPool) {
    let dept = seed_department(&pool, "Physics").await;
    let category = CommitteeCategoryRepo::create(
        &pool,
        &campus_db::models::committee::CreateCommitteeCategory {
            name: Some("Anti-ragging".to_string()),
        },
    )
    .await
    .unwrap();
    let designation = DesignationRepo::create(
        &pool,
        &CreateDesignation {
            name: Some("Lecturer".to_string()),
        },
    )
    .await
    .unwrap();
    let (faculty_id,): (DbId,) = sqlx::query_as(
        "INSERT INTO faculty (name, designation_id, department_id) VALUES ('Alan', $1, $2) RETURNING id",
    )
    .bind(designation.id)
    .bind(dept)
    .fetch_one(&pool)
    .await
    .unwrap();

    let created = GrievanceRepo::create(
        &pool,
        &CreateGrievanceForm {
            name: Some("Student".to_string()),
            phone: Some("12345".to_string()),
            email: Some("student@example.com".to_string()),
            department_id: Some(dept),
            committee_category_id: Some(category.id),
            faculty_id: Some(faculty_id),
            details: Some("Lab closed".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(created.status, "pending");

    let found = GrievanceRepo::find_by_reference(&pool, created.reference_number)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, created.id);

    let updated = GrievanceRepo::update_status(&pool, created.id, "resolved")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, "resolved");

    let missing = GrievanceRepo::find_by_reference(&pool, uuid::Uuid::new_v4()).await.unwrap();
    assert!(missing.is_none());
}

// ---- SEO ----

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seo_fill_is_idempotent_and_keeps_editor_values(pool: PgPool) {
    let dept = seed_department(&pool, "Physics").await;

    let explicit = SeoFields {
        meta_title: Some("Physics at Campus".to_string()),
        ..Default::default()
    };
    SeoRepo::assign(&pool, SeoTable::Departments, dept, &explicit).await.unwrap();

    let source = SeoSource::new(SeoKind::Department, "Physics", "/departments/physics")
        .summary(Some("<p>Study matter.</p>"));
    let mut fields = DepartmentRepo::find_by_id(&pool, dept).await.unwrap().unwrap().seo.0;
    fields.fill_missing(&source, &site());
    SeoRepo::fill_missing(&pool, SeoTable::Departments, dept, &fields).await.unwrap();

    let first = DepartmentRepo::find_by_id(&pool, dept).await.unwrap().unwrap();
    assert_eq!(first.seo.meta_title.as_deref(), Some("Physics at Campus"));
    assert_eq!(first.seo.meta_description.as_deref(), Some("Study matter."));
    assert_eq!(
        first.seo.canonical_url.as_deref(),
        Some("https://campus.example/departments/physics")
    );
    assert!(first.seo.schema_json.is_some());

    // A second pass with different content changes nothing.
    let source = SeoSource::new(SeoKind::Department, "Renamed", "/departments/renamed");
    let mut again = first.seo.0.clone();
    again.fill_missing(&source, &site());
    assert_eq!(again, first.seo.0);

    let mut overwrite = SeoFields::default();
    overwrite.fill_missing(&source, &site());
    SeoRepo::fill_missing(&pool, SeoTable::Departments, dept, &overwrite).await.unwrap();

    let second = DepartmentRepo::find_by_id(&pool, dept).await.unwrap().unwrap();
    assert_eq!(second.seo.0, first.seo.0);
}
