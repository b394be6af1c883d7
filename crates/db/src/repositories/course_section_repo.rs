//! [`Section`] descriptions for the course page sections and the number
//! data owned by course about sections.

use sqlx::PgPool;

use crate::models::course_section::*;
use crate::repositories::section::{Section, SectionQuery};

macro_rules! course_parent {
    () => {
        const PARENT_COLUMN: &'static str = "course_id";
        const PARENT_ENTITY: &'static str = "Course";
        const PARENT_TABLE: &'static str = "courses";
    };
}

impl Section for CourseAbout {
    type Create = CreateCourseAbout;
    type Update = UpdateCourseAbout;
    const ENTITY: &'static str = "CourseAbout";
    const TABLE: &'static str = "course_about_sections";
    course_parent!();
    const COLUMNS: &'static str =
        "id, course_id, heading, content, image, alt, created_at, updated_at";
    const INSERT_COLUMNS: &'static str = "heading, content, image, alt";
    const INSERT_VALUES: &'static str = "$2, $3, $4, $5";
    const UPDATE_SET: &'static str = "heading = COALESCE($3, heading), \
         content = COALESCE($4, content), image = COALESCE($5, image), alt = COALESCE($6, alt)";

    fn bind_create<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Create) -> SectionQuery<'q, Self> {
        q.bind(&i.heading).bind(&i.content).bind(&i.image).bind(&i.alt)
    }

    fn bind_update<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Update) -> SectionQuery<'q, Self> {
        q.bind(&i.heading).bind(&i.content).bind(&i.image).bind(&i.alt)
    }
}

/// Number data hangs off an about section rather than the course itself.
impl Section for CourseNumber {
    type Create = CreateCourseNumber;
    type Update = UpdateCourseNumber;
    const ENTITY: &'static str = "CourseNumber";
    const TABLE: &'static str = "course_number_data";
    const PARENT_COLUMN: &'static str = "about_section_id";
    const PARENT_ENTITY: &'static str = "CourseAbout";
    const PARENT_TABLE: &'static str = "course_about_sections";
    const COLUMNS: &'static str = "id, about_section_id, number, symbol, text, featured, \
         unique_id, created_at, updated_at";
    const INSERT_COLUMNS: &'static str = "number, symbol, text, featured";
    const INSERT_VALUES: &'static str = "$2, $3, $4, COALESCE($5, false)";
    const UPDATE_SET: &'static str = "number = COALESCE($3, number), \
         symbol = COALESCE($4, symbol), text = COALESCE($5, text), \
         featured = COALESCE($6, featured)";

    fn bind_create<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Create) -> SectionQuery<'q, Self> {
        q.bind(i.number).bind(&i.symbol).bind(&i.text).bind(i.featured)
    }

    fn bind_update<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Update) -> SectionQuery<'q, Self> {
        q.bind(i.number).bind(&i.symbol).bind(&i.text).bind(i.featured)
    }
}

impl Section for CourseQuickLink {
    type Create = CreateCourseQuickLink;
    type Update = UpdateCourseQuickLink;
    const ENTITY: &'static str = "CourseQuickLink";
    const TABLE: &'static str = "course_quick_links";
    course_parent!();
    const COLUMNS: &'static str = "id, course_id, name, link, created_at, updated_at";
    const INSERT_COLUMNS: &'static str = "name, link";
    const INSERT_VALUES: &'static str = "$2, $3";
    const UPDATE_SET: &'static str = "name = COALESCE($3, name), link = COALESCE($4, link)";

    fn bind_create<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Create) -> SectionQuery<'q, Self> {
        q.bind(&i.name).bind(&i.link)
    }

    fn bind_update<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Update) -> SectionQuery<'q, Self> {
        q.bind(&i.name).bind(&i.link)
    }
}

impl Section for CourseSubject {
    type Create = CreateCourseSubject;
    type Update = UpdateCourseSubject;
    const ENTITY: &'static str = "CourseSubject";
    const TABLE: &'static str = "course_subjects";
    course_parent!();
    const COLUMNS: &'static str = "id, course_id, name, content, created_at, updated_at";
    const INSERT_COLUMNS: &'static str = "name, content";
    const INSERT_VALUES: &'static str = "$2, $3";
    const UPDATE_SET: &'static str =
        "name = COALESCE($3, name), content = COALESCE($4, content)";

    fn bind_create<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Create) -> SectionQuery<'q, Self> {
        q.bind(&i.name).bind(&i.content)
    }

    fn bind_update<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Update) -> SectionQuery<'q, Self> {
        q.bind(&i.name).bind(&i.content)
    }
}

impl Section for CourseLab {
    type Create = CreateCourseLab;
    type Update = UpdateCourseLab;
    const ENTITY: &'static str = "CourseLab";
    const TABLE: &'static str = "course_labs";
    course_parent!();
    const COLUMNS: &'static str = "id, course_id, heading, description, image, alt, \
         link_blank, content, created_at, updated_at";
    const INSERT_COLUMNS: &'static str = "heading, description, image, alt, link_blank, content";
    const INSERT_VALUES: &'static str = "$2, $3, $4, $5, COALESCE($6, true), $7";
    const UPDATE_SET: &'static str = "heading = COALESCE($3, heading), \
         description = COALESCE($4, description), image = COALESCE($5, image), \
         alt = COALESCE($6, alt), link_blank = COALESCE($7, link_blank), \
         content = COALESCE($8, content)";

    fn bind_create<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Create) -> SectionQuery<'q, Self> {
        q.bind(&i.heading)
            .bind(&i.description)
            .bind(&i.image)
            .bind(&i.alt)
            .bind(i.link_blank)
            .bind(&i.content)
    }

    fn bind_update<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Update) -> SectionQuery<'q, Self> {
        q.bind(&i.heading)
            .bind(&i.description)
            .bind(&i.image)
            .bind(&i.alt)
            .bind(i.link_blank)
            .bind(&i.content)
    }
}

impl Section for CourseCurriculum {
    type Create = CreateCourseCurriculum;
    type Update = UpdateCourseCurriculum;
    const ENTITY: &'static str = "CourseCurriculum";
    const TABLE: &'static str = "course_curriculum";
    course_parent!();
    const COLUMNS: &'static str =
        "id, course_id, name, description, link_file, created_at, updated_at";
    const INSERT_COLUMNS: &'static str = "name, description, link_file";
    const INSERT_VALUES: &'static str = "$2, $3, $4";
    const UPDATE_SET: &'static str = "name = COALESCE($3, name), \
         description = COALESCE($4, description), link_file = COALESCE($5, link_file)";

    fn bind_create<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Create) -> SectionQuery<'q, Self> {
        q.bind(&i.name).bind(&i.description).bind(&i.link_file)
    }

    fn bind_update<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Update) -> SectionQuery<'q, Self> {
        q.bind(&i.name).bind(&i.description).bind(&i.link_file)
    }
}

impl Section for CourseBenefit {
    type Create = CreateCourseBenefit;
    type Update = UpdateCourseBenefit;
    const ENTITY: &'static str = "CourseBenefit";
    const TABLE: &'static str = "course_benefits";
    course_parent!();
    const COLUMNS: &'static str =
        "id, course_id, icon, text, benefit_image, created_at, updated_at";
    const INSERT_COLUMNS: &'static str = "icon, text, benefit_image";
    const INSERT_VALUES: &'static str = "$2, $3, $4";
    const UPDATE_SET: &'static str = "icon = COALESCE($3, icon), text = COALESCE($4, text), \
         benefit_image = COALESCE($5, benefit_image)";

    fn bind_create<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Create) -> SectionQuery<'q, Self> {
        q.bind(&i.icon).bind(&i.text).bind(&i.benefit_image)
    }

    fn bind_update<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Update) -> SectionQuery<'q, Self> {
        q.bind(&i.icon).bind(&i.text).bind(&i.benefit_image)
    }
}

impl Section for CourseContact {
    type Create = CreateCourseContact;
    type Update = UpdateCourseContact;
    const ENTITY: &'static str = "CourseContact";
    const TABLE: &'static str = "course_contacts";
    course_parent!();
    const COLUMNS: &'static str = "id, course_id, mail, phone, name, position, image, alt, \
         heading, created_at, updated_at";
    const INSERT_COLUMNS: &'static str = "mail, phone, name, position, image, alt, heading";
    const INSERT_VALUES: &'static str = "$2, $3, $4, $5, $6, $7, $8";
    const UPDATE_SET: &'static str = "mail = COALESCE($3, mail), phone = COALESCE($4, phone), \
         name = COALESCE($5, name), position = COALESCE($6, position), \
         image = COALESCE($7, image), alt = COALESCE($8, alt), heading = COALESCE($9, heading)";

    fn bind_create<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Create) -> SectionQuery<'q, Self> {
        q.bind(&i.mail)
            .bind(&i.phone)
            .bind(&i.name)
            .bind(&i.position)
            .bind(&i.image)
            .bind(&i.alt)
            .bind(&i.heading)
    }

    fn bind_update<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Update) -> SectionQuery<'q, Self> {
        q.bind(&i.mail)
            .bind(&i.phone)
            .bind(&i.name)
            .bind(&i.position)
            .bind(&i.image)
            .bind(&i.alt)
            .bind(&i.heading)
    }
}

impl Section for CourseCta {
    type Create = CreateCourseCta;
    type Update = UpdateCourseCta;
    const ENTITY: &'static str = "CourseCta";
    const TABLE: &'static str = "course_ctas";
    course_parent!();
    const COLUMNS: &'static str = "id, course_id, heading, link, created_at, updated_at";
    const INSERT_COLUMNS: &'static str = "heading, link";
    const INSERT_VALUES: &'static str = "$2, $3";
    const UPDATE_SET: &'static str =
        "heading = COALESCE($3, heading), link = COALESCE($4, link)";

    fn bind_create<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Create) -> SectionQuery<'q, Self> {
        q.bind(&i.heading).bind(&i.link)
    }

    fn bind_update<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Update) -> SectionQuery<'q, Self> {
        q.bind(&i.heading).bind(&i.link)
    }
}

impl Section for CourseBanner {
    type Create = CreateCourseBanner;
    type Update = UpdateCourseBanner;
    const ENTITY: &'static str = "CourseBanner";
    const TABLE: &'static str = "course_banners";
    course_parent!();
    const COLUMNS: &'static str = "id, course_id, image, alt, created_at, updated_at";
    const INSERT_COLUMNS: &'static str = "image, alt";
    const INSERT_VALUES: &'static str = "$2, $3";
    const UPDATE_SET: &'static str = "image = COALESCE($3, image), alt = COALESCE($4, alt)";

    fn bind_create<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Create) -> SectionQuery<'q, Self> {
        q.bind(&i.image).bind(&i.alt)
    }

    fn bind_update<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Update) -> SectionQuery<'q, Self> {
        q.bind(&i.image).bind(&i.alt)
    }
}

pub struct CourseNumberRepo;

impl CourseNumberRepo {
    /// Featured number data across all courses.
    pub async fn list_featured(pool: &PgPool) -> Result<Vec<CourseNumber>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM course_number_data WHERE featured ORDER BY id ASC",
            CourseNumber::COLUMNS
        );
        sqlx::query_as::<_, CourseNumber>(&query)
            .fetch_all(pool)
            .await
    }
}
