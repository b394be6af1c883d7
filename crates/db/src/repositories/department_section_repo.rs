//! [`Section`] descriptions for the department page sections, plus the
//! program and statistic queries that go beyond plain CRUD.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::department_section::*;
use crate::repositories::section::{Section, SectionQuery};

const PARENT: &str = "department_id";

macro_rules! department_parent {
    () => {
        const PARENT_COLUMN: &'static str = PARENT;
        const PARENT_ENTITY: &'static str = "Department";
        const PARENT_TABLE: &'static str = "departments";
    };
}

impl Section for DepartmentAbout {
    type Create = CreateDepartmentAbout;
    type Update = UpdateDepartmentAbout;
    const ENTITY: &'static str = "DepartmentAbout";
    const TABLE: &'static str = "department_about_sections";
    department_parent!();
    const COLUMNS: &'static str =
        "id, department_id, heading, content, image, alt, created_at, updated_at";
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

impl Section for DepartmentStatistic {
    type Create = CreateDepartmentStatistic;
    type Update = UpdateDepartmentStatistic;
    const ENTITY: &'static str = "DepartmentStatistic";
    const TABLE: &'static str = "department_statistics";
    department_parent!();
    const COLUMNS: &'static str = "id, department_id, name, number, suffix, description, \
         featured, display_order, created_at, updated_at";
    const ORDER_BY: &'static str = "display_order ASC, id ASC";
    const INSERT_COLUMNS: &'static str =
        "name, number, suffix, description, featured, display_order";
    const INSERT_VALUES: &'static str = "$2, $3, $4, $5, COALESCE($6, false), \
         COALESCE($7, (SELECT COALESCE(MAX(display_order), 0) + 1 \
                       FROM department_statistics WHERE department_id = $1))";
    const UPDATE_SET: &'static str = "name = COALESCE($3, name), number = COALESCE($4, number), \
         suffix = COALESCE($5, suffix), description = COALESCE($6, description), \
         featured = COALESCE($7, featured), display_order = COALESCE($8, display_order)";

    fn bind_create<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Create) -> SectionQuery<'q, Self> {
        q.bind(&i.name)
            .bind(&i.number)
            .bind(&i.suffix)
            .bind(&i.description)
            .bind(i.featured)
            .bind(i.display_order)
    }

    fn bind_update<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Update) -> SectionQuery<'q, Self> {
        q.bind(&i.name)
            .bind(&i.number)
            .bind(&i.suffix)
            .bind(&i.description)
            .bind(i.featured)
            .bind(i.display_order)
    }
}

impl Section for DepartmentQuickLink {
    type Create = CreateDepartmentQuickLink;
    type Update = UpdateDepartmentQuickLink;
    const ENTITY: &'static str = "DepartmentQuickLink";
    const TABLE: &'static str = "department_quick_links";
    department_parent!();
    const COLUMNS: &'static str = "id, department_id, name, link, created_at, updated_at";
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

impl Section for DepartmentProgram {
    type Create = CreateDepartmentProgram;
    type Update = UpdateDepartmentProgram;
    const ENTITY: &'static str = "DepartmentProgram";
    const TABLE: &'static str = "department_programs";
    department_parent!();
    const COLUMNS: &'static str = "id, department_id, name, description, image, explore_link, \
         apply_link, course_id, display_order, created_at, updated_at";
    const ORDER_BY: &'static str = "display_order ASC, id ASC";
    const INSERT_COLUMNS: &'static str =
        "name, description, image, explore_link, apply_link, course_id, display_order";
    const INSERT_VALUES: &'static str = "$2, $3, $4, $5, $6, $7, \
         COALESCE($8, (SELECT COALESCE(MAX(display_order), 0) + 1 \
                       FROM department_programs WHERE department_id = $1))";
    const UPDATE_SET: &'static str = "name = COALESCE($3, name), \
         description = COALESCE($4, description), image = COALESCE($5, image), \
         explore_link = COALESCE($6, explore_link), apply_link = COALESCE($7, apply_link), \
         course_id = COALESCE($8, course_id), display_order = COALESCE($9, display_order)";

    fn bind_create<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Create) -> SectionQuery<'q, Self> {
        q.bind(&i.name)
            .bind(&i.description)
            .bind(&i.image)
            .bind(&i.explore_link)
            .bind(&i.apply_link)
            .bind(i.course_id)
            .bind(i.display_order)
    }

    fn bind_update<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Update) -> SectionQuery<'q, Self> {
        q.bind(&i.name)
            .bind(&i.description)
            .bind(&i.image)
            .bind(&i.explore_link)
            .bind(&i.apply_link)
            .bind(i.course_id)
            .bind(i.display_order)
    }
}

impl Section for DepartmentCurriculum {
    type Create = CreateDepartmentCurriculum;
    type Update = UpdateDepartmentCurriculum;
    const ENTITY: &'static str = "DepartmentCurriculum";
    const TABLE: &'static str = "department_curriculum";
    department_parent!();
    const COLUMNS: &'static str =
        "id, department_id, name, description, file, created_at, updated_at";
    const INSERT_COLUMNS: &'static str = "name, description, file";
    const INSERT_VALUES: &'static str = "$2, $3, $4";
    const UPDATE_SET: &'static str = "name = COALESCE($3, name), \
         description = COALESCE($4, description), file = COALESCE($5, file)";

    fn bind_create<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Create) -> SectionQuery<'q, Self> {
        q.bind(&i.name).bind(&i.description).bind(&i.file)
    }

    fn bind_update<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Update) -> SectionQuery<'q, Self> {
        q.bind(&i.name).bind(&i.description).bind(&i.file)
    }
}

impl Section for DepartmentBenefit {
    type Create = CreateDepartmentBenefit;
    type Update = UpdateDepartmentBenefit;
    const ENTITY: &'static str = "DepartmentBenefit";
    const TABLE: &'static str = "department_benefits";
    department_parent!();
    const COLUMNS: &'static str = "id, department_id, icon, text, created_at, updated_at";
    const INSERT_COLUMNS: &'static str = "icon, text";
    const INSERT_VALUES: &'static str = "$2, $3";
    const UPDATE_SET: &'static str = "icon = COALESCE($3, icon), text = COALESCE($4, text)";

    fn bind_create<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Create) -> SectionQuery<'q, Self> {
        q.bind(&i.icon).bind(&i.text)
    }

    fn bind_update<'q>(q: SectionQuery<'q, Self>, i: &'q Self::Update) -> SectionQuery<'q, Self> {
        q.bind(&i.icon).bind(&i.text)
    }
}

impl Section for DepartmentCta {
    type Create = CreateDepartmentCta;
    type Update = UpdateDepartmentCta;
    const ENTITY: &'static str = "DepartmentCta";
    const TABLE: &'static str = "department_ctas";
    department_parent!();
    const COLUMNS: &'static str = "id, department_id, heading, link, created_at, updated_at";
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

impl Section for DepartmentPoPsoPeo {
    type Create = CreateDepartmentPoPsoPeo;
    type Update = UpdateDepartmentPoPsoPeo;
    const ENTITY: &'static str = "DepartmentPoPsoPeo";
    const TABLE: &'static str = "department_po_pso_peo";
    department_parent!();
    const COLUMNS: &'static str = "id, department_id, name, content, created_at, updated_at";
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

impl Section for DepartmentFacility {
    type Create = CreateDepartmentFacility;
    type Update = UpdateDepartmentFacility;
    const ENTITY: &'static str = "DepartmentFacility";
    const TABLE: &'static str = "department_facilities";
    department_parent!();
    const COLUMNS: &'static str = "id, department_id, heading, description, image, alt, \
         link_blank, content, created_at, updated_at";
    const INSERT_COLUMNS: &'static str = "heading, description, image, alt, link_blank, content";
    const INSERT_VALUES: &'static str = "$2, $3, $4, $5, COALESCE($6, false), $7";
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

impl Section for DepartmentBanner {
    type Create = CreateDepartmentBanner;
    type Update = UpdateDepartmentBanner;
    const ENTITY: &'static str = "DepartmentBanner";
    const TABLE: &'static str = "department_banners";
    department_parent!();
    const COLUMNS: &'static str = "id, department_id, image, alt, created_at, updated_at";
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

// ---------------------------------------------------------------------------
// Statistics and programs beyond CRUD
// ---------------------------------------------------------------------------

pub struct DepartmentStatisticRepo;

impl DepartmentStatisticRepo {
    /// Featured statistics across all departments.
    pub async fn list_featured(pool: &PgPool) -> Result<Vec<DepartmentStatistic>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM department_statistics WHERE featured
             ORDER BY department_id ASC, display_order ASC, id ASC",
            DepartmentStatistic::COLUMNS
        );
        sqlx::query_as::<_, DepartmentStatistic>(&query)
            .fetch_all(pool)
            .await
    }
}

pub struct DepartmentProgramRepo;

impl DepartmentProgramRepo {
    /// Whether `course_id` is already linked by one of the department's
    /// programs, ignoring `exclude_id`.
    pub async fn course_already_linked(
        pool: &PgPool,
        department_id: DbId,
        course_id: DbId,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let (found,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM department_programs
                WHERE department_id = $1 AND course_id = $2
                  AND ($3::BIGINT IS NULL OR id <> $3)
             )",
        )
        .bind(department_id)
        .bind(course_id)
        .bind(exclude_id)
        .fetch_one(pool)
        .await?;
        Ok(found)
    }

    /// Program ids of a department in current display order.
    pub async fn list_ids(pool: &PgPool, department_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> = sqlx::query_as(
            "SELECT id FROM department_programs WHERE department_id = $1
             ORDER BY display_order ASC, id ASC",
        )
        .bind(department_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Write `(program_id, display_order)` pairs in one transaction.
    pub async fn apply_order(
        pool: &PgPool,
        department_id: DbId,
        positions: &[(DbId, i32)],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        for (id, position) in positions {
            sqlx::query(
                "UPDATE department_programs SET display_order = $3
                 WHERE id = $1 AND department_id = $2",
            )
            .bind(id)
            .bind(department_id)
            .bind(position)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await
    }
}
