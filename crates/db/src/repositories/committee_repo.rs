//! Repositories for committee categories and members.

use campus_core::search;
use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::committee::{
    CommitteeCategory, CommitteeMember, CommitteeMemberFilter, CreateCommitteeCategory,
    CreateCommitteeMember, UpdateCommitteeCategory, UpdateCommitteeMember,
};

const CATEGORY_COLUMNS: &str = "id, name, unique_id, created_at, updated_at";

const MEMBER_COLUMNS: &str =
    "m.id, m.category_id, m.name_of_member, m.designation, m.position, m.created_at, m.updated_at";

const MEMBER_SEARCH_COLUMNS: &[&str] = &["m.name_of_member", "m.designation", "m.position"];

pub struct CommitteeCategoryRepo;

impl CommitteeCategoryRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateCommitteeCategory,
    ) -> Result<CommitteeCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO committee_categories (name) VALUES ($1) RETURNING {CATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, CommitteeCategory>(&query)
            .bind(input.name.as_deref().map(str::trim))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CommitteeCategory>, sqlx::Error> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM committee_categories WHERE id = $1");
        sqlx::query_as::<_, CommitteeCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<CommitteeCategory>, sqlx::Error> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM committee_categories ORDER BY name ASC");
        sqlx::query_as::<_, CommitteeCategory>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCommitteeCategory,
    ) -> Result<Option<CommitteeCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE committee_categories SET name = COALESCE($2, name)
             WHERE id = $1 RETURNING {CATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, CommitteeCategory>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .fetch_optional(pool)
            .await
    }

    /// Deletes the category together with its members.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM committee_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

pub struct CommitteeMemberRepo;

impl CommitteeMemberRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateCommitteeMember,
    ) -> Result<CommitteeMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO committee_members AS m (category_id, name_of_member, designation, position)
             VALUES ($1, $2, $3, $4)
             RETURNING {MEMBER_COLUMNS}"
        );
        sqlx::query_as::<_, CommitteeMember>(&query)
            .bind(input.category_id)
            .bind(&input.name_of_member)
            .bind(&input.designation)
            .bind(&input.position)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CommitteeMember>, sqlx::Error> {
        let query = format!("SELECT {MEMBER_COLUMNS} FROM committee_members m WHERE m.id = $1");
        sqlx::query_as::<_, CommitteeMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List members ordered by category name, position, then member name.
    pub async fn list(
        pool: &PgPool,
        filter: &CommitteeMemberFilter,
    ) -> Result<Vec<CommitteeMember>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx = 1u32;

        if filter.category_id.is_some() {
            conditions.push(format!("m.category_id = ${bind_idx}"));
            bind_idx += 1;
        }
        let term = search::normalize_term(filter.search.as_deref());
        if term.is_some() {
            conditions.push(search::ilike_any(MEMBER_SEARCH_COLUMNS, bind_idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let query = format!(
            "SELECT {MEMBER_COLUMNS} FROM committee_members m
             JOIN committee_categories c ON c.id = m.category_id
             {where_clause}
             ORDER BY c.name ASC, m.position ASC, m.name_of_member ASC"
        );

        let mut q = sqlx::query_as::<_, CommitteeMember>(&query);
        if let Some(id) = filter.category_id {
            q = q.bind(id);
        }
        if let Some(term) = term {
            q = q.bind(search::contains_pattern(term));
        }
        q.fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCommitteeMember,
    ) -> Result<Option<CommitteeMember>, sqlx::Error> {
        let query = format!(
            "UPDATE committee_members AS m SET
                category_id = COALESCE($2, category_id),
                name_of_member = COALESCE($3, name_of_member),
                designation = COALESCE($4, designation),
                position = COALESCE($5, position)
             WHERE m.id = $1
             RETURNING {MEMBER_COLUMNS}"
        );
        sqlx::query_as::<_, CommitteeMember>(&query)
            .bind(id)
            .bind(input.category_id)
            .bind(&input.name_of_member)
            .bind(&input.designation)
            .bind(&input.position)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM committee_members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
