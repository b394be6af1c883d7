//! Generic CRUD for child rows owned by a single parent (department
//! sections, course sections, faculty banners, course number data).
//!
//! A row type describes its table through [`Section`]; [`SectionRepo`]
//! supplies the queries. Every query is scoped by the parent id, so an item
//! id belonging to another parent behaves as not found.

use std::marker::PhantomData;

use campus_core::types::DbId;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool, Postgres};

/// Query type handed to the bind hooks.
pub type SectionQuery<'q, T> = QueryAs<'q, Postgres, T, PgArguments>;

/// Table description for a parent-owned row type.
///
/// `INSERT_VALUES` starts at `$2` (`$1` is the parent id). `UPDATE_SET`
/// starts at `$3` (`$1` is the item id, `$2` the parent id).
pub trait Section: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static {
    type Create: Sync;
    type Update: Sync;

    /// Entity name used in not-found errors.
    const ENTITY: &'static str;
    const TABLE: &'static str;
    const PARENT_COLUMN: &'static str;
    /// Parent entity name and table, for the parent existence check.
    const PARENT_ENTITY: &'static str;
    const PARENT_TABLE: &'static str;
    const COLUMNS: &'static str;
    const ORDER_BY: &'static str = "id ASC";
    const INSERT_COLUMNS: &'static str;
    const INSERT_VALUES: &'static str;
    const UPDATE_SET: &'static str;

    fn bind_create<'q>(query: SectionQuery<'q, Self>, input: &'q Self::Create)
        -> SectionQuery<'q, Self>;

    fn bind_update<'q>(query: SectionQuery<'q, Self>, input: &'q Self::Update)
        -> SectionQuery<'q, Self>;
}

/// Queries for any [`Section`] row type.
pub struct SectionRepo<S>(PhantomData<S>);

impl<S: Section> SectionRepo<S> {
    /// List a parent's rows in display order.
    pub async fn list(pool: &PgPool, parent_id: DbId) -> Result<Vec<S>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE {} = $1 ORDER BY {}",
            S::COLUMNS,
            S::TABLE,
            S::PARENT_COLUMN,
            S::ORDER_BY
        );
        sqlx::query_as::<_, S>(&query)
            .bind(parent_id)
            .fetch_all(pool)
            .await
    }

    /// Find one row, scoped to its parent.
    pub async fn find(pool: &PgPool, parent_id: DbId, id: DbId) -> Result<Option<S>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE id = $1 AND {} = $2",
            S::COLUMNS,
            S::TABLE,
            S::PARENT_COLUMN
        );
        sqlx::query_as::<_, S>(&query)
            .bind(id)
            .bind(parent_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a row under `parent_id`, returning it.
    pub async fn create(
        pool: &PgPool,
        parent_id: DbId,
        input: &S::Create,
    ) -> Result<S, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} ({}, {}) VALUES ($1, {}) RETURNING {}",
            S::TABLE,
            S::PARENT_COLUMN,
            S::INSERT_COLUMNS,
            S::INSERT_VALUES,
            S::COLUMNS
        );
        S::bind_create(sqlx::query_as::<_, S>(&query).bind(parent_id), input)
            .fetch_one(pool)
            .await
    }

    /// Apply the non-`None` fields of `input`. `None` when the row does not
    /// exist under this parent.
    pub async fn update(
        pool: &PgPool,
        parent_id: DbId,
        id: DbId,
        input: &S::Update,
    ) -> Result<Option<S>, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET {} WHERE id = $1 AND {} = $2 RETURNING {}",
            S::TABLE,
            S::UPDATE_SET,
            S::PARENT_COLUMN,
            S::COLUMNS
        );
        S::bind_update(
            sqlx::query_as::<_, S>(&query).bind(id).bind(parent_id),
            input,
        )
        .fetch_optional(pool)
        .await
    }

    /// Delete a row. Returns `true` if it existed under this parent.
    pub async fn delete(pool: &PgPool, parent_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!(
            "DELETE FROM {} WHERE id = $1 AND {} = $2",
            S::TABLE,
            S::PARENT_COLUMN
        );
        let result = sqlx::query(&query)
            .bind(id)
            .bind(parent_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether the parent row exists.
    pub async fn parent_exists(pool: &PgPool, parent_id: DbId) -> Result<bool, sqlx::Error> {
        exists(pool, S::PARENT_TABLE, parent_id).await
    }
}

/// Whether `table` has a row with primary key `id`.
///
/// `table` must be a static table name, never user input.
pub async fn exists(pool: &PgPool, table: &str, id: DbId) -> Result<bool, sqlx::Error> {
    let query = format!("SELECT EXISTS (SELECT 1 FROM {table} WHERE id = $1)");
    let (found,): (bool,) = sqlx::query_as(&query).bind(id).fetch_one(pool).await?;
    Ok(found)
}
