//! Writes to the SEO column set of departments, courses, faculty and news.

use campus_core::seo::{SeoFields, TEXT_COLUMNS};
use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::seo::SeoTable;

/// Placeholder of the `schema_json` bind: after `$1` (id) and the text columns.
const SCHEMA_JSON_BIND: usize = TEXT_COLUMNS.len() + 2;

pub struct SeoRepo;

impl SeoRepo {
    /// Overwrite columns with every non-`None` value in `fields`.
    ///
    /// Used for SEO values supplied explicitly by an editor.
    pub async fn assign(
        pool: &PgPool,
        table: SeoTable,
        id: DbId,
        fields: &SeoFields,
    ) -> Result<bool, sqlx::Error> {
        let sets: Vec<String> = TEXT_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{col} = COALESCE(${}, {col})", i + 2))
            .collect();
        let query = format!(
            "UPDATE {} SET {}, schema_json = COALESCE(${SCHEMA_JSON_BIND}, schema_json) WHERE id = $1",
            table.table_name(),
            sets.join(", ")
        );
        Self::execute(pool, &query, id, fields).await
    }

    /// Write generated values into blank columns only.
    ///
    /// A column holding NULL or only whitespace counts as blank; so does a
    /// `schema_json` of NULL, JSON `null` or `{}`.
    pub async fn fill_missing(
        pool: &PgPool,
        table: SeoTable,
        id: DbId,
        fields: &SeoFields,
    ) -> Result<bool, sqlx::Error> {
        let sets: Vec<String> = TEXT_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, col)| {
                format!(
                    "{col} = CASE WHEN {col} IS NULL OR BTRIM({col}) = '' \
                         THEN COALESCE(${}, {col}) ELSE {col} END",
                    i + 2
                )
            })
            .collect();
        let query = format!(
            "UPDATE {} SET {}, schema_json = CASE \
                 WHEN schema_json IS NULL OR schema_json IN ('null'::jsonb, '{{}}'::jsonb) \
                 THEN ${SCHEMA_JSON_BIND} ELSE schema_json END \
             WHERE id = $1",
            table.table_name(),
            sets.join(", ")
        );
        Self::execute(pool, &query, id, fields).await
    }

    async fn execute(
        pool: &PgPool,
        query: &str,
        id: DbId,
        fields: &SeoFields,
    ) -> Result<bool, sqlx::Error> {
        let mut q = sqlx::query(query).bind(id);
        for value in fields.text_values() {
            q = q.bind(value.as_deref());
        }
        let result = q.bind(&fields.schema_json).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
