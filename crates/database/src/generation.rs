//! Generation persistence and history queries.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{Generation, GenerationView, GenerationViewRow, HistoryFilter, NewGeneration};

/// Render a timestamp the way `created_at` is stored.
///
/// Fixed-width nanoseconds with a `Z` suffix, so text order is time order.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Insert a generation and return its ID.
pub async fn insert_generation(pool: &SqlitePool, generation: &NewGeneration) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO generations (prompt, language_id, user_id, code, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&generation.prompt)
    .bind(generation.language_id)
    .bind(generation.user_id)
    .bind(&generation.code)
    .bind(format_timestamp(&generation.created_at))
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Get the raw generation row by ID.
pub async fn get_generation(pool: &SqlitePool, id: i64) -> Result<Generation> {
    sqlx::query_as::<_, Generation>(
        r#"
        SELECT id, prompt, language_id, user_id, code, created_at
        FROM generations
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Generation",
        id: id.to_string(),
    })
}

/// Get a generation joined with its language and user.
pub async fn get_generation_view(pool: &SqlitePool, id: i64) -> Result<GenerationView> {
    let row = sqlx::query_as::<_, GenerationViewRow>(
        r#"
        SELECT g.id, g.prompt, g.code, g.created_at,
               l.name AS language_name, l.extension AS language_extension,
               u.username AS user_username, u.email AS user_email
        FROM generations g
        INNER JOIN languages l ON l.id = g.language_id
        LEFT JOIN users u ON u.id = g.user_id
        WHERE g.id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Generation",
        id: id.to_string(),
    })?;

    Ok(row.into())
}

/// List one page of generations matching `filter`, newest first.
///
/// Rows created in the same instant fall back to insertion order so that
/// consecutive pages never overlap.
pub async fn list_generation_views(
    pool: &SqlitePool,
    filter: &HistoryFilter,
    limit: i64,
    offset: i64,
) -> Result<Vec<GenerationView>> {
    let rows = sqlx::query_as::<_, GenerationViewRow>(
        r#"
        SELECT g.id, g.prompt, g.code, g.created_at,
               l.name AS language_name, l.extension AS language_extension,
               u.username AS user_username, u.email AS user_email
        FROM generations g
        INNER JOIN languages l ON l.id = g.language_id
        LEFT JOIN users u ON u.id = g.user_id
        WHERE (? IS NULL OR l.name = ?)
          AND (? IS NULL OR g.user_id = ?)
        ORDER BY g.created_at DESC, g.id DESC
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(filter.language.as_deref())
    .bind(filter.language.as_deref())
    .bind(filter.user_id)
    .bind(filter.user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(GenerationView::from).collect())
}

/// Count all generations matching `filter`.
pub async fn count_generations(pool: &SqlitePool, filter: &HistoryFilter) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM generations g
        INNER JOIN languages l ON l.id = g.language_id
        WHERE (? IS NULL OR l.name = ?)
          AND (? IS NULL OR g.user_id = ?)
        "#,
    )
    .bind(filter.language.as_deref())
    .bind(filter.language.as_deref())
    .bind(filter.user_id)
    .bind(filter.user_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}
