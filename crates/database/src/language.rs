//! Supported languages and the name resolver.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::Language;
use crate::validation::{validate_extension, validate_language_name};

/// Resolve a language by its exact, case-sensitive name.
///
/// Returns `Ok(None)` when no language has that name; an unknown name is a
/// caller problem, not a storage failure.
pub async fn resolve_language(pool: &SqlitePool, name: &str) -> Result<Option<Language>> {
    let language = sqlx::query_as::<_, Language>(
        r#"
        SELECT id, name, extension
        FROM languages
        WHERE name = ?
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(language)
}

/// Create a new language.
pub async fn create_language(pool: &SqlitePool, name: &str, extension: &str) -> Result<Language> {
    let name = name.trim();
    let extension = extension.trim();
    validate_language_name(name)?;
    validate_extension(extension)?;

    let result = sqlx::query(
        r#"
        INSERT INTO languages (name, extension)
        VALUES (?, ?)
        "#,
    )
    .bind(name)
    .bind(extension)
    .execute(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "Language",
                    id: name.to_string(),
                };
            }
        }
        DatabaseError::from(e)
    })?;

    Ok(Language {
        id: result.last_insert_rowid(),
        name: name.to_string(),
        extension: extension.to_string(),
    })
}

/// Get a language by ID.
pub async fn get_language(pool: &SqlitePool, id: i64) -> Result<Language> {
    sqlx::query_as::<_, Language>(
        r#"
        SELECT id, name, extension
        FROM languages
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Language",
        id: id.to_string(),
    })
}

/// List all languages ordered by name.
pub async fn list_languages(pool: &SqlitePool) -> Result<Vec<Language>> {
    let languages = sqlx::query_as::<_, Language>(
        r#"
        SELECT id, name, extension
        FROM languages
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(languages)
}

/// Delete a language by ID. Its generations are removed with it.
pub async fn delete_language(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM languages
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Language",
            id: id.to_string(),
        });
    }

    Ok(())
}
