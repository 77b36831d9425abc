//! Default language set.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::Result;
use crate::validation::{validate_extension, validate_language_name};

/// A language to make available at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSeed {
    pub name: &'static str,
    pub extension: &'static str,
}

/// Languages offered out of the box.
pub const DEFAULT_LANGUAGES: &[LanguageSeed] = &[
    LanguageSeed { name: "Python", extension: ".py" },
    LanguageSeed { name: "JavaScript", extension: ".js" },
    LanguageSeed { name: "TypeScript", extension: ".ts" },
    LanguageSeed { name: "C++", extension: ".cpp" },
    LanguageSeed { name: "Java", extension: ".java" },
    LanguageSeed { name: "Go", extension: ".go" },
    LanguageSeed { name: "Rust", extension: ".rs" },
    LanguageSeed { name: "C#", extension: ".cs" },
    LanguageSeed { name: "PHP", extension: ".php" },
    LanguageSeed { name: "Ruby", extension: ".rb" },
];

/// Insert any of `seeds` that are not present yet. Existing rows are left alone.
///
/// Returns the number of languages inserted.
pub async fn seed_languages(pool: &SqlitePool, seeds: &[LanguageSeed]) -> Result<u64> {
    let mut inserted = 0;

    for seed in seeds {
        validate_language_name(seed.name)?;
        validate_extension(seed.extension)?;

        let result = sqlx::query(
            r#"
            INSERT INTO languages (name, extension)
            VALUES (?, ?)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(seed.name)
        .bind(seed.extension)
        .execute(pool)
        .await?;

        inserted += result.rows_affected();
    }

    info!(inserted, total = seeds.len(), "Languages seeded");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::list_languages;
    use crate::test_support::test_db;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let db = test_db().await;

        let first = seed_languages(db.pool(), DEFAULT_LANGUAGES).await.unwrap();
        assert_eq!(first, DEFAULT_LANGUAGES.len() as u64);

        let second = seed_languages(db.pool(), DEFAULT_LANGUAGES).await.unwrap();
        assert_eq!(second, 0);

        let languages = list_languages(db.pool()).await.unwrap();
        assert_eq!(languages.len(), DEFAULT_LANGUAGES.len());
        assert_eq!(languages[0].name, "C#");
    }
}
