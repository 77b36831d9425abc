//! Database models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Unique login name (3-50 chars).
    pub username: String,
    /// Unique email address.
    pub email: String,
}

/// Fields needed to create a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

/// A supported generation target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Language {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Display name, matched exactly (e.g., "Python", "C++").
    pub name: String,
    /// File extension including the dot (e.g., ".py").
    pub extension: String,
}

/// A stored generation, as it sits in the `generations` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Generation {
    pub id: i64,
    pub prompt: String,
    pub language_id: i64,
    pub user_id: Option<i64>,
    pub code: String,
    pub created_at: DateTime<Utc>,
}

/// Fields needed to insert a generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGeneration {
    pub prompt: String,
    pub language_id: i64,
    pub user_id: Option<i64>,
    pub code: String,
    /// Assigned by the caller at insert time; never updated afterwards.
    pub created_at: DateTime<Utc>,
}

/// Public fields of the user attached to a generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub username: String,
    pub email: String,
}

/// A generation joined with its language and (optional) user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationView {
    pub id: i64,
    pub prompt: String,
    /// Language display name.
    pub language: String,
    /// Language file extension; informational, not part of the wire shape.
    #[serde(skip_serializing)]
    pub extension: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    /// `None` when the generation has no user or the user was deleted.
    pub user: Option<UserSummary>,
}

/// Flat row produced by the generation/language/user join.
#[derive(Debug, FromRow)]
pub(crate) struct GenerationViewRow {
    pub id: i64,
    pub prompt: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub language_name: String,
    pub language_extension: String,
    pub user_username: Option<String>,
    pub user_email: Option<String>,
}

impl From<GenerationViewRow> for GenerationView {
    fn from(row: GenerationViewRow) -> Self {
        let user = match (row.user_username, row.user_email) {
            (Some(username), Some(email)) => Some(UserSummary { username, email }),
            _ => None,
        };

        Self {
            id: row.id,
            prompt: row.prompt,
            language: row.language_name,
            extension: row.language_extension,
            code: row.code,
            created_at: row.created_at,
            user,
        }
    }
}

/// Optional predicates for history queries.
///
/// Each field is one predicate; `None` means the predicate is not applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    /// Exact language name.
    pub language: Option<String>,
    /// Owning user ID.
    pub user_id: Option<i64>,
}

impl HistoryFilter {
    /// A filter that matches every generation.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to one language name.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Restrict to one user.
    pub fn with_user(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }
}
