//! Generation service: validate, resolve, generate, persist, read back.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use database::{generation, language, user, Database, GenerationView, NewGeneration};
use provider_core::CodeProvider;
use tracing::{debug, info, warn};

use crate::error::{Result, ServiceError};
use crate::validation::{validate_generation, GenerationRequest};

/// Creates generations.
///
/// Each call runs its steps in order and shares nothing with other calls
/// beyond the connection pool. The provider call is the only slow step and
/// happens after every check that can reject the request.
#[derive(Clone)]
pub struct GenerationService {
    db: Database,
    provider: Arc<dyn CodeProvider>,
}

impl GenerationService {
    /// Create a service over the given store and provider.
    pub fn new(db: Database, provider: Arc<dyn CodeProvider>) -> Self {
        Self { db, provider }
    }

    /// Name of the provider in use.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Generate code for a request and store the result.
    ///
    /// On success exactly one generation row is added. On any error nothing
    /// is written.
    pub async fn create(&self, request: &GenerationRequest) -> Result<GenerationView> {
        let started = Instant::now();
        let valid = validate_generation(request)?;
        let pool = self.db.pool();

        let language = language::resolve_language(pool, &valid.language)
            .await?
            .ok_or_else(|| ServiceError::UnsupportedLanguage(valid.language.clone()))?;

        if let Some(user_id) = valid.user_id {
            if !user::user_exists(pool, user_id).await? {
                debug!(user_id, "Rejecting generation for unknown user");
                return Err(ServiceError::InvalidUser(user_id));
            }
        }

        let code = match self.provider.generate(&valid.prompt, &language.name).await {
            Ok(code) => code,
            Err(err) => {
                warn!(
                    provider = self.provider.name(),
                    language = %language.name,
                    error = %err,
                    "Code generation failed"
                );
                return Err(ServiceError::Provider(err));
            }
        };

        let new_generation = NewGeneration {
            prompt: valid.prompt,
            language_id: language.id,
            user_id: valid.user_id,
            code,
            created_at: Utc::now(),
        };
        let id = generation::insert_generation(pool, &new_generation).await?;
        let view = generation::get_generation_view(pool, id).await?;

        info!(
            generation_id = id,
            language = %language.name,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Generation stored"
        );

        Ok(view)
    }
}
