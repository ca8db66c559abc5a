use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use serde_json::{Map, Value};

use super::quiz_model::{NewQuizResult, QuizSubmission};
use super::quiz_scoring::KeywordTallyScorer;
use super::quiz_traits::{QuizResultRepositoryTrait, QuizResultServiceTrait};
use crate::auth::AuthProviderTrait;
use crate::errors::{AuthError, Result};

/// Stores keyword-scored quiz submissions for authenticated users.
pub struct QuizResultService {
    auth_provider: Arc<dyn AuthProviderTrait>,
    repository: Arc<dyn QuizResultRepositoryTrait>,
    scorer: KeywordTallyScorer,
}

impl QuizResultService {
    pub fn new(
        auth_provider: Arc<dyn AuthProviderTrait>,
        repository: Arc<dyn QuizResultRepositoryTrait>,
    ) -> Self {
        Self {
            auth_provider,
            repository,
            scorer: KeywordTallyScorer,
        }
    }
}

#[async_trait]
impl QuizResultServiceTrait for QuizResultService {
    async fn submit(
        &self,
        access_token: Option<&str>,
        answers: Map<String, Value>,
    ) -> Result<QuizSubmission> {
        let token = access_token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingCredential)?;
        let user = self.auth_provider.get_user(token).await?;
        debug!("Scoring {} quiz answers for user {}", answers.len(), user.id);

        // Non-text answers carry no keywords.
        let career_suggestions = self
            .scorer
            .suggest(answers.values().filter_map(Value::as_str));

        self.repository
            .insert_result(NewQuizResult {
                user_id: user.id.clone(),
                answers,
                career_suggestions: career_suggestions.clone(),
            })
            .await?;
        info!("Stored quiz result for user {}", user.id);

        Ok(QuizSubmission { career_suggestions })
    }
}
