use async_trait::async_trait;
use serde_json::{Map, Value};

use super::quiz_model::{NewQuizResult, QuizSubmission};
use crate::errors::Result;

/// Trait for persisting authenticated quiz submissions.
#[async_trait]
pub trait QuizResultRepositoryTrait: Send + Sync {
    async fn insert_result(&self, result: NewQuizResult) -> Result<()>;
}

/// Trait for the authenticated quiz submission operation.
#[async_trait]
pub trait QuizResultServiceTrait: Send + Sync {
    /// Resolves the caller from `access_token`, derives career suggestions
    /// from `answers` and stores them.
    async fn submit(
        &self,
        access_token: Option<&str>,
        answers: Map<String, Value>,
    ) -> Result<QuizSubmission>;
}
