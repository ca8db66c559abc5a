use async_trait::async_trait;
use reqwest::Method;

use lifeguide_core::errors::Result;
use lifeguide_core::quiz::{NewQuizResult, QuizResultRepositoryTrait};

use crate::client::{RouteKind, SupabaseClient};
use crate::models::QuizResultRow;

/// Quiz result store on the `interest_test_results` table.
#[derive(Debug, Clone)]
pub struct SupabaseQuizResultRepository {
    client: SupabaseClient,
}

impl SupabaseQuizResultRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QuizResultRepositoryTrait for SupabaseQuizResultRepository {
    async fn insert_result(&self, result: NewQuizResult) -> Result<()> {
        let url = self.client.rest_url("interest_test_results", &[]);
        self.client
            .send(
                Method::POST,
                &url,
                RouteKind::Rest,
                Some(&QuizResultRow::from(result)),
                None,
            )
            .await
    }
}
