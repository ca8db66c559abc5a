//! Edge-function backed services: task generation and the chat assistant.

use async_trait::async_trait;
use log::{debug, info};
use reqwest::Method;

use lifeguide_core::chat::{ChatReply, ChatRequest, ChatServiceTrait};
use lifeguide_core::errors::Result;
use lifeguide_core::goals::{TaskGenerationRequest, TaskGeneratorTrait};

use crate::client::{RouteKind, SupabaseClient};

pub const GENERATE_GOAL_TASKS: &str = "generate-goal-tasks";
pub const CHAT_WITH_AI: &str = "chat-with-ai";

/// Calls `generate-goal-tasks`, which writes the task rows itself.
#[derive(Debug, Clone)]
pub struct SupabaseTaskGenerator {
    client: SupabaseClient,
}

impl SupabaseTaskGenerator {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TaskGeneratorTrait for SupabaseTaskGenerator {
    async fn generate_tasks(&self, request: TaskGenerationRequest) -> Result<()> {
        let url = self.client.function_url(GENERATE_GOAL_TASKS);
        self.client
            .send(Method::POST, &url, RouteKind::Function, Some(&request), None)
            .await?;
        info!("[Supabase] Tasks generated for goal {}", request.goal_id);
        Ok(())
    }
}

/// Relays chat messages to `chat-with-ai`.
#[derive(Debug, Clone)]
pub struct SupabaseChatService {
    client: SupabaseClient,
}

impl SupabaseChatService {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChatServiceTrait for SupabaseChatService {
    async fn send(&self, request: ChatRequest) -> Result<ChatReply> {
        let url = self.client.function_url(CHAT_WITH_AI);
        let reply: ChatReply = self
            .client
            .post(&url, RouteKind::Function, &request, None)
            .await?;
        if reply.fallback {
            debug!("[Supabase] Chat service answered in fallback mode");
        }
        Ok(reply)
    }
}
