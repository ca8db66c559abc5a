use async_trait::async_trait;

use super::chat_model::{ChatReply, ChatRequest};
use crate::errors::Result;

/// Trait for the external chat service.
#[async_trait]
pub trait ChatServiceTrait: Send + Sync {
    async fn send(&self, request: ChatRequest) -> Result<ChatReply>;
}
