use std::collections::VecDeque;

use log::warn;

use super::chat_model::{
    ChatExchange, ChatMessage, ChatReply, ChatRequest, ReplySource, ASSISTANT_GREETING,
    LOCAL_FALLBACK_REPLY,
};
use super::chat_traits::ChatServiceTrait;
use crate::constants::{CHAT_HISTORY_LIMIT, DEFAULT_TRANSCRIPT_LIMIT};
use crate::errors::{Result, ValidationError};

/// Transcript and in-flight state of the chat assistant for one session.
///
/// A send is split into [`ChatSession::begin`] and [`ChatSession::complete`]
/// so a view can render the pending user message while the request runs;
/// [`ChatSession::send`] does both around the service call.
#[derive(Debug, Clone)]
pub struct ChatSession {
    transcript: VecDeque<ChatMessage>,
    transcript_limit: usize,
    awaiting_reply: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self::with_transcript_limit(DEFAULT_TRANSCRIPT_LIMIT)
    }

    pub fn with_transcript_limit(limit: usize) -> Self {
        let mut session = Self {
            transcript: VecDeque::new(),
            transcript_limit: limit.max(1),
            awaiting_reply: false,
        };
        session.push(ChatMessage::assistant(
            ASSISTANT_GREETING,
            ReplySource::Service,
        ));
        session
    }

    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.transcript.iter()
    }

    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    /// True between `begin` and `complete`.
    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Appends the user message and returns the request to send.
    ///
    /// The history holds the last messages before this one.
    pub fn begin(&mut self, text: &str) -> Result<ChatRequest> {
        if text.trim().is_empty() {
            return Err(ValidationError::MissingField("message".to_string()).into());
        }
        if self.awaiting_reply {
            return Err(ValidationError::InvalidInput(
                "a reply is still pending".to_string(),
            )
            .into());
        }

        let skip = self.transcript.len().saturating_sub(CHAT_HISTORY_LIMIT);
        let conversation_history = self
            .transcript
            .iter()
            .skip(skip)
            .map(ChatMessage::to_turn)
            .collect();

        self.push(ChatMessage::user(text));
        self.awaiting_reply = true;
        Ok(ChatRequest {
            message: text.to_string(),
            conversation_history,
        })
    }

    /// Appends the assistant reply for the pending request.
    ///
    /// A failed call is answered with the local apology.
    pub fn complete(&mut self, result: Result<ChatReply>) -> ChatExchange {
        self.awaiting_reply = false;
        let (text, source) = match result {
            Ok(reply) if reply.fallback => (reply.reply, ReplySource::ServiceFallback),
            Ok(reply) => (reply.reply, ReplySource::Service),
            Err(e) => {
                warn!("Error calling chat service: {}", e);
                (LOCAL_FALLBACK_REPLY.to_string(), ReplySource::LocalFallback)
            }
        };

        let reply = ChatMessage::assistant(text, source);
        self.push(reply.clone());
        ChatExchange { reply, source }
    }

    /// Sends `text` through `service` and records the reply.
    ///
    /// Dropping the future before the reply arrives keeps the user message
    /// but clears the pending flag, so the next send is accepted.
    pub async fn send(
        &mut self,
        service: &dyn ChatServiceTrait,
        text: &str,
    ) -> Result<ChatExchange> {
        let request = self.begin(text)?;
        let pending = PendingReply { session: self };
        let result = service.send(request).await;
        Ok(pending.session.complete(result))
    }

    /// Clears the transcript back to the greeting.
    pub fn reset(&mut self) {
        *self = Self::with_transcript_limit(self.transcript_limit);
    }

    fn push(&mut self, message: ChatMessage) {
        self.transcript.push_back(message);
        while self.transcript.len() > self.transcript_limit {
            self.transcript.pop_front();
        }
    }
}

/// Clears `awaiting_reply` when a send is abandoned mid-flight.
struct PendingReply<'a> {
    session: &'a mut ChatSession,
}

impl Drop for PendingReply<'_> {
    fn drop(&mut self) {
        self.session.awaiting_reply = false;
    }
}
