//! Chat relay - bounded transcript, service call with capped history, and
//! the two fallback tiers.

mod chat_model;
mod chat_session;
mod chat_traits;

pub use chat_model::{
    ChatExchange, ChatMessage, ChatReply, ChatRequest, ChatRole, ChatTurn, ReplySource,
    ASSISTANT_GREETING, LOCAL_FALLBACK_REPLY, QUICK_ACTIONS,
};
pub use chat_session::ChatSession;
pub use chat_traits::ChatServiceTrait;
