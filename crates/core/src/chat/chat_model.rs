//! Chat assistant domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::notices::Notice;

/// First message of every transcript.
pub const ASSISTANT_GREETING: &str = "Halo! Aku adalah asisten AI kamu yang sudah terhubung dengan ChatGPT! 🤖✨ Aku di sini untuk membantu dan memberikan motivasi dalam perjalanan belajar kamu. Sekarang aku bisa menjawab pertanyaan yang lebih kompleks dan memberikan saran yang lebih personal. Ada yang bisa aku bantu hari ini? 😊";

/// Reply substituted locally when the chat service cannot be reached.
pub const LOCAL_FALLBACK_REPLY: &str = "Maaf, aku sedang mengalami gangguan koneksi. Tapi aku tetap di sini untuk membantu! Coba tanyakan lagi atau gunakan pertanyaan cepat di bawah ya 😊";

/// Prompts offered as one-tap questions.
pub const QUICK_ACTIONS: [&str; 6] = [
    "Aku butuh motivasi belajar",
    "Bagaimana cara mengatasi prokrastinasi?",
    "Tips belajar efektif untuk UTBK",
    "Aku bingung pilih jurusan kuliah",
    "Cara mengatur waktu belajar",
    "Aku merasa stress dengan target",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One history entry sent to the chat service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

/// Request body of the chat service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub conversation_history: Vec<ChatTurn>,
}

/// Response body of the chat service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(rename = "response")]
    pub reply: String,
    /// Set by the service when it answered in degraded mode.
    #[serde(default)]
    pub fallback: bool,
}

/// Who produced an assistant message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    /// Regular answer of the chat service.
    Service,
    /// The service answered but flagged its reply as a fallback.
    ServiceFallback,
    /// The service was unreachable; the reply was substituted locally.
    LocalFallback,
}

impl ReplySource {
    pub fn is_fallback(self) -> bool {
        !matches!(self, ReplySource::Service)
    }

    /// Toast shown alongside a degraded reply.
    pub fn notice(self) -> Option<Notice> {
        match self {
            ReplySource::Service => None,
            ReplySource::ServiceFallback => Some(Notice::info(
                "Menggunakan mode offline - respons mungkin terbatas",
            )),
            ReplySource::LocalFallback => Some(Notice::error(
                "Koneksi AI terganggu, menggunakan mode offline",
            )),
        }
    }
}

/// Message of the on-screen transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: ChatRole,
    pub timestamp: DateTime<Utc>,
    /// Only set on assistant replies.
    pub source: Option<ReplySource>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, ChatRole::User, None)
    }

    pub fn assistant(text: impl Into<String>, source: ReplySource) -> Self {
        Self::new(text, ChatRole::Assistant, Some(source))
    }

    fn new(text: impl Into<String>, sender: ChatRole, source: Option<ReplySource>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
            source,
        }
    }

    pub fn to_turn(&self) -> ChatTurn {
        ChatTurn {
            role: self.sender,
            content: self.text.clone(),
        }
    }
}

/// The assistant message added by one send.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatExchange {
    pub reply: ChatMessage,
    pub source: ReplySource,
}

impl ChatExchange {
    pub fn notice(&self) -> Option<Notice> {
        self.source.notice()
    }
}
