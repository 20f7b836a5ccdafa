//! API request and response types

use crate::llm::{LlmMessage, MessageRole};
use crate::session::{ConversationHistory, Speaker};
use serde::{Deserialize, Serialize};

/// Body of a chat request
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub chat_history: Option<Vec<WireMessage>>,
}

impl ChatRequest {
    /// Prior session turns followed by a new user message.
    pub fn from_session(history: &ConversationHistory, message: &str) -> Self {
        let mut entries: Vec<WireMessage> = history
            .turns()
            .iter()
            .map(|turn| {
                let role = match turn.speaker() {
                    Speaker::User => WireRole::User,
                    Speaker::Assistant => WireRole::Model,
                };
                WireMessage::new(role, turn.text())
            })
            .collect();
        entries.push(WireMessage::new(WireRole::User, message));

        Self {
            chat_history: Some(entries),
        }
    }
}

/// One history entry in the upstream service's own shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: WireRole,
    #[serde(default)]
    pub parts: Vec<WirePart>,
}

impl WireMessage {
    pub fn new(role: WireRole, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![WirePart { text: text.into() }],
        }
    }

    /// Text parts joined with newlines.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .map(|part| part.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<&WireMessage> for LlmMessage {
    fn from(message: &WireMessage) -> Self {
        LlmMessage {
            role: match message.role {
                WireRole::User => MessageRole::User,
                WireRole::Model => MessageRole::Assistant,
            },
            text: message.text(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WirePart {
    #[serde(default)]
    pub text: String,
}

/// Successful chat reply
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub bot_response: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
