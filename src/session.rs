//! Chat session state
//!
//! A session owns its conversation history; nothing is shared between
//! sessions or persisted after one ends.

use crate::dispatcher::ResponseDispatcher;
use rand::Rng;
use std::time::Duration;
use uuid::Uuid;

/// Shown when a session opens or is reset
pub const GREETING: &str =
    "Hi there! I'm Tharindu's automated assistant. How can I help you today?";

/// Who said a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

/// One message in a conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    speaker: Speaker,
    text: String,
}

impl ConversationTurn {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Speaker::Assistant, text)
    }

    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Turns in the order they happened
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationHistory {
    turns: Vec<ConversationTurn>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Case-folded text of the most recent user turn, or empty if the user
    /// has not spoken yet.
    pub fn last_user_text(&self) -> String {
        self.turns
            .iter()
            .rev()
            .find(|turn| turn.speaker == Speaker::User)
            .map(|turn| turn.text.to_lowercase())
            .unwrap_or_default()
    }
}

/// One open chat, identified for log correlation
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: Uuid,
    history: ConversationHistory,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            history: ConversationHistory::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Answer `message` from the rule table and record the exchange.
    ///
    /// Returns `None` for blank input, which is not recorded. The reply is
    /// selected against the history as it stood before this message.
    pub fn reply_scripted(
        &mut self,
        dispatcher: &ResponseDispatcher,
        message: &str,
    ) -> Option<String> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }

        let reply = dispatcher.select_response(message, &self.history);
        self.record_exchange(message, reply);
        Some(reply.to_string())
    }

    /// Record a user message and the reply it received.
    pub fn record_exchange(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        self.history.push(ConversationTurn::user(user));
        self.history.push(ConversationTurn::assistant(assistant));
        tracing::debug!(session = %self.id, turns = self.history.len(), "Recorded exchange");
    }

    /// Forget everything said so far.
    pub fn reset(&mut self) {
        self.history.clear();
        tracing::debug!(session = %self.id, "Session reset");
    }
}

/// Cosmetic pause before showing a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinkingDelay {
    min: Duration,
    max: Duration,
}

impl Default for ThinkingDelay {
    fn default() -> Self {
        Self::between(Duration::from_millis(1000), Duration::from_millis(2000))
    }
}

impl ThinkingDelay {
    /// A random delay in `[min, max]`. Arguments may come in either order.
    pub fn between(a: Duration, b: Duration) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn none() -> Self {
        Self::between(Duration::ZERO, Duration::ZERO)
    }

    /// Parse `"1500"` (fixed) or `"1000-2000"` (range), in milliseconds.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let (low, high) = match raw.split_once('-') {
            Some((low, high)) => (low.trim().parse().ok()?, high.trim().parse().ok()?),
            None => {
                let fixed = raw.parse().ok()?;
                (fixed, fixed)
            }
        };
        Some(Self::between(
            Duration::from_millis(low),
            Duration::from_millis(high),
        ))
    }

    pub fn is_none(&self) -> bool {
        self.max.is_zero()
    }

    /// Pick a duration within the configured range.
    pub fn sample(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        rand::thread_rng().gen_range(self.min..=self.max)
    }

    pub async fn pause(&self) {
        if self.is_none() {
            return;
        }
        tokio::time::sleep(self.sample()).await;
    }
}
