//! Remote assistant conversation assembly
//!
//! Wraps the caller's chat history with the grounding preamble and submits
//! the final user message as the new turn.

use crate::config::GeminiConfig;
use crate::knowledge::{Knowledge, MODEL_GREETING};
use crate::llm::{LlmError, LlmMessage, LlmRequest, LlmService, MessageRole, Sampling};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    /// The history cannot be submitted as-is. Not retried.
    #[error("invalid chat history: {0}")]
    InvalidRequest(&'static str),
    /// The upstream call failed. Not retried.
    #[error("upstream failure: {0}")]
    Upstream(#[from] LlmError),
}

/// Generation limits applied to every upstream call
#[derive(Debug, Clone, Copy)]
pub struct GenerationSettings {
    pub max_output_tokens: u32,
    pub sampling: Sampling,
}

impl From<&GeminiConfig> for GenerationSettings {
    fn from(config: &GeminiConfig) -> Self {
        Self {
            max_output_tokens: config.max_output_tokens,
            sampling: Sampling {
                temperature: Some(config.temperature),
                top_k: Some(config.top_k),
                top_p: Some(config.top_p),
            },
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self::from(&GeminiConfig::default())
    }
}

pub struct RemoteAssistant {
    llm: Arc<dyn LlmService>,
    knowledge: Knowledge,
    settings: GenerationSettings,
}

impl RemoteAssistant {
    pub fn new(
        llm: Arc<dyn LlmService>,
        knowledge: Knowledge,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            llm,
            knowledge,
            settings,
        }
    }

    pub fn model_id(&self) -> &str {
        self.llm.model_id()
    }

    /// Answer the last message of `history`, using the rest as context.
    pub async fn reply(&self, history: Vec<LlmMessage>) -> Result<String, AssistantError> {
        let request = self.build_request(history)?;
        let response = self.llm.complete(&request).await?;
        Ok(response.text)
    }

    fn build_request(&self, mut history: Vec<LlmMessage>) -> Result<LlmRequest, AssistantError> {
        let latest = history
            .pop()
            .ok_or(AssistantError::InvalidRequest("chat history is empty"))?;
        if latest.role != MessageRole::User {
            return Err(AssistantError::InvalidRequest("last message must come from the user"));
        }
        if latest.text.trim().is_empty() {
            return Err(AssistantError::InvalidRequest("last message has no text"));
        }

        let mut messages = Vec::with_capacity(history.len() + 3);
        messages.push(LlmMessage::user(self.knowledge.preamble()));
        messages.push(LlmMessage::assistant(MODEL_GREETING));
        messages.extend(history);
        messages.push(latest);

        Ok(LlmRequest {
            messages,
            max_tokens: Some(self.settings.max_output_tokens),
            sampling: self.settings.sampling,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::SYSTEM_INSTRUCTION;
    use crate::llm::testing::ScriptedService;
    use crate::llm::LlmErrorKind;

    fn assistant(service: &Arc<ScriptedService>) -> RemoteAssistant {
        RemoteAssistant::new(
            service.clone(),
            Knowledge::new("Profile facts."),
            GenerationSettings::default(),
        )
    }

    #[tokio::test]
    async fn test_preamble_then_context_then_latest() {
        let service = Arc::new(ScriptedService::new());
        service.push_reply("He works at Epic Lanka.");

        let reply = assistant(&service)
            .reply(vec![
                LlmMessage::user("Hi"),
                LlmMessage::assistant("Hello!"),
                LlmMessage::user("Where does he work?"),
            ])
            .await
            .unwrap();
        assert_eq!(reply, "He works at Epic Lanka.");

        let requests = service.requests();
        assert_eq!(requests.len(), 1);
        let messages = &requests[0].messages;
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[0].role, MessageRole::User);
        assert_eq!(messages[0].text, format!("{SYSTEM_INSTRUCTION}\nProfile facts."));
        assert_eq!(messages[1], LlmMessage::assistant(MODEL_GREETING));
        assert_eq!(messages[2], LlmMessage::user("Hi"));
        assert_eq!(messages[3], LlmMessage::assistant("Hello!"));
        // Submitted once, as the final turn
        assert_eq!(messages[4], LlmMessage::user("Where does he work?"));
    }

    #[tokio::test]
    async fn test_generation_limits_are_applied() {
        let service = Arc::new(ScriptedService::new());
        service.push_reply("ok");

        assistant(&service)
            .reply(vec![LlmMessage::user("skills?")])
            .await
            .unwrap();

        let request = &service.requests()[0];
        assert_eq!(request.max_tokens, Some(200));
        assert_eq!(request.sampling.top_k, Some(40));
        assert!(request.sampling.temperature.is_some_and(|t| (t - 0.7).abs() < 1e-6));
        assert!(request.sampling.top_p.is_some_and(|p| (p - 0.95).abs() < 1e-6));
    }

    #[tokio::test]
    async fn test_invalid_histories_never_reach_upstream() {
        let service = Arc::new(ScriptedService::new());
        let assistant = assistant(&service);

        for history in [
            vec![],
            vec![LlmMessage::user("q"), LlmMessage::assistant("a")],
            vec![LlmMessage::user("  ")],
        ] {
            let err = assistant.reply(history).await.unwrap_err();
            assert!(matches!(err, AssistantError::InvalidRequest(_)));
        }
        assert!(service.requests().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_error_is_surfaced() {
        let service = Arc::new(ScriptedService::new());
        service.push_error(LlmError::server_error("Server error: overloaded"));

        let err = assistant(&service)
            .reply(vec![LlmMessage::user("hello")])
            .await
            .unwrap_err();

        match err {
            AssistantError::Upstream(e) => {
                assert_eq!(e.kind, LlmErrorKind::ServerError);
                assert_eq!(e.message, "Server error: overloaded");
            }
            AssistantError::InvalidRequest(_) => panic!("expected upstream failure"),
        }
    }
}
