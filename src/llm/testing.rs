//! Scripted LLM service for tests

use super::{LlmError, LlmRequest, LlmResponse, LlmService, Usage};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays queued outcomes in order and records every request it sees.
/// An empty queue answers with an error.
#[derive(Default)]
pub struct ScriptedService {
    outcomes: Mutex<VecDeque<Result<LlmResponse, LlmError>>>,
    requests: Mutex<Vec<LlmRequest>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_reply(&self, text: &str) {
        self.outcomes.lock().unwrap().push_back(Ok(LlmResponse {
            text: text.to_string(),
            end_turn: true,
            usage: Usage {
                input_tokens: 10,
                output_tokens: 5,
            },
        }));
    }

    pub fn push_error(&self, error: LlmError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<LlmRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmService for ScriptedService {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::unknown("no scripted outcome")))
    }

    fn model_id(&self) -> &str {
        "scripted-model"
    }
}
