//! HTTP API for the remote assistant proxy

mod cors;
mod handlers;
pub mod types;

pub use handlers::create_router;
pub use types::{ChatReply, ChatRequest, ErrorResponse, WireMessage, WirePart, WireRole};

use crate::assistant::RemoteAssistant;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<RemoteAssistant>,
}

impl AppState {
    pub fn new(assistant: RemoteAssistant) -> Self {
        Self {
            assistant: Arc::new(assistant),
        }
    }
}
