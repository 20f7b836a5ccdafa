//! Client for the remote assistant proxy

use crate::api::{ChatReply, ChatRequest, ErrorResponse};
use crate::session::ConversationHistory;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

const CLIENT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("could not reach assistant: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("assistant sent an unreadable reply: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("assistant returned {status}: {error}")]
    Rejected {
        status: u16,
        error: String,
        details: Option<String>,
    },
}

pub struct RemoteAssistantClient {
    client: Client,
    url: String,
}

impl RemoteAssistantClient {
    pub fn new(url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(CLIENT_TIMEOUT).build()?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send the session so far plus `message`; returns the assistant's reply.
    pub async fn ask(
        &self,
        history: &ConversationHistory,
        message: &str,
    ) -> Result<String, ClientError> {
        let request = ChatRequest::from_session(history, message);
        let response = self.client.post(&self.url).json(&request).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            let reply: ChatReply = serde_json::from_str(&body).map_err(ClientError::Decode)?;
            return Ok(reply.bot_response);
        }

        let (error, details) = match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(parsed) => (parsed.error, parsed.details),
            Err(_) => (body, None),
        };
        Err(ClientError::Rejected {
            status: status.as_u16(),
            error,
            details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{create_router, AppState};
    use crate::assistant::{GenerationSettings, RemoteAssistant};
    use crate::knowledge::Knowledge;
    use crate::llm::testing::ScriptedService;
    use crate::llm::{LlmError, MessageRole};
    use crate::session::ConversationTurn;
    use std::sync::Arc;

    fn local_client(url: String) -> RemoteAssistantClient {
        let client = Client::builder().no_proxy().build().unwrap();
        RemoteAssistantClient::with_client(client, url)
    }

    async fn serve(service: Arc<ScriptedService>) -> String {
        let assistant =
            RemoteAssistant::new(service, Knowledge::new("Facts."), GenerationSettings::default());
        let app = create_router(AppState::new(assistant));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/api/chat")
    }

    #[tokio::test]
    async fn test_ask_round_trip() {
        let service = Arc::new(ScriptedService::new());
        service.push_reply("Since April 2024.");
        let client = local_client(serve(service.clone()).await);

        let mut history = ConversationHistory::new();
        history.push(ConversationTurn::user("Where does he work?"));
        history.push(ConversationTurn::assistant("Epic Lanka."));

        let reply = client.ask(&history, "Since when?").await.unwrap();
        assert_eq!(reply, "Since April 2024.");

        let messages = &service.requests()[0].messages;
        // preamble, greeting, two prior turns, new message
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[3].role, MessageRole::Assistant);
        assert_eq!(messages[4].text, "Since when?");
    }

    #[tokio::test]
    async fn test_ask_surfaces_server_error() {
        let service = Arc::new(ScriptedService::new());
        service.push_error(LlmError::network("Request timeout: upstream"));
        let client = local_client(serve(service).await);

        let err = client
            .ask(&ConversationHistory::new(), "hello")
            .await
            .unwrap_err();

        match err {
            ClientError::Rejected {
                status,
                error,
                details,
            } => {
                assert_eq!(status, 500);
                assert_eq!(error, "Failed to get response from AI. Internal server error.");
                assert_eq!(details.as_deref(), Some("Request timeout: upstream"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_unreadable_success_body_is_decode_error() {
        let app = axum::Router::new().route(
            "/api/chat",
            axum::routing::post(|| async { "<html>maintenance</html>" }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = local_client(format!("http://{addr}/api/chat"));
        let err = client
            .ask(&ConversationHistory::new(), "hello")
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Decode(_)));
        assert!(err.to_string().starts_with("assistant sent an unreadable reply"));
    }

    #[tokio::test]
    async fn test_unreachable_proxy_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = local_client(format!("http://{addr}/api/chat"));
        let err = client
            .ask(&ConversationHistory::new(), "hello")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }
}
