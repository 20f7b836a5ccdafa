//! Portfolio assistant proxy server
//!
//! Forwards visitor chat histories to the upstream generative model and
//! returns its reply.

use portfolio_assistant::api::{create_router, AppState};
use portfolio_assistant::assistant::{GenerationSettings, RemoteAssistant};
use portfolio_assistant::config::ServerConfig;
use portfolio_assistant::knowledge::Knowledge;
use portfolio_assistant::llm::{GeminiService, LlmService, LoggingService};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_assistant=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let config = ServerConfig::from_env();

    if config.gemini.api_key.is_none() {
        tracing::warn!(
            "GEMINI_API_KEY is not set. Chat requests will fail until it is configured."
        );
    }

    let knowledge = Knowledge::load(config.knowledge_path.as_deref())?;

    // Initialize upstream model
    let gemini: Arc<dyn LlmService> = Arc::new(GeminiService::new(&config.gemini)?);
    let llm: Arc<dyn LlmService> = Arc::new(LoggingService::new(gemini));
    tracing::info!(
        model = %llm.model_id(),
        max_output_tokens = config.gemini.max_output_tokens,
        timeout_secs = config.gemini.timeout.as_secs(),
        "Upstream model configured"
    );

    let assistant = RemoteAssistant::new(llm, knowledge, GenerationSettings::from(&config.gemini));

    // Create router
    let compression = CompressionLayer::new()
        .gzip(true)
        .br(true)
        .deflate(true)
        .zstd(true);

    let app = create_router(AppState::new(assistant))
        .layer(TraceLayer::new_for_http())
        .layer(compression);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Portfolio assistant listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
