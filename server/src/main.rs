mod config;
mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::llm::LlmChat;
use crate::services::chat::ChatSettings;

#[tokio::main]
async fn main() {
    // RUST_LOG may come from .env.
    let dotenv = config::load_dotenv(None);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")))
        .init();

    if let Err(e) = dotenv {
        tracing::warn!(error = %e, "failed to load .env");
    }

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    // Initialize LLM client (non-fatal: /api/chat answers 500 if config missing).
    let mut chat_settings = ChatSettings::default();
    let llm: Option<Arc<dyn LlmChat>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), max_output_tokens = client.max_output_tokens(), "LLM client initialized");
            chat_settings.max_output_tokens = client.max_output_tokens();
            Some(Arc::new(client))
        }
        Err(e) if e.is_missing_api_key() => {
            tracing::warn!(error = %e, "LLM API key not set; /api/chat will answer 500");
            None
        }
        Err(e) => {
            tracing::error!(error = %e, "LLM configuration invalid; /api/chat will answer 500 until it is fixed");
            None
        }
    };

    let state = state::AppState::new(llm, chat_settings);
    let app = routes::app(state, &config.public_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind");

    tracing::info!(addr = %config.bind_addr(), public_dir = %config.public_dir.display(), "chatbubble listening");
    axum::serve(listener, app).await.expect("server failed");
}
