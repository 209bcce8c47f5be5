mod assist;
mod config;
mod db;
mod documents;
mod errors;
mod import;
mod layout;
mod llm_client;
mod models;
mod preview;
mod render;
mod routes;
mod state;
mod style;
mod templates;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assist::RequestSequencer;
use crate::config::Config;
use crate::db::create_pool;
use crate::documents::{MemoryResumeStore, PgResumeStore, ResumeStore};
use crate::llm_client::{LlmClient, TextCompletion};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    // Persistence: Postgres when configured, process memory otherwise
    let store: Arc<dyn ResumeStore> = match &config.database_url {
        Some(url) => {
            let store = PgResumeStore::new(create_pool(url).await?);
            store.ensure_schema().await?;
            Arc::new(store)
        }
        None => {
            warn!("DATABASE_URL not set; documents are kept in memory only");
            Arc::new(MemoryResumeStore::default())
        }
    };

    // AI collaborator is optional; rendering never depends on it
    let completion: Option<Arc<dyn TextCompletion>> = match &config.anthropic_api_key {
        Some(key) => {
            let llm: Arc<dyn TextCompletion> = Arc::new(LlmClient::new(key.clone())?);
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(llm)
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; AI assistance and import are disabled");
            None
        }
    };

    let fallback = config.fallback_template_id();
    if let Some(id) = config.default_template.as_deref().filter(|id| *id != fallback) {
        warn!("DEFAULT_TEMPLATE '{id}' is not a known template; using {fallback}");
    }
    info!("Default template: {fallback}");
    info!("{} templates registered", templates::catalogue().len());

    let state = AppState {
        store,
        completion,
        sequencer: Arc::new(RequestSequencer::default()),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
