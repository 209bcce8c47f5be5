use std::sync::Arc;

use crate::assist::RequestSequencer;
use crate::config::Config;
use crate::documents::ResumeStore;
use crate::errors::AppError;
use crate::llm_client::TextCompletion;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Postgres when `DATABASE_URL` is set, in-memory otherwise.
    pub store: Arc<dyn ResumeStore>,
    /// `None` when no API key is configured.
    pub completion: Option<Arc<dyn TextCompletion>>,
    pub sequencer: Arc<RequestSequencer>,
    pub config: Config,
}

impl AppState {
    /// The AI collaborator, or the non-fatal 503 when it is not configured.
    pub fn completion(&self) -> Result<Arc<dyn TextCompletion>, AppError> {
        self.completion.clone().ok_or(AppError::LlmUnavailable)
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::Arc;

    use super::AppState;
    use crate::assist::RequestSequencer;
    use crate::config::Config;
    use crate::documents::MemoryResumeStore;
    use crate::llm_client::TextCompletion;

    /// In-memory store, no database, optional scripted completion.
    pub fn test_state(completion: Option<Arc<dyn TextCompletion>>) -> AppState {
        AppState {
            store: Arc::new(MemoryResumeStore::default()),
            completion,
            sequencer: Arc::new(RequestSequencer::default()),
            config: Config {
                database_url: None,
                anthropic_api_key: None,
                default_template: None,
                port: 0,
                rust_log: "debug".to_string(),
            },
        }
    }
}
