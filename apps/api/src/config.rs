use anyhow::{Context, Result};

use crate::templates::{registry, DEFAULT_TEMPLATE_ID};

/// Application configuration loaded from environment variables.
/// Only `PORT` is validated; every collaborator is optional and the
/// renderer works without any of them.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absent: documents are kept in memory for the life of the process.
    pub database_url: Option<String>,
    /// Absent: the AI endpoints answer 503 and everything else works.
    pub anthropic_api_key: Option<String>,
    /// Template for documents whose id is missing or unknown.
    pub default_template: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            default_template: optional_env("DEFAULT_TEMPLATE"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// `DEFAULT_TEMPLATE` when it names a template, the built-in default
    /// otherwise.
    pub fn fallback_template_id(&self) -> &str {
        match self.default_template.as_deref() {
            Some(id) if registry::is_known(id) => id,
            _ => DEFAULT_TEMPLATE_ID,
        }
    }
}

/// Unset and blank are the same thing.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
