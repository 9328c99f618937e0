//! Service configuration.
//!
//! Centralizes everything the interview service reads from the environment
//! and provides a single struct that can be passed throughout the runtime.

use std::env;
use tracing::Level;

/// Default identifier of the predefined interview-generation workflow.
pub const DEFAULT_GENERATION_WORKFLOW: &str = "wf_interview_generation";

/// Holds all configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub voice_api_key: String,
    pub voice_base_url: Option<String>,
    pub feedback_api_url: String,
    pub feedback_api_key: String,
    pub generation_workflow_id: String,
    pub log_level: Level,
}

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),
    #[error("Invalid log level provided for RUST_LOG: {0}")]
    InvalidLogLevel(String),
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    // *   `VOICE_API_KEY`: Secret key for the voice platform. Required.
    // *   `VOICE_BASE_URL`: (Optional) Overrides the platform endpoint.
    // *   `FEEDBACK_API_URL`: Base URL of the scoring service. Required.
    // *   `FEEDBACK_API_KEY`: Secret key for the scoring service. Required.
    // *   `GENERATION_WORKFLOW_ID`: (Optional) The interview-generation workflow to run.
    // *   `RUST_LOG`: (Optional) Logging level, defaults to "INFO".
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env if present; useful for local development.
        dotenvy::dotenv().ok();

        let voice_api_key = env::var("VOICE_API_KEY")
            .map_err(|_| ConfigError::MissingVar("VOICE_API_KEY".to_string()))?;
        let voice_base_url = env::var("VOICE_BASE_URL").ok();

        let feedback_api_url = env::var("FEEDBACK_API_URL")
            .map_err(|_| ConfigError::MissingVar("FEEDBACK_API_URL".to_string()))?;
        let feedback_api_key = env::var("FEEDBACK_API_KEY")
            .map_err(|_| ConfigError::MissingVar("FEEDBACK_API_KEY".to_string()))?;

        let generation_workflow_id = env::var("GENERATION_WORKFLOW_ID")
            .unwrap_or_else(|_| DEFAULT_GENERATION_WORKFLOW.to_string());

        let log_level_str = env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(log_level_str))?;

        Ok(Self {
            voice_api_key,
            voice_base_url,
            feedback_api_url,
            feedback_api_key,
            generation_workflow_id,
            log_level,
        })
    }
}
