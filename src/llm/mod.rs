//! LLM integration for advice enrichment.
//!
//! Supports:
//! - **Groq**: the default backend (OpenAI-compatible API)
//! - **OpenAI**: direct API access
//!
//! Both go through [`OpenAiCompatProvider`]; they differ only in endpoint
//! and model naming.

pub mod openai_compat;
pub mod provider;

pub use openai_compat::OpenAiCompatProvider;
pub use provider::{ChatMessage, CompletionRequest, CompletionResponse, LlmProvider, Role};

use std::sync::Arc;

use crate::error::LlmError;

const GROQ_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
const OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Supported LLM backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmBackend {
    Groq,
    OpenAi,
}

impl LlmBackend {
    fn name(&self) -> &'static str {
        match self {
            Self::Groq => "groq",
            Self::OpenAi => "openai",
        }
    }

    fn default_endpoint(&self) -> &'static str {
        match self {
            Self::Groq => GROQ_ENDPOINT,
            Self::OpenAi => OPENAI_ENDPOINT,
        }
    }
}

/// Configuration for creating an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub backend: LlmBackend,
    pub api_key: secrecy::SecretString,
    pub model: String,
    /// Endpoint override, mainly for tests and proxies.
    pub endpoint: Option<String>,
}

/// Create an LLM provider from configuration.
pub fn create_provider(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, LlmError> {
    let endpoint = config
        .endpoint
        .clone()
        .unwrap_or_else(|| config.backend.default_endpoint().to_string());
    let provider = OpenAiCompatProvider::new(
        config.backend.name(),
        endpoint,
        &config.api_key,
        &config.model,
    )?;
    tracing::info!(
        "Using {} (model: {})",
        config.backend.name(),
        config.model
    );
    Ok(Arc::new(provider))
}
