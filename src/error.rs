//! Error types for Care Assist.

use std::time::Duration;

/// Top-level error type for the advisor.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Catalog consistency errors, raised only by startup validation.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Issue mapping for {issue} references unknown product {product_id}")]
    MissingMappedProduct { issue: String, product_id: String },

    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    #[error("Question {question_id} references unknown category {category_id}")]
    UnknownCategory {
        question_id: String,
        category_id: String,
    },

    #[error("Catalog needs at least one toothpaste and two toothbrushes for the fallback pair")]
    MissingFallbackProducts,
}

/// Questionnaire session errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Questionnaire already complete at step {step}")]
    AlreadyComplete { step: usize },

    #[error("Questionnaire incomplete: {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },

    #[error("Unknown option {option_id} for question {question_id}")]
    UnknownOption {
        question_id: String,
        option_id: String,
    },
}

/// Text-generation provider errors.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Provider {provider} request failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("Provider {provider} returned an empty completion")]
    EmptyCompletion { provider: String },

    #[error("Provider {provider} timed out after {budget:?}")]
    Timeout { provider: String, budget: Duration },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for the advisor.
pub type Result<T> = std::result::Result<T, Error>;
