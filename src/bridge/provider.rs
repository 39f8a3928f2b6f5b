//! Generative Provider Traits
//!
//! The seam between the bridge and whatever service actually produces text.
//! Production uses [`GeminiProvider`](super::gemini::GeminiProvider); tests
//! substitute scripted providers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Who authored a turn, in the provider's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// Single-turn generation.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
}

/// Multi-turn chat: replay `history`, then send `message`.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub system_instruction: String,
    pub history: Vec<ChatMessage>,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API key is missing")]
    MissingCredential,

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Malformed provider response: {0}")]
    Decode(String),
}

/// A generative-text service.
///
/// Both calls return `Ok(None)` when the provider succeeded but produced no
/// text; that is a valid outcome, not an error.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &str;

    async fn generate(&self, request: &GenerateRequest) -> Result<Option<String>, ProviderError>;

    async fn chat(&self, request: &ChatRequest) -> Result<Option<String>, ProviderError>;
}
