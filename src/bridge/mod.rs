//! Generative Content Bridge
//!
//! Turns the two UI intents (draft a post, reply as a character) into provider
//! calls. Every call makes exactly one attempt and produces a [`Generation`];
//! the `*_text` helpers map that to something the page can always display.
//!
//! # Failure handling
//!
//! Provider errors are logged and kept in [`Generation::Failed`] so tests can
//! inspect them, but never reach the HTTP layer as errors.

pub mod gemini;
pub mod prompt;
pub mod provider;

use std::sync::Arc;

use crate::models::CharacterProfile;
use prompt::Tone;
use provider::{ChatMessage, ChatRequest, GenerateRequest, ProviderError, TextProvider};

pub const POST_EMPTY_FALLBACK: &str = "I couldn't generate a post right now.";
pub const POST_ERROR_FALLBACK: &str = "Failed to contact the muse (AI Error).";
pub const CHAT_ERROR_FALLBACK: &str = "*Silence fills the room...* (AI Error)";

/// Outcome of a single provider call.
#[derive(Debug)]
pub enum Generation {
    Text(String),
    /// The call succeeded but produced no text
    Empty,
    Failed(ProviderError),
}

impl Generation {
    fn from_result(result: Result<Option<String>, ProviderError>) -> Self {
        match result {
            Ok(Some(text)) => Generation::Text(text),
            Ok(None) => Generation::Empty,
            Err(e) => Generation::Failed(e),
        }
    }

    /// Displayable post draft.
    pub fn into_post_text(self) -> String {
        match self {
            Generation::Text(text) => text,
            Generation::Empty => POST_EMPTY_FALLBACK.to_string(),
            Generation::Failed(_) => POST_ERROR_FALLBACK.to_string(),
        }
    }

    /// Displayable chat reply. Empty means there is nothing to show.
    pub fn into_reply_text(self) -> String {
        match self {
            Generation::Text(text) => text,
            Generation::Empty => String::new(),
            Generation::Failed(_) => CHAT_ERROR_FALLBACK.to_string(),
        }
    }
}

pub struct GenerativeBridge {
    provider: Arc<dyn TextProvider>,
    model: String,
}

impl GenerativeBridge {
    pub fn new(provider: Arc<dyn TextProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    pub async fn generate_post(&self, topic: &str, tone: &Tone) -> Generation {
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt::post_prompt(topic, tone),
        };

        let result = self.provider.generate(&request).await;
        if let Err(e) = &result {
            tracing::error!(provider = self.provider.name(), "Error generating post: {}", e);
        }
        Generation::from_result(result)
    }

    pub async fn converse(
        &self,
        character: &CharacterProfile,
        history: Vec<ChatMessage>,
        message: &str,
    ) -> Generation {
        let request = ChatRequest {
            model: self.model.clone(),
            system_instruction: prompt::persona_instruction(
                &character.name,
                &character.book,
                &character.personality,
            ),
            history,
            message: message.to_string(),
        };

        let result = self.provider.chat(&request).await;
        if let Err(e) = &result {
            tracing::error!(
                provider = self.provider.name(),
                character = %character.id,
                "Error chatting with character: {}",
                e
            );
        }
        Generation::from_result(result)
    }
}
