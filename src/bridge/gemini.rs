//! Gemini Provider Implementation
//!
//! Talks to the Gemini REST API:
//! - `POST /v1beta/models/{model}:generateContent` - single and multi-turn generation
//!
//! Chat is stateless on the wire: the whole history is replayed in `contents`
//! and the persona goes in `systemInstruction`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::provider::{
    ChatMessage, ChatRequest, GenerateRequest, ProviderError, Role, TextProvider,
};
use crate::config::ProviderConfig;

/// Gemini REST client
#[derive(Clone)]
pub struct GeminiProvider {
    base_url: String,
    /// Resolved at startup; `None` fails each call before any network I/O
    api_key: Option<String>,
    http_client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(config.base_url.clone(), config.api_key.clone())
    }

    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(ProviderError::MissingCredential)
    }

    async fn generate_content(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<Option<String>, ProviderError> {
        let api_key = self.api_key()?;

        let response = self
            .http_client
            .post(self.generate_url(model))
            .header("x-goog-api-key", api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&text).map_err(|e| ProviderError::Decode(e.to_string()))?;
        Ok(parsed.text())
    }
}

#[async_trait]
impl TextProvider for GeminiProvider {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<Option<String>, ProviderError> {
        let body = GenerateContentRequest {
            contents: vec![Content::user(&request.prompt)],
            system_instruction: None,
        };
        self.generate_content(&request.model, &body).await
    }

    async fn chat(&self, request: &ChatRequest) -> Result<Option<String>, ProviderError> {
        self.generate_content(&request.model, &chat_body(request))
            .await
    }
}

fn chat_body(request: &ChatRequest) -> GenerateContentRequest {
    let mut contents: Vec<Content> = request.history.iter().map(Content::from).collect();
    contents.push(Content::user(&request.message));

    GenerateContentRequest {
        contents,
        system_instruction: Some(Content {
            role: None,
            parts: vec![Part::text(&request.system_instruction)],
        }),
    }
}

/// Pull `error.message` out of an error body, falling back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

// --- Wire types ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<Role>,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn user(text: &str) -> Self {
        Self {
            role: Some(Role::User),
            parts: vec![Part::text(text)],
        }
    }
}

impl From<&ChatMessage> for Content {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: Some(message.role),
            parts: vec![Part::text(&message.text)],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl Part {
    fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate. Empty text counts as none.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}
