#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tokio::sync::Notify;
use tower::ServiceExt;

use inkfeed::bridge::provider::{ChatRequest, GenerateRequest, ProviderError, TextProvider};
use inkfeed::config::Config;
use inkfeed::routes;
use inkfeed::state::AppState;

pub type Reply = fn() -> Result<Option<String>, ProviderError>;

/// Holds a provider call open until the test releases it.
#[derive(Default)]
pub struct Gate {
    pub entered: Notify,
    pub release: Notify,
}

/// Provider with a fixed reply that records every request it sees.
pub struct ScriptedProvider {
    reply: Reply,
    gate: Option<Arc<Gate>>,
    pub calls: AtomicUsize,
    pub prompts: Mutex<Vec<String>>,
    pub chats: Mutex<Vec<ChatRequest>>,
}

impl ScriptedProvider {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self::build(reply, None))
    }

    pub fn gated(reply: Reply, gate: Arc<Gate>) -> Arc<Self> {
        Arc::new(Self::build(reply, Some(gate)))
    }

    fn build(reply: Reply, gate: Option<Arc<Gate>>) -> Self {
        Self {
            reply,
            gate,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
            chats: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn respond(&self) -> Result<Option<String>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
        (self.reply)()
    }
}

#[async_trait]
impl TextProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "Scripted"
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<Option<String>, ProviderError> {
        self.prompts.lock().unwrap().push(request.prompt.clone());
        self.respond().await
    }

    async fn chat(&self, request: &ChatRequest) -> Result<Option<String>, ProviderError> {
        self.chats.lock().unwrap().push(request.clone());
        self.respond().await
    }
}

pub fn network_failure() -> Result<Option<String>, ProviderError> {
    Err(ProviderError::Api {
        status: 503,
        message: "The model is overloaded.".to_string(),
    })
}

pub fn build_test_app(provider: Arc<ScriptedProvider>) -> (Router, AppState) {
    let state = AppState::new(&Config::default(), provider);
    (routes::app(state.clone()), state)
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_form(app: &Router, uri: &str, form: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn expect_html(response: Response, status: StatusCode) -> String {
    assert_eq!(response.status(), status);
    body_string(response).await
}
