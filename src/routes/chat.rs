use askama::Template;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::catalog;
use crate::error::{AppError, AppResult};
use crate::models::{CharacterProfile, Sender, Turn};
use crate::routes::home::Html;
use crate::session::{OpenSession, Phase, ReplyOutcome, SessionError};
use crate::state::AppState;

// --- View structs ---

pub struct ChatView {
    pub session_id: String,
    pub character: CharacterProfile,
    pub turns: Vec<TurnView>,
    pub awaiting: bool,
}

impl From<&OpenSession> for ChatView {
    fn from(session: &OpenSession) -> Self {
        Self {
            session_id: session.id.to_string(),
            character: session.character.clone(),
            turns: session.transcript.iter().map(TurnView::from).collect(),
            awaiting: session.phase == Phase::AwaitingReply,
        }
    }
}

pub struct TurnView {
    pub id: String,
    pub from_viewer: bool,
    pub label: &'static str,
    pub text: String,
    pub clock: String,
}

impl From<&Turn> for TurnView {
    fn from(turn: &Turn) -> Self {
        let from_viewer = turn.sender == Sender::Viewer;
        Self {
            id: turn.id.to_string(),
            from_viewer,
            label: if from_viewer { "YOU" } else { "ENTITY" },
            text: turn.text.clone(),
            clock: format_clock(&turn.created_at),
        }
    }
}

// --- Templates ---

#[derive(Template)]
#[template(path = "components/chat_window.html")]
pub struct ChatWindowTemplate {
    pub chat: Option<ChatView>,
}

#[derive(Template)]
#[template(path = "components/chat_turns.html")]
pub struct ChatTurnsTemplate {
    pub turns: Vec<TurnView>,
}

// --- Forms ---

#[derive(Deserialize)]
pub struct SendMessageForm {
    pub session_id: String,
    pub message: String,
}

// --- Router ---

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/chat", get(current_window))
        .route("/chat/open/{character_id}", post(open_chat))
        .route("/chat/close", post(close_chat))
        .route("/chat/messages", post(send_message))
}

// --- Handlers ---

async fn current_window(State(state): State<AppState>) -> Html<ChatWindowTemplate> {
    let chat = state.chat.lock().await.active().map(ChatView::from);
    Html(ChatWindowTemplate { chat })
}

async fn open_chat(
    State(state): State<AppState>,
    Path(character_id): Path<String>,
) -> AppResult<Html<ChatWindowTemplate>> {
    let character = catalog::find_character(&state.characters, &character_id)
        .cloned()
        .ok_or(AppError::NotFound)?;

    let mut chat = state.chat.lock().await;
    let session = chat.open(character);

    Ok(Html(ChatWindowTemplate {
        chat: Some(ChatView::from(session)),
    }))
}

async fn close_chat(State(state): State<AppState>) -> &'static str {
    state.chat.lock().await.close();
    ""
}

/// Send the viewer's message and wait for the character's reply.
///
/// The chat lock is released while the bridge call runs, and the call itself
/// runs on its own task. A reply for a session that was closed or replaced in
/// the meantime renders nothing.
async fn send_message(
    State(state): State<AppState>,
    Form(form): Form<SendMessageForm>,
) -> AppResult<Response> {
    let session_id = Uuid::parse_str(&form.session_id)
        .map_err(|_| AppError::BadRequest("Invalid session id".into()))?;

    let pending = match state.chat.lock().await.begin_reply(session_id, &form.message) {
        Ok(pending) => pending,
        Err(SessionError::Closed | SessionError::Stale(_)) => {
            tracing::debug!(session = %session_id, "Message for inactive chat session ignored");
            return Ok("".into_response());
        }
        Err(e) => return Err(e.into()),
    };

    // Detached from the request so the session leaves AwaitingReply even when
    // the client goes away mid-call.
    let task = tokio::spawn({
        let state = state.clone();
        async move {
            let reply = state
                .bridge
                .converse(&pending.character, pending.history, &pending.message)
                .await
                .into_reply_text();
            let outcome = state
                .chat
                .lock()
                .await
                .complete_reply(pending.session_id, reply);
            (pending.user_turn, outcome)
        }
    });
    let (user_turn, outcome) = task
        .await
        .map_err(|e| AppError::Internal(format!("Chat reply task failed: {e}")))?;

    let mut turns = vec![TurnView::from(&user_turn)];
    match outcome {
        ReplyOutcome::Appended(turn) => turns.push(TurnView::from(&turn)),
        ReplyOutcome::NothingToShow => {}
        ReplyOutcome::Discarded => return Ok("".into_response()),
    }

    Ok(Html(ChatTurnsTemplate { turns }).into_response())
}

fn format_clock(dt: &DateTime<Utc>) -> String {
    dt.format("%H:%M").to_string()
}
