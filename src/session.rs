//! Character chat session state machine.
//!
//! ```text
//! closed --open--> open(idle) --begin_reply--> open(awaiting) --complete_reply--> open(idle)
//!    ^                                                                               |
//!    +------------------------------------close--------------------------------------+
//! ```
//!
//! Each open gets a fresh [`SessionId`]. Replies carry the id they were
//! requested under and are dropped if the session has since closed or been
//! replaced.

use uuid::Uuid;

use crate::bridge::provider::{ChatMessage, Role};
use crate::models::{CharacterProfile, Sender, Turn};

pub type SessionId = Uuid;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("No chat session is open")]
    Closed,

    #[error("Chat session {0} is no longer active")]
    Stale(SessionId),

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Still waiting for the previous reply")]
    ReplyPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingReply,
}

#[derive(Debug, Clone)]
pub struct OpenSession {
    pub id: SessionId,
    pub character: CharacterProfile,
    pub transcript: Vec<Turn>,
    pub phase: Phase,
}

/// Everything needed to ask the bridge for a reply, captured under the lock
/// so the call itself can run without it.
#[derive(Debug, Clone)]
pub struct PendingReply {
    pub session_id: SessionId,
    pub character: CharacterProfile,
    /// Turns before `message`, in provider roles
    pub history: Vec<ChatMessage>,
    pub message: String,
    pub user_turn: Turn,
}

#[derive(Debug, Clone)]
pub enum ReplyOutcome {
    Appended(Turn),
    /// Provider gave no text; the session is idle again with nothing added
    NothingToShow,
    /// The session the reply belonged to is gone
    Discarded,
}

pub fn greeting(character: &CharacterProfile) -> String {
    format!(
        "Connection established. I am {}. Speak your mind.",
        character.name
    )
}

/// The floating chat widget: at most one open session at a time.
#[derive(Debug, Default)]
pub struct ChatWidget {
    active: Option<OpenSession>,
}

impl ChatWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&OpenSession> {
        self.active.as_ref()
    }

    /// Open a session with `character`, replacing any open one. The greeting
    /// is the first turn.
    pub fn open(&mut self, character: CharacterProfile) -> &OpenSession {
        let greeting = Turn::new(Sender::Character, greeting(&character));
        let session = OpenSession {
            id: Uuid::now_v7(),
            character,
            transcript: vec![greeting],
            phase: Phase::Idle,
        };
        if let Some(old) = self.active.as_ref() {
            tracing::debug!(session = %old.id, "Replacing open chat session");
        }
        tracing::info!(session = %session.id, character = %session.character.id, "Chat session opened");
        self.active.insert(session)
    }

    pub fn close(&mut self) -> Option<SessionId> {
        let closed = self.active.take().map(|s| s.id);
        if let Some(id) = closed {
            tracing::info!(session = %id, "Chat session closed");
        }
        closed
    }

    /// Record the viewer's message and move to awaiting-reply.
    ///
    /// Rejected messages leave the transcript untouched.
    pub fn begin_reply(
        &mut self,
        session_id: SessionId,
        message: &str,
    ) -> Result<PendingReply, SessionError> {
        let session = self.active.as_mut().ok_or(SessionError::Closed)?;
        if session.id != session_id {
            return Err(SessionError::Stale(session_id));
        }
        if message.trim().is_empty() {
            return Err(SessionError::EmptyMessage);
        }
        if session.phase == Phase::AwaitingReply {
            return Err(SessionError::ReplyPending);
        }

        let history = session
            .transcript
            .iter()
            .map(|turn| {
                let role = match turn.sender {
                    Sender::Viewer => Role::User,
                    Sender::Character => Role::Model,
                };
                ChatMessage::new(role, turn.text.clone())
            })
            .collect();

        let user_turn = Turn::new(Sender::Viewer, message);
        session.transcript.push(user_turn.clone());
        session.phase = Phase::AwaitingReply;

        Ok(PendingReply {
            session_id,
            character: session.character.clone(),
            history,
            message: message.to_string(),
            user_turn,
        })
    }

    /// Apply a reply to the session it was requested for.
    pub fn complete_reply(&mut self, session_id: SessionId, text: String) -> ReplyOutcome {
        let session = match self.active.as_mut() {
            Some(s) if s.id == session_id => s,
            _ => {
                tracing::debug!(session = %session_id, "Dropping reply for inactive chat session");
                return ReplyOutcome::Discarded;
            }
        };

        session.phase = Phase::Idle;
        if text.is_empty() {
            return ReplyOutcome::NothingToShow;
        }

        let turn = Turn::new(Sender::Character, text);
        session.transcript.push(turn.clone());
        ReplyOutcome::Appended(turn)
    }
}
