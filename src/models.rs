use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A member of the network. The local viewer is one of these too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub handle: String,
    pub avatar: String,
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: Uuid,
    pub author: User,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: User, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            author,
            body: body.into(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Post {
    pub id: Uuid,
    pub author: User,
    pub body: String,
    pub image: Option<String>,
    pub like_count: u32,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub ai_generated: bool,
    pub book_tag: Option<String>,
}

/// A literary character the viewer can chat with. Catalog entries never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterProfile {
    pub id: String,
    pub name: String,
    pub book: String,
    pub avatar: String,
    pub personality: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Viewer,
    Character,
}

/// One message in a chat transcript.
#[derive(Debug, Clone)]
pub struct Turn {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            sender,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}
