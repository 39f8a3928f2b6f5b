//! In-memory feed for the viewing session.
//!
//! Posts are kept newest-first. Nothing is persisted: the feed is rebuilt from
//! the catalog seed on every start.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{Comment, Post, User};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FeedError {
    #[error("Post not found: {0}")]
    PostNotFound(Uuid),
}

/// Everything the composer supplies for a new post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub author: User,
    pub body: String,
    pub image: Option<String>,
    pub ai_generated: bool,
    pub book_tag: Option<String>,
}

/// Like count and the viewer's flag after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    pub like_count: u32,
    pub liked: bool,
}

#[derive(Debug, Default)]
pub struct FeedStore {
    posts: Vec<Post>,
    liked: HashSet<Uuid>,
}

impl FeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, id: Uuid) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn is_liked(&self, id: Uuid) -> bool {
        self.liked.contains(&id)
    }

    /// Prepend a post stamped with a fresh id and the current time.
    ///
    /// The body is expected to be non-empty; handlers check that before
    /// calling. The timestamp never goes backwards relative to the current
    /// head of the feed.
    pub fn submit_post(&mut self, new_post: NewPost) -> Post {
        let now = Utc::now();
        let created_at = match self.posts.first() {
            Some(head) if head.created_at > now => head.created_at,
            _ => now,
        };
        self.insert_at(new_post, created_at, 0).clone()
    }

    pub(crate) fn insert_at(
        &mut self,
        new_post: NewPost,
        created_at: DateTime<Utc>,
        like_count: u32,
    ) -> &mut Post {
        let post = Post {
            id: Uuid::now_v7(),
            author: new_post.author,
            body: new_post.body,
            image: new_post.image,
            like_count,
            comments: Vec::new(),
            created_at,
            ai_generated: new_post.ai_generated,
            book_tag: new_post.book_tag,
        };
        let id = post.id;
        self.posts.insert(0, post);
        tracing::debug!(%id, "Post added to feed");
        &mut self.posts[0]
    }

    /// Flip the viewer's like on a post. A like adds one, an unlike removes one.
    pub fn toggle_like(&mut self, id: Uuid) -> Result<LikeState, FeedError> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(FeedError::PostNotFound(id))?;

        let liked = if self.liked.remove(&id) {
            post.like_count = post.like_count.saturating_sub(1);
            false
        } else {
            self.liked.insert(id);
            post.like_count += 1;
            true
        };

        Ok(LikeState {
            like_count: post.like_count,
            liked,
        })
    }

    pub fn add_comment(
        &mut self,
        post_id: Uuid,
        author: User,
        body: impl Into<String>,
    ) -> Result<Comment, FeedError> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(FeedError::PostNotFound(post_id))?;

        let comment = Comment::new(author, body);
        post.comments.push(comment.clone());
        Ok(comment)
    }
}
