use askama::Template;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Form, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::bridge::prompt::Tone;
use crate::error::{AppError, AppResult};
use crate::feed::{FeedStore, NewPost};
use crate::models::{Comment, Post, User};
use crate::routes::compose::{DraftView, ToneView};
use crate::routes::home::Html;
use crate::state::AppState;

// --- View structs ---

pub struct PostView {
    pub id: String,
    pub author: User,
    pub body: String,
    pub image: Option<String>,
    pub like_count: u32,
    pub liked: bool,
    pub comments: Vec<CommentView>,
    pub comment_count: usize,
    pub created_at: String,
    pub clock: String,
    pub ai_generated: bool,
    pub book_tag: Option<String>,
}

impl PostView {
    pub fn new(post: &Post, liked: bool) -> Self {
        Self {
            id: post.id.to_string(),
            author: post.author.clone(),
            body: post.body.clone(),
            image: post.image.clone(),
            like_count: post.like_count,
            liked,
            comments: post.comments.iter().map(CommentView::from).collect(),
            comment_count: post.comments.len(),
            created_at: format_relative_time(&post.created_at),
            clock: post.created_at.format("%H:%M").to_string(),
            ai_generated: post.ai_generated,
            book_tag: post.book_tag.clone(),
        }
    }

    pub fn list(feed: &FeedStore) -> Vec<Self> {
        feed.posts()
            .iter()
            .map(|p| Self::new(p, feed.is_liked(p.id)))
            .collect()
    }
}

pub struct CommentView {
    pub id: String,
    pub author: User,
    pub body: String,
    pub created_at: String,
}

impl From<&Comment> for CommentView {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            author: comment.author.clone(),
            body: comment.body.clone(),
            created_at: format_relative_time(&comment.created_at),
        }
    }
}

// --- Templates ---

/// A new post card plus a blank composer swapped in out of band.
#[derive(Template)]
#[template(path = "components/post_created.html")]
pub struct PostCreatedTemplate {
    pub post: PostView,
    pub draft: DraftView,
    pub tones: Vec<ToneView>,
}

#[derive(Template)]
#[template(path = "components/like_button.html")]
pub struct LikeButtonTemplate {
    pub post: PostView,
}

#[derive(Template)]
#[template(path = "components/comment_list.html")]
pub struct CommentListTemplate {
    pub post: PostView,
}

#[derive(Template)]
#[template(path = "components/comment.html")]
pub struct CommentTemplate {
    pub comment: CommentView,
}

// --- Forms ---

#[derive(Deserialize)]
pub struct CreatePostForm {
    pub body: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub book_tag: Option<String>,
    #[serde(default)]
    pub ai_generated: bool,
}

#[derive(Deserialize)]
pub struct CreateCommentForm {
    pub body: String,
}

// --- Router ---

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/posts", post(create_post))
        .route("/posts/{id}/like", post(toggle_like))
        .route(
            "/posts/{id}/comments",
            get(list_comments).post(create_comment),
        )
}

// --- Handlers ---

async fn create_post(
    State(state): State<AppState>,
    Form(form): Form<CreatePostForm>,
) -> AppResult<Html<PostCreatedTemplate>> {
    if form.body.trim().is_empty() {
        return Err(AppError::BadRequest("Post body cannot be empty".into()));
    }

    let new_post = NewPost {
        author: state.viewer.clone(),
        body: form.body,
        image: non_empty(form.image_url),
        ai_generated: form.ai_generated,
        book_tag: non_empty(form.book_tag),
    };

    let post = state.feed.write().await.submit_post(new_post);
    tracing::info!(post = %post.id, ai_generated = post.ai_generated, "Post created");

    Ok(Html(PostCreatedTemplate {
        post: PostView::new(&post, false),
        draft: DraftView::default(),
        tones: ToneView::all(&Tone::default()),
    }))
}

async fn toggle_like(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<LikeButtonTemplate>> {
    let id = parse_post_id(&id)?;

    let mut feed = state.feed.write().await;
    let like = feed.toggle_like(id)?;
    let post = feed.get(id).ok_or(AppError::NotFound)?;

    Ok(Html(LikeButtonTemplate {
        post: PostView::new(post, like.liked),
    }))
}

async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<CommentListTemplate>> {
    let id = parse_post_id(&id)?;

    let feed = state.feed.read().await;
    let post = feed.get(id).ok_or(AppError::NotFound)?;

    Ok(Html(CommentListTemplate {
        post: PostView::new(post, feed.is_liked(id)),
    }))
}

async fn create_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<CreateCommentForm>,
) -> AppResult<Html<CommentTemplate>> {
    let id = parse_post_id(&id)?;
    let body = form.body.trim().to_string();
    if body.is_empty() {
        return Err(AppError::BadRequest("Comment cannot be empty".into()));
    }

    let comment = state
        .feed
        .write()
        .await
        .add_comment(id, state.viewer.clone(), body)?;

    Ok(Html(CommentTemplate {
        comment: CommentView::from(&comment),
    }))
}

// --- Helpers ---

fn parse_post_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// --- Time formatting ---

pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let diff = Utc::now().signed_duration_since(*dt);

    let seconds = diff.num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = diff.num_minutes();
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }

    let hours = diff.num_hours();
    if hours < 24 {
        return format!("{}h ago", hours);
    }

    let days = diff.num_days();
    if days < 7 {
        return format!("{}d ago", days);
    }

    dt.format("%b %-d, %Y").to_string()
}
