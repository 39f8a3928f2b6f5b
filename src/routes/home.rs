use askama::Template;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::bridge::prompt::Tone;
use crate::models::{CharacterProfile, User};
use crate::routes::chat::ChatView;
use crate::routes::compose::{DraftView, ToneView};
use crate::routes::feed::PostView;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub viewer: User,
    pub posts: Vec<PostView>,
    pub characters: Vec<CharacterProfile>,
    pub draft: DraftView,
    pub tones: Vec<ToneView>,
    pub chat: Option<ChatView>,
}

/// Wrapper to render askama templates as axum responses
pub struct Html<T: Template>(pub T);

impl<T: Template> IntoResponse for Html<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("Template render error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
            }
        }
    }
}

pub async fn index(State(state): State<AppState>) -> Html<HomeTemplate> {
    let posts = PostView::list(&*state.feed.read().await);
    let chat = state.chat.lock().await.active().map(ChatView::from);

    Html(HomeTemplate {
        viewer: state.viewer.clone(),
        posts,
        characters: state.characters.to_vec(),
        draft: DraftView::default(),
        tones: ToneView::all(&Tone::default()),
        chat,
    })
}
