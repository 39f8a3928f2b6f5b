use askama::Template;
use axum::extract::State;
use axum::routing::post;
use axum::{Form, Router};
use serde::Deserialize;

use crate::bridge::prompt::Tone;
use crate::bridge::Generation;
use crate::error::{AppError, AppResult};
use crate::routes::home::Html;
use crate::state::AppState;

/// What the composer is pre-filled with.
#[derive(Default)]
pub struct DraftView {
    pub body: String,
    pub topic: String,
    pub ai_generated: bool,
}

pub struct ToneView {
    pub name: String,
    pub selected: bool,
}

impl ToneView {
    pub fn all(selected: &Tone) -> Vec<Self> {
        Tone::PRESETS
            .iter()
            .map(|tone| ToneView {
                name: tone.to_string(),
                selected: tone == selected,
            })
            .collect()
    }
}

#[derive(Template)]
#[template(path = "components/composer.html")]
pub struct ComposerTemplate {
    pub draft: DraftView,
    pub tones: Vec<ToneView>,
}

#[derive(Deserialize)]
pub struct GenerateForm {
    pub topic: String,
    #[serde(default)]
    pub tone: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/compose/generate", post(generate))
}

/// Ask the muse for a draft and hand back a pre-filled composer.
async fn generate(
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> AppResult<Html<ComposerTemplate>> {
    if form.topic.trim().is_empty() {
        return Err(AppError::BadRequest("Topic cannot be empty".into()));
    }

    let tone = Tone::parse(&form.tone);
    let generation = state.bridge.generate_post(&form.topic, &tone).await;
    let ai_generated = matches!(generation, Generation::Text(_));
    tracing::info!(%tone, ai_generated, "Post draft generated");

    Ok(Html(ComposerTemplate {
        draft: DraftView {
            body: generation.into_post_text(),
            topic: form.topic,
            ai_generated,
        },
        tones: ToneView::all(&tone),
    }))
}
