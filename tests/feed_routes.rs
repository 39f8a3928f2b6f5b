//! HTTP tests for the feed, likes, comments and the AI-assisted composer.

mod common;

use axum::http::StatusCode;
use common::{body_string, build_test_app, expect_html, get, network_failure, post_form, ScriptedProvider};
use inkfeed::bridge::provider::ProviderError;

// ---------------------------------------------------------------------------
// Home page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_page_renders_seed_feed_and_characters() {
    let (app, _) = build_test_app(ScriptedProvider::new(|| Ok(None)));
    let body = expect_html(get(&app, "/").await, StatusCode::OK).await;

    assert!(body.contains("Mark Page"));
    assert!(body.contains("Sarah Story"));
    assert!(body.contains("Elizabeth Bennet"));
    assert!(body.contains("Sherlock Holmes"));
    assert!(body.contains("Jay Gatsby"));
    assert!(body.contains("Alice Reader"));

    // Newest seed post comes first
    let mark = body.find("Mark Page").unwrap();
    let sarah = body.find("Sarah Story").unwrap();
    assert!(mark < sarah);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let (app, _) = build_test_app(ScriptedProvider::new(|| Ok(None)));
    let response = get(&app, "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stylesheet_is_served() {
    let (app, _) = build_test_app(ScriptedProvider::new(|| Ok(None)));
    let response = get(&app, "/assets/css/output.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/css"));
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_post_prepends_to_feed() {
    let (app, state) = build_test_app(ScriptedProvider::new(|| Ok(None)));
    let before = state.feed.read().await.posts().len();
    let previous_head = state.feed.read().await.posts()[0].clone();

    let response = post_form(
        &app,
        "/posts",
        "body=Rereading+Dune+this+week&book_tag=Dune&image_url=",
    )
    .await;
    let body = expect_html(response, StatusCode::OK).await;
    assert!(body.contains("Rereading Dune this week"));
    assert!(body.contains("[ Dune ]"));

    let feed = state.feed.read().await;
    assert_eq!(feed.posts().len(), before + 1);
    let head = &feed.posts()[0];
    assert_eq!(head.body, "Rereading Dune this week");
    assert_eq!(head.author.handle, "@alicereads");
    assert_eq!(head.book_tag.as_deref(), Some("Dune"));
    assert_eq!(head.image, None);
    assert!(!head.ai_generated);
    assert_ne!(head.id, previous_head.id);
    assert!(head.created_at >= previous_head.created_at);
}

#[tokio::test]
async fn create_post_marks_ai_origin() {
    let (app, state) = build_test_app(ScriptedProvider::new(|| Ok(None)));
    let response = post_form(&app, "/posts", "body=Generated+take&ai_generated=true").await;
    let body = expect_html(response, StatusCode::OK).await;
    assert!(body.contains("AI Generated Artifact"));
    assert!(state.feed.read().await.posts()[0].ai_generated);
}

#[tokio::test]
async fn create_post_rejects_blank_body() {
    let (app, state) = build_test_app(ScriptedProvider::new(|| Ok(None)));
    let before = state.feed.read().await.posts().len();

    let response = post_form(&app, "/posts", "body=+++").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.feed.read().await.posts().len(), before);
}

#[tokio::test]
async fn post_body_is_escaped() {
    let (app, _) = build_test_app(ScriptedProvider::new(|| Ok(None)));
    let response = post_form(&app, "/posts", "body=%3Cscript%3Ealert(1)%3C%2Fscript%3E").await;
    let body = expect_html(response, StatusCode::OK).await;
    assert!(!body.contains("<script>"));
    assert!(body.contains("&lt;script&gt;"));
}

// ---------------------------------------------------------------------------
// Likes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn like_toggles_count_by_one() {
    let (app, state) = build_test_app(ScriptedProvider::new(|| Ok(None)));
    let post = state.feed.read().await.posts()[0].clone();
    let uri = format!("/posts/{}/like", post.id);

    let body = expect_html(post_form(&app, &uri, "").await, StatusCode::OK).await;
    assert!(body.contains(&format!("{}", post.like_count + 1)));
    assert!(body.contains("liked"));
    assert_eq!(
        state.feed.read().await.get(post.id).unwrap().like_count,
        post.like_count + 1
    );

    let body = expect_html(post_form(&app, &uri, "").await, StatusCode::OK).await;
    assert!(body.contains(&format!("{}", post.like_count)));
    assert!(!body.contains("liked"));
    assert_eq!(
        state.feed.read().await.get(post.id).unwrap().like_count,
        post.like_count
    );
}

#[tokio::test]
async fn like_unknown_post_returns_404() {
    let (app, _) = build_test_app(ScriptedProvider::new(|| Ok(None)));

    let response = post_form(&app, "/posts/not-a-uuid/like", "").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let uri = format!("/posts/{}/like", uuid::Uuid::now_v7());
    let response = post_form(&app, &uri, "").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn comments_list_and_append() {
    let (app, state) = build_test_app(ScriptedProvider::new(|| Ok(None)));
    let post = state.feed.read().await.posts()[0].clone();
    let uri = format!("/posts/{}/comments", post.id);

    let listed = expect_html(get(&app, &uri).await, StatusCode::OK).await;
    assert!(listed.contains("Loved it!"));

    let created = expect_html(
        post_form(&app, &uri, "body=Same+here").await,
        StatusCode::OK,
    )
    .await;
    assert!(created.contains("Same here"));

    let feed = state.feed.read().await;
    let comments = &feed.get(post.id).unwrap().comments;
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[1].body, "Same here");
}

#[tokio::test]
async fn blank_comment_is_rejected() {
    let (app, state) = build_test_app(ScriptedProvider::new(|| Ok(None)));
    let post = state.feed.read().await.posts()[0].clone();

    let uri = format!("/posts/{}/comments", post.id);
    let response = post_form(&app, &uri, "body=").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        state.feed.read().await.get(post.id).unwrap().comments.len(),
        post.comments.len()
    );
}

// ---------------------------------------------------------------------------
// AI-assisted composer
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generate_fills_composer_with_draft() {
    let provider = ScriptedProvider::new(|| Ok(Some("Is Arrakis the best setting ever written?".into())));
    let (app, _) = build_test_app(provider.clone());

    let response = post_form(&app, "/compose/generate", "topic=Dune&tone=Critical").await;
    let body = expect_html(response, StatusCode::OK).await;
    assert!(body.contains("Is Arrakis the best setting ever written?"));
    assert!(body.contains("name=\"ai_generated\" value=\"true\""));

    let prompts = provider.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("\"Dune\""));
    assert!(prompts[0].contains("The tone should be Critical."));
    assert!(prompts[0].contains("Do not use hashtags."));
}

#[tokio::test]
async fn generate_without_tone_uses_default() {
    let provider = ScriptedProvider::new(|| Ok(Some("draft".into())));
    let (app, _) = build_test_app(provider.clone());

    let response = post_form(&app, "/compose/generate", "topic=Dune").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(provider.prompts.lock().unwrap()[0].contains("The tone should be witty."));
}

#[tokio::test]
async fn generate_failure_shows_muse_error() {
    let provider = ScriptedProvider::new(network_failure);
    let (app, _) = build_test_app(provider.clone());

    let response = post_form(&app, "/compose/generate", "topic=Dune&tone=Funny").await;
    let body = expect_html(response, StatusCode::OK).await;
    assert!(body.contains("Failed to contact the muse (AI Error)."));
    assert!(!body.contains("name=\"ai_generated\""));
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn generate_missing_credential_shows_muse_error() {
    let provider = ScriptedProvider::new(|| Err(ProviderError::MissingCredential));
    let (app, _) = build_test_app(provider);

    let response = post_form(&app, "/compose/generate", "topic=Dune&tone=Poetic").await;
    let body = body_string(response).await;
    assert!(body.contains("Failed to contact the muse (AI Error)."));
}

#[tokio::test]
async fn generate_empty_shows_placeholder() {
    let (app, _) = build_test_app(ScriptedProvider::new(|| Ok(None)));

    let response = post_form(&app, "/compose/generate", "topic=Dune&tone=Excited").await;
    let body = expect_html(response, StatusCode::OK).await;
    assert!(body.contains("generate a post right now."));
}

#[tokio::test]
async fn generate_rejects_blank_topic() {
    let provider = ScriptedProvider::new(|| Ok(Some("draft".into())));
    let (app, _) = build_test_app(provider.clone());

    let response = post_form(&app, "/compose/generate", "topic=++&tone=Funny").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn posting_ai_draft_resets_composer() {
    let provider = ScriptedProvider::new(|| Ok(Some("The spice must flow.".into())));
    let (app, state) = build_test_app(provider);

    let draft = post_form(&app, "/compose/generate", "topic=Dune&tone=Poetic").await;
    let draft = expect_html(draft, StatusCode::OK).await;
    assert!(draft.contains("name=\"ai_generated\" value=\"true\""));

    let response = post_form(
        &app,
        "/posts",
        "body=The+spice+must+flow.&ai_generated=true",
    )
    .await;
    let body = expect_html(response, StatusCode::OK).await;
    assert!(body.contains("AI Generated Artifact"));
    assert!(body.contains("id=\"composer\" hx-swap-oob=\"innerHTML\""));
    assert_eq!(body.matches("The spice must flow.").count(), 1);
    assert!(!body.contains("name=\"ai_generated\""));
    assert!(state.feed.read().await.posts()[0].ai_generated);

    let response = post_form(&app, "/posts", "body=My+own+words").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!state.feed.read().await.posts()[0].ai_generated);
}
