pub mod assets;
pub mod chat;
pub mod compose;
pub mod feed;
pub mod home;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// The full application: pages, fragments and assets.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/assets/{*path}", get(assets::serve))
        .merge(feed::router())
        .merge(compose::router())
        .merge(chat::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
