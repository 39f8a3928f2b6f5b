use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::bridge::provider::TextProvider;
use crate::bridge::GenerativeBridge;
use crate::catalog;
use crate::config::Config;
use crate::feed::FeedStore;
use crate::models::{CharacterProfile, User};
use crate::session::ChatWidget;

#[derive(Clone)]
pub struct AppState {
    pub viewer: User,
    pub characters: Arc<Vec<CharacterProfile>>,
    pub feed: Arc<RwLock<FeedStore>>,
    pub chat: Arc<Mutex<ChatWidget>>,
    pub bridge: Arc<GenerativeBridge>,
}

impl AppState {
    /// Fresh session state: seeded feed, closed chat.
    pub fn new(config: &Config, provider: Arc<dyn TextProvider>) -> Self {
        let viewer = catalog::viewer(&config.viewer);
        let feed = catalog::seed_feed(&viewer);
        let bridge = GenerativeBridge::new(provider, config.provider.model.clone());

        Self {
            viewer,
            characters: Arc::new(catalog::characters()),
            feed: Arc::new(RwLock::new(feed)),
            chat: Arc::new(Mutex::new(ChatWidget::new())),
            bridge: Arc::new(bridge),
        }
    }
}
