// Static mock data: the characters the viewer can chat with and the posts
// the feed starts with.

use chrono::{Duration, Utc};

use crate::config::ViewerConfig;
use crate::feed::{FeedStore, NewPost};
use crate::models::{CharacterProfile, Comment, User};

pub fn viewer(config: &ViewerConfig) -> User {
    User {
        id: "u1".to_string(),
        name: config.name.clone(),
        handle: config.handle.clone(),
        avatar: config.avatar.clone(),
    }
}

pub fn characters() -> Vec<CharacterProfile> {
    vec![
        CharacterProfile {
            id: "c1".to_string(),
            name: "Elizabeth Bennet".to_string(),
            book: "Pride and Prejudice".to_string(),
            avatar: "https://picsum.photos/id/338/100/100".to_string(),
            personality: "Witty, intelligent, independent, and slightly prejudiced.".to_string(),
        },
        CharacterProfile {
            id: "c2".to_string(),
            name: "Sherlock Holmes".to_string(),
            book: "Sherlock Holmes".to_string(),
            avatar: "https://picsum.photos/id/433/100/100".to_string(),
            personality:
                "Highly analytical, observant, logical, socially detached, and arrogant."
                    .to_string(),
        },
        CharacterProfile {
            id: "c3".to_string(),
            name: "Jay Gatsby".to_string(),
            book: "The Great Gatsby".to_string(),
            avatar: "https://picsum.photos/id/447/100/100".to_string(),
            personality: "Optimistic, obsessive, charismatic, mysterious, and wealthy.".to_string(),
        },
    ]
}

pub fn find_character<'a>(
    characters: &'a [CharacterProfile],
    id: &str,
) -> Option<&'a CharacterProfile> {
    characters.iter().find(|c| c.id == id)
}

/// Build the starting feed. Older posts are submitted first so the newest
/// one ends up on top.
pub fn seed_feed(viewer: &User) -> FeedStore {
    let mut feed = FeedStore::new();
    let now = Utc::now();

    let sarah = User {
        id: "u3".to_string(),
        name: "Sarah Story".to_string(),
        handle: "@sarahstory".to_string(),
        avatar: "https://picsum.photos/id/129/150/150".to_string(),
    };
    feed.insert_at(
        NewPost {
            author: sarah,
            body: "Can we talk about how good the classics are? Sometimes you just need to revisit 19th-century England.".to_string(),
            image: Some("https://picsum.photos/id/24/800/400".to_string()),
            ai_generated: false,
            book_tag: None,
        },
        now - Duration::hours(2),
        128,
    );

    let mark = User {
        id: "u2".to_string(),
        name: "Mark Page".to_string(),
        handle: "@markpage".to_string(),
        avatar: "https://picsum.photos/id/91/150/150".to_string(),
    };
    let midnight_library = feed.insert_at(
        NewPost {
            author: mark,
            body: "Just finished \"The Midnight Library\". What an incredible journey through possible lives! Has anyone else read it? The concept of the rootless existence really struck a chord with me.".to_string(),
            image: None,
            ai_generated: false,
            book_tag: Some("The Midnight Library".to_string()),
        },
        now - Duration::hours(1),
        42,
    );
    midnight_library
        .comments
        .push(Comment::new(viewer.clone(), "Loved it!"));

    feed
}
