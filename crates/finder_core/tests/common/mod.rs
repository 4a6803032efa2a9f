#![allow(dead_code)]

use std::sync::Once;

use finder_core::{
    parse_published_at, update, AppState, Effect, FetchOutcome, Msg, Post, Publication, SearchId,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(finder_logging::initialize_for_tests);
}

pub fn post(title: &str, brief: &str, featured: bool, published_at: &str) -> Post {
    Post {
        title: title.to_string(),
        brief: brief.to_string(),
        url: format!("https://blog.example.com/{}", title.to_lowercase()),
        featured,
        cover_image: None,
        published_at: parse_published_at(published_at),
    }
}

pub fn publication(posts: Vec<Post>) -> Publication {
    Publication {
        title: "Example Blog".to_string(),
        is_team: false,
        posts,
    }
}

/// Types `host` and presses Search, returning the issued search id.
pub fn submit_host(state: AppState, host: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::HostChanged(host.to_string()));
    update(state, Msg::SearchSubmitted)
}

pub fn fetch_id(effects: &[Effect]) -> SearchId {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchPublication { search_id, .. } => Some(*search_id),
            _ => None,
        })
        .expect("fetch effect")
}

/// Runs a full search that resolves with `posts`.
pub fn loaded_state(posts: Vec<Post>) -> AppState {
    let (state, effects) = submit_host(AppState::new(), "blog.example.com");
    let search_id = fetch_id(&effects);
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            search_id,
            outcome: FetchOutcome::Found(publication(posts)),
        },
    );
    state
}

pub fn titles(state: &AppState) -> Vec<String> {
    state.view().cards.into_iter().map(|card| card.title).collect()
}
