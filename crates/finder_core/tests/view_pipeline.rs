mod common;

use common::{init_logging, loaded_state, post, titles};
use finder_core::{update, Msg, PagerView, Post};
use pretty_assertions::assert_eq;

fn numbered_posts(count: usize) -> Vec<Post> {
    (1..=count)
        .map(|n| post(&format!("P{n}"), "brief", false, "2024-01-10T00:00:00Z"))
        .collect()
}

#[test]
fn featured_posts_move_to_front_stably() {
    init_logging();
    let state = loaded_state(vec![
        post("A", "", false, ""),
        post("B", "", true, ""),
        post("C", "", false, ""),
        post("D", "", true, ""),
    ]);

    assert_eq!(titles(&state), vec!["B", "D", "A", "C"]);
}

#[test]
fn tag_filter_requires_every_tag() {
    init_logging();
    let state = loaded_state(vec![
        post("Both", "About A and B things", false, ""),
        post("OnlyA", "xxa", false, ""),
        post("OnlyB", "xxb", false, ""),
        post("Upper", "ALPHABET", false, ""),
    ]);

    let (state, _) = update(state, Msg::TagsChanged("a,b".to_string()));
    assert_eq!(titles(&state), vec!["Both", "Upper"]);
    assert_eq!(state.view().matched_count, 2);
    assert_eq!(state.view().fetched_count, 4);
}

#[test]
fn date_filter_is_inclusive_by_calendar_day() {
    init_logging();
    let state = loaded_state(vec![
        post("Mid", "", false, "2024-01-15T12:00:00.000Z"),
        post("After", "", false, "2024-02-01T00:00:00.000Z"),
        post("LastDay", "", false, "2024-01-31T18:00:00.000Z"),
        post("FirstDay", "", false, "2024-01-01T00:00:00.000Z"),
        post("Undated", "", false, ""),
    ]);

    let (state, _) = update(state, Msg::DateStartChanged("2024-01-01".to_string()));
    // Only one end set: nothing filtered yet.
    assert_eq!(state.view().matched_count, 5);

    let (state, _) = update(state, Msg::DateEndChanged("2024-01-31".to_string()));
    assert_eq!(titles(&state), vec!["Mid", "LastDay", "FirstDay"]);
    assert!(!state.view().date_range_invalid);
}

#[test]
fn invalid_date_is_flagged_and_ignored() {
    init_logging();
    let state = loaded_state(vec![post("Mid", "", false, "2024-01-15T12:00:00Z")]);

    let (state, _) = update(state, Msg::DateStartChanged("2024-01-01".to_string()));
    let (state, _) = update(state, Msg::DateEndChanged("2024-01-3x".to_string()));
    let view = state.view();

    assert!(view.date_range_invalid);
    assert_eq!(view.matched_count, 1);
}

#[test]
fn twelve_posts_paginate_into_three_pages() {
    init_logging();
    let mut state = loaded_state(numbered_posts(12));
    assert!(state.consume_dirty());

    let view = state.view();
    assert_eq!(titles(&state), vec!["P1", "P2", "P3", "P4", "P5"]);
    assert_eq!(
        view.pager,
        Some(PagerView {
            page: 1,
            total_pages: 3,
            previous_enabled: false,
            next_enabled: true,
        })
    );

    // Previous is disabled on page 1: the click is ignored.
    let (mut state, _) = update(state, Msg::PreviousPageClicked);
    assert_eq!(state.current_page(), 1);
    assert!(!state.consume_dirty());

    let (state, _) = update(state, Msg::NextPageClicked);
    let (state, _) = update(state, Msg::NextPageClicked);
    let view = state.view();
    assert_eq!(titles(&state), vec!["P11", "P12"]);
    let pager = view.pager.expect("pager");
    assert_eq!(pager.label(), "Page 3 of 3");
    assert!(!pager.next_enabled);
    assert!(pager.previous_enabled);

    // Next is disabled on the last page.
    let (state, _) = update(state, Msg::NextPageClicked);
    assert_eq!(state.current_page(), 3);
}

#[test]
fn pager_hidden_for_single_page() {
    init_logging();
    let state = loaded_state(numbered_posts(5));

    assert_eq!(state.view().cards.len(), 5);
    assert_eq!(state.view().pager, None);
}

#[test]
fn editing_filters_returns_to_first_page() {
    init_logging();
    let state = loaded_state(numbered_posts(12));
    let (state, _) = update(state, Msg::NextPageClicked);
    assert_eq!(state.current_page(), 2);

    let (state, _) = update(state, Msg::TagsChanged("brief".to_string()));
    assert_eq!(state.current_page(), 1);
    assert_eq!(titles(&state)[0], "P1");
}

#[test]
fn filtering_down_to_one_page_hides_pager() {
    init_logging();
    let mut posts = numbered_posts(11);
    posts.push(post("Special", "rust wasm", false, "2024-01-10T00:00:00Z"));
    let state = loaded_state(posts);
    assert!(state.view().pager.is_some());

    let (state, _) = update(state, Msg::TagsChanged("wasm".to_string()));
    assert_eq!(state.view().pager, None);
    assert_eq!(titles(&state), vec!["Special"]);
}
