use crate::state::normalize_host;
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::HostChanged(text) => {
            state.set_host_input(text);
            Vec::new()
        }
        Msg::TagsChanged(text) => {
            state.set_tags_input(text);
            Vec::new()
        }
        Msg::DateStartChanged(text) => {
            state.set_date_start_input(text);
            Vec::new()
        }
        Msg::DateEndChanged(text) => {
            state.set_date_end_input(text);
            Vec::new()
        }
        Msg::SearchSubmitted => match normalize_host(state.host_input()) {
            None => match state.clear_search() {
                Some(search_id) => vec![Effect::CancelSearch { search_id }],
                None => Vec::new(),
            },
            Some(host) => {
                let (search_id, superseded) = state.begin_search();
                let mut effects = Vec::with_capacity(2);
                if let Some(previous) = superseded {
                    effects.push(Effect::CancelSearch {
                        search_id: previous,
                    });
                }
                effects.push(Effect::FetchPublication { search_id, host });
                effects
            }
        },
        Msg::NextPageClicked => {
            state.step_page(true);
            Vec::new()
        }
        Msg::PreviousPageClicked => {
            state.step_page(false);
            Vec::new()
        }
        Msg::FetchCompleted { search_id, outcome } => {
            state.complete_search(search_id, outcome);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
