//! Finder core: pure state machine, filtering and view-model helpers.
mod effect;
mod filter;
mod msg;
mod page;
mod post;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::{filter_and_sort, DateRange, DateRangeInput, TagFilter};
pub use msg::{FetchOutcome, Msg};
pub use page::{page_slice, total_pages, PAGE_SIZE};
pub use post::{parse_published_at, Post, Publication};
pub use state::{normalize_host, AppState, SearchId, SearchStatus};
pub use update::update;
pub use view_model::{
    truncate_brief, AppViewModel, PagerView, PostCardView, BRIEF_PREVIEW_CHARS,
    FETCH_ERROR_MESSAGE, NOT_FOUND_MESSAGE, PLACEHOLDER_IMAGE_URL,
};
