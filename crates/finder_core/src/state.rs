use url::Url;

use crate::filter::{filter_and_sort, DateRange, DateRangeInput, TagFilter};
use crate::page::{page_slice, total_pages, PAGE_SIZE};
use crate::view_model::{
    AppViewModel, PagerView, PostCardView, FETCH_ERROR_MESSAGE, NOT_FOUND_MESSAGE,
};
use crate::{FetchOutcome, Post, Publication};

pub type SearchId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Searching,
    Loaded,
    NotFound,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    host_input: String,
    tags_input: String,
    date_start_input: String,
    date_end_input: String,
    tag_filter: TagFilter,
    date_range: DateRange,
    date_range_invalid: bool,
    current_page: usize,
    searched: bool,
    status: SearchStatus,
    publication: Option<Publication>,
    last_search_id: SearchId,
    in_flight: Option<SearchId>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            host_input: String::new(),
            tags_input: String::new(),
            date_start_input: String::new(),
            date_end_input: String::new(),
            tag_filter: TagFilter::default(),
            date_range: DateRange::default(),
            date_range_invalid: false,
            current_page: 1,
            searched: false,
            status: SearchStatus::Idle,
            publication: None,
            last_search_id: 0,
            in_flight: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn in_flight(&self) -> Option<SearchId> {
        self.in_flight
    }

    pub fn view(&self) -> AppViewModel {
        let posts = self.visible_posts();
        let matched_count = posts.len();
        let cards = page_slice(&posts, self.current_page)
            .iter()
            .map(|post| PostCardView::from_post(post))
            .collect();

        let pager = (self.searched && matched_count > PAGE_SIZE).then(|| {
            let total = total_pages(matched_count);
            PagerView {
                page: self.current_page,
                total_pages: total,
                previous_enabled: self.current_page > 1,
                next_enabled: self.current_page < total,
            }
        });

        let error = match self.status {
            SearchStatus::NotFound => Some(NOT_FOUND_MESSAGE.to_string()),
            SearchStatus::Failed => Some(FETCH_ERROR_MESSAGE.to_string()),
            _ => None,
        };

        AppViewModel {
            host_input: self.host_input.clone(),
            tags_input: self.tags_input.clone(),
            date_start_input: self.date_start_input.clone(),
            date_end_input: self.date_end_input.clone(),
            show_filters: self.searched,
            searching: self.in_flight.is_some(),
            error,
            publication_title: self.publication.as_ref().map(|p| p.title.clone()),
            fetched_count: self.publication.as_ref().map_or(0, |p| p.posts.len()),
            matched_count,
            cards,
            pager,
            date_range_invalid: self.date_range_invalid,
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn host_input(&self) -> &str {
        &self.host_input
    }

    pub(crate) fn set_host_input(&mut self, text: String) {
        self.host_input = text;
        if self.host_input.trim().is_empty()
            && matches!(self.status, SearchStatus::NotFound | SearchStatus::Failed)
        {
            self.status = SearchStatus::Idle;
        }
        self.mark_dirty();
    }

    pub(crate) fn set_tags_input(&mut self, text: String) {
        self.tag_filter = TagFilter::parse(&text);
        self.tags_input = text;
        self.current_page = 1;
        self.mark_dirty();
    }

    pub(crate) fn set_date_start_input(&mut self, text: String) {
        self.date_start_input = text;
        self.refresh_date_range();
    }

    pub(crate) fn set_date_end_input(&mut self, text: String) {
        self.date_end_input = text;
        self.refresh_date_range();
    }

    fn refresh_date_range(&mut self) {
        match DateRange::parse(&self.date_start_input, &self.date_end_input) {
            DateRangeInput::Valid(range) => {
                self.date_range = range;
                self.date_range_invalid = false;
            }
            DateRangeInput::Unset => {
                self.date_range = DateRange::default();
                self.date_range_invalid = false;
            }
            DateRangeInput::Invalid => {
                self.date_range = DateRange::default();
                self.date_range_invalid = true;
            }
        }
        self.current_page = 1;
        self.mark_dirty();
    }

    /// Drops results and error after an empty-host submit.
    ///
    /// Returns the search that was in flight, if any.
    pub(crate) fn clear_search(&mut self) -> Option<SearchId> {
        self.publication = None;
        self.status = SearchStatus::Idle;
        self.searched = false;
        self.current_page = 1;
        self.mark_dirty();
        self.in_flight.take()
    }

    /// Issues a new search id. Returns `(new_id, superseded_id)`.
    pub(crate) fn begin_search(&mut self) -> (SearchId, Option<SearchId>) {
        self.last_search_id += 1;
        let superseded = self.in_flight.replace(self.last_search_id);
        self.status = SearchStatus::Searching;
        self.current_page = 1;
        self.mark_dirty();
        (self.last_search_id, superseded)
    }

    /// Applies a completion. Completions for anything but the in-flight
    /// search are dropped and `false` is returned.
    pub(crate) fn complete_search(&mut self, search_id: SearchId, outcome: FetchOutcome) -> bool {
        if self.in_flight != Some(search_id) {
            return false;
        }
        self.in_flight = None;
        self.searched = true;
        self.current_page = 1;
        match outcome {
            FetchOutcome::Found(publication) => {
                self.publication = Some(publication);
                self.status = SearchStatus::Loaded;
            }
            FetchOutcome::NotFound => {
                self.publication = None;
                self.status = SearchStatus::NotFound;
            }
            FetchOutcome::Failed { .. } => {
                self.publication = None;
                self.status = SearchStatus::Failed;
            }
        }
        self.mark_dirty();
        true
    }

    /// Moves one page if the target exists. Returns whether it moved.
    pub(crate) fn step_page(&mut self, forward: bool) -> bool {
        let total = total_pages(self.visible_posts().len());
        let target = if forward {
            self.current_page + 1
        } else {
            self.current_page.saturating_sub(1)
        };
        if target == 0 || target > total {
            return false;
        }
        self.current_page = target;
        self.mark_dirty();
        true
    }

    fn visible_posts(&self) -> Vec<&Post> {
        match &self.publication {
            Some(publication) => {
                filter_and_sort(&publication.posts, &self.tag_filter, &self.date_range)
            }
            None => Vec::new(),
        }
    }
}

/// Turns user input into the host the API expects.
///
/// Whitespace is trimmed and a trailing `/` dropped. A pasted URL with a
/// scheme is reduced to its host component. Blank input yields `None`.
pub fn normalize_host(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.contains("://") {
        if let Some(host) = Url::parse(trimmed)
            .ok()
            .and_then(|url| url.host_str().map(str::to_ascii_lowercase))
        {
            return Some(host);
        }
    }
    let host = trimmed.trim_end_matches('/');
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}
