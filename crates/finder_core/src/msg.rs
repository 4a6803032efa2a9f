use crate::{Publication, SearchId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the host input.
    HostChanged(String),
    /// User edited the comma-separated tag filter.
    TagsChanged(String),
    /// User edited the start of the date range (`YYYY-MM-DD`).
    DateStartChanged(String),
    /// User edited the end of the date range (`YYYY-MM-DD`).
    DateEndChanged(String),
    /// User pressed Search.
    SearchSubmitted,
    /// User clicked Next.
    NextPageClicked,
    /// User clicked Previous.
    PreviousPageClicked,
    /// Engine finished a search.
    FetchCompleted {
        search_id: SearchId,
        outcome: FetchOutcome,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// What the engine reported for one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Found(Publication),
    /// The API answered but had no publication for the host.
    NotFound,
    /// Transport or decode failure; `reason` is for diagnostics only.
    Failed { reason: String },
}
