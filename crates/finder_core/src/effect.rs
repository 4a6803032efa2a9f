use crate::SearchId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Query the publication for `host` and report back with `search_id`.
    FetchPublication { search_id: SearchId, host: String },
    /// Abandon an in-flight search; its completion will be ignored anyway.
    CancelSearch { search_id: SearchId },
}
