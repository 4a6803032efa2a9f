//! Finder engine: GraphQL query construction, HTTP fetching and the
//! background runtime that executes searches.
mod engine;
mod fetch;
mod query;
mod types;
mod wire;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, PublicationFetcher, ReqwestFetcher, DEFAULT_ENDPOINT};
pub use query::{build_publication_query, GraphQlRequest, QueryError, MAX_POST_COUNT};
pub use types::{EngineEvent, FailureKind, FetchError, FetchedPost, PublicationData, SearchId};
