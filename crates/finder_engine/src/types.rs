use std::fmt;

pub type SearchId = u64;

/// A post as delivered by the API, before any client-side interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchedPost {
    pub title: String,
    pub brief: String,
    pub url: String,
    pub featured: bool,
    pub cover_image_url: Option<String>,
    /// Raw `publishedAt` string; parsing is left to the caller.
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PublicationData {
    pub title: String,
    pub is_team: bool,
    pub posts: Vec<FetchedPost>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// `Ok(None)` means the API knows no publication for the host.
    SearchCompleted {
        search_id: SearchId,
        result: Result<Option<PublicationData>, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    InvalidQuery,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::InvalidQuery => write!(f, "invalid query"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
