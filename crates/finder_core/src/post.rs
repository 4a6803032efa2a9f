use chrono::{DateTime, NaiveDate, Utc};

/// One blog post as the core sees it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Post {
    pub title: String,
    pub brief: String,
    pub url: String,
    pub featured: bool,
    pub cover_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Post {
    /// UTC calendar date of publication, if known.
    pub fn published_date(&self) -> Option<NaiveDate> {
        self.published_at.map(|ts| ts.date_naive())
    }
}

/// Publication metadata returned alongside the posts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Publication {
    pub title: String,
    pub is_team: bool,
    pub posts: Vec<Post>,
}

/// Parses an API timestamp such as `2024-01-15T10:00:00.000Z`.
///
/// Accepts any RFC 3339 offset and falls back to a bare `YYYY-MM-DD` date
/// (taken as midnight UTC). Anything else yields `None`.
pub fn parse_published_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
