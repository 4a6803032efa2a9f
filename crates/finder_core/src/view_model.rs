use crate::Post;

pub const NOT_FOUND_MESSAGE: &str = "No publication found for this host. Please check the host.";
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching blogs. Please check the host and try again.";

/// Shown in place of a missing cover image.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://i.seadn.io/gae/OGpebYaykwlc8Tbk-oGxtxuv8HysLYKqw-FurtYql2UBd_q_-ENAwDY82PkbNB68aTkCINn6tOhpA8pF5SAewC2auZ_44Q77PcOo870?auto=format&dpr=1&w=1000";

/// Roughly three lines of a card.
pub const BRIEF_PREVIEW_CHARS: usize = 180;
const ELLIPSIS: char = '…';

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub host_input: String,
    pub tags_input: String,
    pub date_start_input: String,
    pub date_end_input: String,
    /// Tag and date inputs appear once a search has completed.
    pub show_filters: bool,
    pub searching: bool,
    pub error: Option<String>,
    pub publication_title: Option<String>,
    pub fetched_count: usize,
    pub matched_count: usize,
    pub cards: Vec<PostCardView>,
    pub pager: Option<PagerView>,
    pub date_range_invalid: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCardView {
    pub title: String,
    pub brief: String,
    pub url: String,
    pub featured: bool,
    pub image_url: String,
    pub has_cover: bool,
}

impl PostCardView {
    pub fn from_post(post: &Post) -> Self {
        let (image_url, has_cover) = match post.cover_image.as_deref() {
            Some(url) if !url.trim().is_empty() => (url.to_string(), true),
            _ => (PLACEHOLDER_IMAGE_URL.to_string(), false),
        };
        Self {
            title: post.title.clone(),
            brief: truncate_brief(&post.brief, BRIEF_PREVIEW_CHARS),
            url: post.url.clone(),
            featured: post.featured,
            image_url,
            has_cover,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerView {
    pub page: usize,
    pub total_pages: usize,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl PagerView {
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

/// Cuts `text` to at most `max_chars` characters, marking the cut with `…`.
pub fn truncate_brief(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text
        .chars()
        .take(max_chars.saturating_sub(1))
        .collect::<String>()
        .trim_end()
        .to_string();
    out.push(ELLIPSIS);
    out
}
