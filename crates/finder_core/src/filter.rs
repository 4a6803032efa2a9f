use chrono::NaiveDate;

use crate::Post;

/// Lower-cased tags parsed from the comma-separated filter input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagFilter {
    tags: Vec<String>,
}

impl TagFilter {
    pub fn parse(raw: &str) -> Self {
        let tags = raw
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self { tags }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Substring match against the brief, every tag must be present.
    pub fn matches(&self, post: &Post) -> bool {
        if self.tags.is_empty() {
            return true;
        }
        let brief = post.brief.to_lowercase();
        self.tags.iter().all(|tag| brief.contains(tag.as_str()))
    }
}

/// Inclusive publish-date window. Only active when both ends are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Outcome of parsing the two date inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRangeInput {
    /// At least one side is blank; no date filtering.
    Unset,
    Valid(DateRange),
    /// Some non-blank side did not parse as `YYYY-MM-DD`.
    Invalid,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn parse(start: &str, end: &str) -> DateRangeInput {
        let start = parse_date_input(start);
        let end = parse_date_input(end);
        match (start, end) {
            (Err(()), _) | (_, Err(())) => DateRangeInput::Invalid,
            (Ok(Some(start)), Ok(Some(end))) => DateRangeInput::Valid(Self::new(start, end)),
            _ => DateRangeInput::Unset,
        }
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn matches(&self, post: &Post) -> bool {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return true;
        };
        match post.published_date() {
            Some(date) => start <= date && date <= end,
            None => false,
        }
    }
}

fn parse_date_input(raw: &str) -> Result<Option<NaiveDate>, ()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ())
}

/// Applies both filters, then moves featured posts to the front.
///
/// The sort is stable so fetch order is kept within each group.
pub fn filter_and_sort<'a>(posts: &'a [Post], tags: &TagFilter, range: &DateRange) -> Vec<&'a Post> {
    let mut kept: Vec<&Post> = posts
        .iter()
        .filter(|post| tags.matches(post) && range.matches(post))
        .collect();
    kept.sort_by_key(|post| !post.featured);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_published_at;

    fn post(brief: &str) -> Post {
        Post {
            brief: brief.to_string(),
            ..Post::default()
        }
    }

    #[test]
    fn tag_parse_drops_blanks_and_lowercases() {
        let filter = TagFilter::parse(" Rust, ,WASM ,");
        assert_eq!(filter.tags(), ["rust", "wasm"]);
    }

    #[test]
    fn tags_match_substrings_case_insensitively() {
        let filter = TagFilter::parse("rust,async");
        assert!(filter.matches(&post("Trusting ASYNC code")));
        assert!(!filter.matches(&post("Rust only")));
    }

    #[test]
    fn blank_tag_input_matches_everything() {
        assert!(TagFilter::parse(" , ").matches(&post("")));
    }

    #[test]
    fn date_range_needs_both_ends() {
        assert_eq!(DateRange::parse("2024-01-01", ""), DateRangeInput::Unset);
        assert_eq!(DateRange::parse("", ""), DateRangeInput::Unset);
        assert_eq!(DateRange::parse("2024-13-01", ""), DateRangeInput::Invalid);
        assert!(matches!(
            DateRange::parse("2024-01-01", "2024-01-31"),
            DateRangeInput::Valid(range) if range.is_active()
        ));
    }

    #[test]
    fn undated_posts_are_excluded_by_active_range() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        );
        assert!(!range.matches(&post("no date")));

        let mut last_day = post("edge");
        last_day.published_at = parse_published_at("2024-01-31T22:15:00Z");
        assert!(range.matches(&last_day));
    }
}
