use serde::Serialize;
use thiserror::Error;

/// Upper bound the API accepts for `posts(first: N)`.
pub const MAX_POST_COUNT: usize = 50;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("host must not be empty")]
    EmptyHost,
    #[error("post count must be between 1 and {MAX_POST_COUNT}, got {0}")]
    PostCount(usize),
}

/// JSON body of a GraphQL POST: `{"query": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
}

/// Builds the publication query for `host`, asking for the `first` most
/// recent posts.
///
/// The host is embedded as a JSON-escaped string literal, which is also a
/// valid GraphQL string literal, so quotes in user input stay inside it.
pub fn build_publication_query(host: &str, first: usize) -> Result<String, QueryError> {
    let host = host.trim();
    if host.is_empty() {
        return Err(QueryError::EmptyHost);
    }
    if first == 0 || first > MAX_POST_COUNT {
        return Err(QueryError::PostCount(first));
    }
    let host_literal = serde_json::Value::String(host.to_string()).to_string();

    Ok(format!(
        r#"query {{
  publication(host: {host_literal}) {{
    isTeam
    title
    posts(first: {first}) {{
      edges {{
        node {{
          title
          brief
          url
          featured
          publishedAt
          coverImage {{
            url
          }}
        }}
      }}
    }}
  }}
}}"#
    ))
}
