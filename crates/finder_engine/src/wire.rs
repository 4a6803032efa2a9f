//! Response shapes of the publication query.
//!
//! Anything the client can live without is optional so that a sparse node
//! does not fail the whole response.

use serde::Deserialize;

use crate::{FetchedPost, PublicationData};

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    pub data: Option<ResponseData>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseData {
    pub publication: Option<PublicationNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PublicationNode {
    #[serde(default)]
    is_team: Option<bool>,
    #[serde(default)]
    title: Option<String>,
    posts: PostConnection,
}

#[derive(Debug, Deserialize)]
struct PostConnection {
    edges: Vec<PostEdge>,
}

#[derive(Debug, Deserialize)]
struct PostEdge {
    node: PostNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostNode {
    title: String,
    #[serde(default)]
    brief: Option<String>,
    url: String,
    #[serde(default)]
    featured: Option<bool>,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    cover_image: Option<CoverImage>,
}

#[derive(Debug, Deserialize)]
struct CoverImage {
    url: Option<String>,
}

impl From<PublicationNode> for PublicationData {
    fn from(node: PublicationNode) -> Self {
        Self {
            title: node.title.unwrap_or_default(),
            is_team: node.is_team.unwrap_or(false),
            posts: node
                .posts
                .edges
                .into_iter()
                .map(|edge| FetchedPost::from(edge.node))
                .collect(),
        }
    }
}

impl From<PostNode> for FetchedPost {
    fn from(node: PostNode) -> Self {
        Self {
            title: node.title,
            brief: node.brief.unwrap_or_default(),
            url: node.url,
            featured: node.featured.unwrap_or(false),
            cover_image_url: node
                .cover_image
                .and_then(|image| image.url)
                .filter(|url| !url.is_empty()),
            published_at: node.published_at,
        }
    }
}
