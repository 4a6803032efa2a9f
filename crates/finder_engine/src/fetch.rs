use std::time::Duration;

use bytes::BytesMut;
use finder_logging::{finder_debug, finder_info, finder_warn};
use futures_util::StreamExt;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use url::Url;

use crate::query::{build_publication_query, GraphQlRequest};
use crate::wire::GraphQlResponse;
use crate::{FailureKind, FetchError, PublicationData};

pub const DEFAULT_ENDPOINT: &str = "https://gql.hashnode.com/";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    /// How many of the most recent posts to request.
    pub post_count: usize,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 2 * 1024 * 1024,
            post_count: 20,
            user_agent: concat!("blog-finder/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[async_trait::async_trait]
pub trait PublicationFetcher: Send + Sync {
    /// Looks up the publication served at `host`.
    ///
    /// `Ok(None)` means the API answered but has no such publication.
    async fn fetch_publication(&self, host: &str) -> Result<Option<PublicationData>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<BytesMut, FetchError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, content_len));
            }
        }

        let mut body = BytesMut::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, next_len));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw)
        .map_err(|err| FetchError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::new(
            FailureKind::InvalidEndpoint,
            format!("unsupported scheme {other}"),
        )),
    }
}

#[async_trait::async_trait]
impl PublicationFetcher for ReqwestFetcher {
    async fn fetch_publication(&self, host: &str) -> Result<Option<PublicationData>, FetchError> {
        let endpoint = parse_endpoint(&self.settings.endpoint)?;
        let query = build_publication_query(host, self.settings.post_count)
            .map_err(|err| FetchError::new(FailureKind::InvalidQuery, err.to_string()))?;
        let body = serde_json::to_vec(&GraphQlRequest { query })
            .map_err(|err| FetchError::new(FailureKind::InvalidQuery, err.to_string()))?;

        let client = self.build_client()?;
        finder_debug!("POST {} for host {}", endpoint, host);
        let response = client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, self.settings.user_agent.as_str())
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = self.read_body(response).await?;
        let parsed: GraphQlResponse = serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;

        for error in &parsed.errors {
            finder_warn!("GraphQL error for host {}: {}", host, error.message);
        }

        let publication = parsed
            .data
            .and_then(|data| data.publication)
            .map(PublicationData::from);
        match &publication {
            Some(found) => finder_info!(
                "Publication {:?} for host {} returned {} posts",
                found.title,
                host,
                found.posts.len()
            ),
            None => finder_info!("No publication for host {}", host),
        }
        Ok(publication)
    }
}

fn too_large(max_bytes: u64, actual: u64) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
