use finder_core::{parse_published_at, Effect, FetchOutcome, Msg, Post, Publication};
use finder_engine::{EngineEvent, EngineHandle, FetchSettings, FetchedPost, PublicationData};
use finder_logging::{finder_info, finder_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> std::io::Result<Self> {
        finder_info!(
            "Engine starting endpoint={} posts={}",
            settings.endpoint,
            settings.post_count
        );
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPublication { search_id, host } => {
                    finder_info!("FetchPublication search_id={} host={}", search_id, host);
                    self.engine.search(search_id, host);
                }
                Effect::CancelSearch { search_id } => {
                    finder_info!("CancelSearch search_id={}", search_id);
                    self.engine.cancel(search_id);
                }
            }
        }
    }

    /// Drains finished searches as core messages.
    pub fn poll(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { search_id, result } => {
            let outcome = match result {
                Ok(Some(publication)) => FetchOutcome::Found(map_publication(publication)),
                Ok(None) => FetchOutcome::NotFound,
                Err(err) => {
                    finder_warn!("Search {} failed: {}", search_id, err);
                    FetchOutcome::Failed {
                        reason: err.to_string(),
                    }
                }
            };
            Msg::FetchCompleted { search_id, outcome }
        }
    }
}

fn map_publication(data: PublicationData) -> Publication {
    Publication {
        title: data.title,
        is_team: data.is_team,
        posts: data.posts.into_iter().map(map_post).collect(),
    }
}

fn map_post(post: FetchedPost) -> Post {
    let published_at = post.published_at.as_deref().and_then(parse_published_at);
    if published_at.is_none() {
        if let Some(raw) = &post.published_at {
            finder_warn!("Unparseable publishedAt {:?} on {}", raw, post.url);
        }
    }
    Post {
        title: post.title,
        brief: post.brief,
        url: post.url,
        featured: post.featured,
        cover_image: post.cover_image_url,
        published_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finder_engine::{FailureKind, FetchError};
    use pretty_assertions::assert_eq;

    #[test]
    fn completed_search_maps_to_found() {
        let msg = map_event(EngineEvent::SearchCompleted {
            search_id: 4,
            result: Ok(Some(PublicationData {
                title: "Blog".to_string(),
                is_team: true,
                posts: vec![FetchedPost {
                    title: "T".to_string(),
                    published_at: Some("2024-01-15T10:00:00.000Z".to_string()),
                    featured: true,
                    ..FetchedPost::default()
                }],
            })),
        });

        let Msg::FetchCompleted {
            search_id,
            outcome: FetchOutcome::Found(publication),
        } = msg
        else {
            panic!("expected found outcome");
        };
        assert_eq!(search_id, 4);
        assert!(publication.is_team);
        assert!(publication.posts[0].featured);
        assert_eq!(
            publication.posts[0].published_at,
            parse_published_at("2024-01-15T10:00:00Z")
        );
    }

    #[test]
    fn missing_publication_and_errors_map_to_outcomes() {
        assert_eq!(
            map_event(EngineEvent::SearchCompleted {
                search_id: 1,
                result: Ok(None),
            }),
            Msg::FetchCompleted {
                search_id: 1,
                outcome: FetchOutcome::NotFound,
            }
        );

        let msg = map_event(EngineEvent::SearchCompleted {
            search_id: 2,
            result: Err(FetchError {
                kind: FailureKind::Timeout,
                message: "slow".to_string(),
            }),
        });
        assert!(matches!(
            msg,
            Msg::FetchCompleted {
                search_id: 2,
                outcome: FetchOutcome::Failed { .. }
            }
        ));
    }

    #[test]
    fn bad_timestamp_leaves_post_undated() {
        let post = map_post(FetchedPost {
            published_at: Some("not a date".to_string()),
            ..FetchedPost::default()
        });
        assert_eq!(post.published_at, None);
    }
}
