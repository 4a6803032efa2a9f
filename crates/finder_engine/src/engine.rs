use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use finder_logging::{finder_debug, finder_info};
use tokio_util::sync::CancellationToken;

use crate::fetch::{FetchSettings, PublicationFetcher, ReqwestFetcher};
use crate::{EngineEvent, SearchId};

enum EngineCommand {
    Search { search_id: SearchId, host: String },
    Cancel { search_id: SearchId },
}

/// Runs searches on a background tokio runtime.
///
/// At most one search is live: starting a new one cancels the previous.
/// Results come back through [`EngineHandle::try_recv`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> io::Result<Self> {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn PublicationFetcher>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            let mut active: Option<(SearchId, CancellationToken)> = None;
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Search { search_id, host } => {
                        if let Some((previous, token)) = active.take() {
                            finder_debug!("Search {} superseded by {}", previous, search_id);
                            token.cancel();
                        }
                        let token = CancellationToken::new();
                        active = Some((search_id, token.clone()));
                        runtime.spawn(run_search(
                            fetcher.clone(),
                            search_id,
                            host,
                            token,
                            event_tx.clone(),
                        ));
                    }
                    EngineCommand::Cancel { search_id } => {
                        if matches!(&active, Some((id, _)) if *id == search_id) {
                            if let Some((_, token)) = active.take() {
                                token.cancel();
                            }
                        }
                    }
                }
            }
            finder_debug!("Engine command channel closed; shutting down runtime");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn search(&self, search_id: SearchId, host: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Search {
            search_id,
            host: host.into(),
        });
    }

    pub fn cancel(&self, search_id: SearchId) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel { search_id });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn run_search(
    fetcher: Arc<dyn PublicationFetcher>,
    search_id: SearchId,
    host: String,
    token: CancellationToken,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            finder_info!("Search {} for {} cancelled", search_id, host);
        }
        result = fetcher.fetch_publication(&host) => {
            let _ = event_tx.send(EngineEvent::SearchCompleted { search_id, result });
        }
    }
}
