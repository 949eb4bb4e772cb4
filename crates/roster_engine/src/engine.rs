use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use client_logging::{client_info, client_warn};
use url::Url;

use crate::fetch::{FetchSettings, ReqwestFetcher};
use crate::repository::UserRepository;
use crate::routes::ApiRoutes;
use crate::usecase::FetchUsersPage;
use crate::{EngineEvent, FetchError, PageFetch};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub base_url: Url,
    pub fetch: FetchSettings,
}

impl EngineConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            fetch: FetchSettings::default(),
        }
    }
}

enum EngineCommand {
    FetchPage { request: PageFetch },
}

/// Handle to the background IO thread.
///
/// Commands go in over one channel; completions come back over another and
/// are drained with `try_recv`. One spawned task per command; no queuing
/// beyond the channel itself and no cancellation.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Result<Self, FetchError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let fetcher = Arc::new(ReqwestFetcher::new(config.fetch)?);
        let repository = UserRepository::new(ApiRoutes::new(config.base_url), fetcher);
        let fetch_users = Arc::new(FetchUsersPage::new(repository));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetch_users = fetch_users.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetch_users.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn fetch_page(&self, request: PageFetch) {
        let _ = self.cmd_tx.send(EngineCommand::FetchPage { request });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx
            .lock()
            .ok()
            .and_then(|rx| rx.try_recv().ok())
    }
}

async fn handle_command(
    fetch_users: &FetchUsersPage,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchPage { request } => {
            let result = fetch_users.run(request.page).await;
            match &result {
                Ok(records) => {
                    client_info!("Fetched page {} ({} users)", request.page, records.len());
                }
                Err(err) => {
                    client_warn!("Fetch of page {} failed: {}", request.page, err);
                }
            }
            let _ = event_tx.send(EngineEvent::PageFetched { request, result });
        }
    }
}
