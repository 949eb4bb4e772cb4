use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use client_logging::{client_info, client_warn};
use roster_core::{Effect, LoadKind, Msg, PageError, PageRequest, User};
use roster_engine::{
    EngineConfig, EngineEvent, EngineHandle, FetchError, PageFetch, PageKind, UserRecord,
};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: EngineConfig, msg_tx: mpsc::Sender<Msg>) -> Result<Self, FetchError> {
        let engine = EngineHandle::new(config)?;
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage(request) => {
                    client_info!(
                        "FetchPage page={} kind={:?}",
                        request.page,
                        request.kind
                    );
                    self.engine.fetch_page(map_request(request));
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                match event {
                    EngineEvent::PageFetched { request, result } => {
                        let request = map_completion(request);
                        if let Err(err) = &result {
                            if request.kind == LoadKind::Incremental {
                                // The core drops failed incremental pages
                                // without surfacing them; keep the reason in
                                // the log.
                                client_warn!("Dropping failed page {}: {}", request.page, err);
                            }
                        }
                        let result = result
                            .map(|records| records.into_iter().map(map_user).collect())
                            .map_err(|err| PageError {
                                message: err.to_string(),
                            });
                        let _ = msg_tx.send(Msg::PageLoaded { request, result });
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_request(request: PageRequest) -> PageFetch {
    PageFetch {
        page: request.page,
        kind: match request.kind {
            LoadKind::Full => PageKind::Full,
            LoadKind::Incremental => PageKind::Incremental,
        },
    }
}

fn map_completion(request: PageFetch) -> PageRequest {
    PageRequest {
        page: request.page,
        kind: match request.kind {
            PageKind::Full => LoadKind::Full,
            PageKind::Incremental => LoadKind::Incremental,
        },
    }
}

fn map_user(record: UserRecord) -> User {
    User {
        id: record.id,
        name: record.name,
        email: record.email,
    }
}
