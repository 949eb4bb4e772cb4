//! Roster engine: IO pipeline and effect execution.
mod engine;
mod fetch;
mod repository;
mod routes;
mod types;
mod usecase;

pub use engine::{EngineConfig, EngineHandle};
pub use fetch::{fetch_json, DecodeError, FetchSettings, Fetcher, ReqwestFetcher};
pub use repository::UserRepository;
pub use routes::ApiRoutes;
pub use types::{
    EngineEvent, FailureKind, FetchError, Page, PageFetch, PageKind, UserRecord,
};
pub use usecase::FetchUsersPage;
