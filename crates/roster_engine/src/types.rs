use std::fmt;

use serde::Deserialize;

/// 1-based page counter for the remote directory.
pub type Page = u32;

/// Whether the caller treats a page as a replacement or an extension.
///
/// The engine does not act on this; it is echoed back with the completion so
/// the caller can apply its per-kind failure policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Full,
    Incremental,
}

/// A page fetch command, echoed verbatim in the completion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageFetch {
    pub page: Page,
    pub kind: PageKind,
}

/// One user record as decoded from the remote directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    PageFetched {
        request: PageFetch,
        result: Result<Vec<UserRecord>, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "decode error"),
        }
    }
}
