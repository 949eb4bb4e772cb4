use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::{FailureKind, FetchError};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Generic GET client: returns the raw body on a 2xx response, fails on
/// transport errors, timeouts, and non-success statuses. No caching, no
/// retries.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, url: &url::Url) -> Result<Vec<u8>, FetchError>;
}

#[derive(Debug, thiserror::Error)]
#[error("failed to decode response body as JSON: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Fetches `url` and decodes the JSON body into `T`.
///
/// Decode mismatches surface as `FailureKind::Decode`, the same failure
/// channel as transport errors, so callers see a single error type.
pub async fn fetch_json<T: DeserializeOwned>(
    fetcher: &dyn Fetcher,
    url: &url::Url,
) -> Result<T, FetchError> {
    let bytes = fetcher.get(url).await?;
    serde_json::from_slice(&bytes).map_err(|err| {
        FetchError::new(FailureKind::Decode, DecodeError::from(err).to_string())
    })
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn get(&self, url: &url::Url) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url.clone())
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

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        Ok(bytes.to_vec())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
