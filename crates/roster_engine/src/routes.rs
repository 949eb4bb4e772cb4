use url::Url;

use crate::{FailureKind, FetchError, Page};

/// Pure mapping from logical requests to concrete URLs.
///
/// The users query follows the upstream convention
/// `<base>/users?_page=<N>` with a 1-based page number.
#[derive(Debug, Clone)]
pub struct ApiRoutes {
    base: Url,
}

impl ApiRoutes {
    /// A trailing slash is appended to the base path if missing, so that
    /// joining does not drop the last path segment.
    pub fn new(mut base: Url) -> Self {
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self { base }
    }

    pub fn users_page(&self, page: Page) -> Result<Url, FetchError> {
        let mut url = self
            .base
            .join("users")
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("_page", &page.to_string());
        Ok(url)
    }
}
