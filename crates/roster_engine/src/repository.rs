use std::sync::Arc;

use crate::fetch::{fetch_json, Fetcher};
use crate::routes::ApiRoutes;
use crate::{FetchError, Page, UserRecord};

/// Binds the resource locator and the fetch client for the user entity.
///
/// Dependencies are injected through the constructor so tests can substitute
/// either collaborator.
#[derive(Clone)]
pub struct UserRepository {
    routes: ApiRoutes,
    fetcher: Arc<dyn Fetcher>,
}

impl UserRepository {
    pub fn new(routes: ApiRoutes, fetcher: Arc<dyn Fetcher>) -> Self {
        Self { routes, fetcher }
    }

    /// Fetches one page of user records, in response order.
    pub async fn fetch_users(&self, page: Page) -> Result<Vec<UserRecord>, FetchError> {
        let url = self.routes.users_page(page)?;
        fetch_json(self.fetcher.as_ref(), &url).await
    }
}
