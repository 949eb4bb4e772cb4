use crate::repository::UserRepository;
use crate::{FetchError, Page, UserRecord};

/// The fetch-a-page-of-users action: thin orchestration over the repository.
pub struct FetchUsersPage {
    repository: UserRepository,
}

impl FetchUsersPage {
    pub fn new(repository: UserRepository) -> Self {
        Self { repository }
    }

    pub async fn run(&self, page: Page) -> Result<Vec<UserRecord>, FetchError> {
        self.repository.fetch_users(page).await
    }
}
