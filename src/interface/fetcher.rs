use crate::{RepositoryCollection, StdResult};

/// A trait for fetching one page of repository data from the API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryPageFetcher: Sync + Send {
    /// Fetches one page of the repositories of the given account.
    ///
    /// Pages are numbered from 1.
    async fn fetch_page(&self, username: &str, page: u32) -> StdResult<RepositoryCollection>;
}
