use crate::RepositoryCollection;

/// A trait for retrieving the full repository listing of an account.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryLister: Sync + Send {
    /// Lists the repositories of the given account, merging pages until
    /// exhaustion.
    ///
    /// Infallible by policy: a page failure truncates the listing instead of
    /// surfacing an error, so the caller always receives a collection.
    async fn list_all(&self, username: &str) -> RepositoryCollection;
}
