use std::sync::Arc;

use log::{info, warn};

use crate::{RepositoryCollection, RepositoryLister, RepositoryPageFetcher};

/// Lists the repositories of an account by fetching pages sequentially,
/// starting at page 1, until exhaustion.
pub struct PaginatedLister {
    /// The fetcher used to retrieve individual pages.
    fetcher: Arc<dyn RepositoryPageFetcher>,

    /// The number of repositories requested per page.
    ///
    /// A page with fewer repositories than this is a short page and ends the
    /// pagination.
    page_size: u16,

    /// The maximum number of pages fetched for one account, bounding the
    /// pagination against a misbehaving upstream.
    max_pages: u32,
}

impl PaginatedLister {
    /// Creates a new `PaginatedLister` instance with the given fetcher.
    pub fn new(fetcher: Arc<dyn RepositoryPageFetcher>, page_size: u16, max_pages: u32) -> Self {
        Self {
            fetcher,
            page_size,
            max_pages,
        }
    }
}

#[async_trait::async_trait]
impl RepositoryLister for PaginatedLister {
    /// Merges pages in request order. A failed page halts the pagination and
    /// the repositories accumulated from prior pages are returned as if the
    /// listing were complete: a partial result is preferred over a failed
    /// request.
    async fn list_all(&self, username: &str) -> RepositoryCollection {
        let mut repositories = RepositoryCollection::new();
        let mut page = 1;

        loop {
            let page_items = match self.fetcher.fetch_page(username, page).await {
                Ok(page_items) => page_items,
                Err(e) => {
                    warn!("Failed to fetch page {page} for user {username}: {e:#}");
                    break;
                }
            };
            if page_items.is_empty() {
                break;
            }
            let is_short_page = page_items.len() < self.page_size as usize;
            repositories.extend(page_items);
            if is_short_page {
                break;
            }
            if page >= self.max_pages {
                warn!(
                    "Reached the maximum of {} page(s) for user {username}, truncating the listing",
                    self.max_pages
                );
                break;
            }
            page += 1;
        }
        info!(
            "Listed {} repositories for user {username} over {page} page(s)",
            repositories.len()
        );

        repositories
    }
}
