use std::time::Duration;

use anyhow::Context;
use log::debug;
use reqwest::Client;
use thiserror::Error;

use crate::{RepositoryCollection, RepositoryPageFetcher, StdResult};

/// The REST production endpoint for GitHub.
pub const GITHUB_REST_ENDPOINT: &str = "https://api.github.com";

// GitHub rejects requests without a User-Agent header.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetcher error
#[derive(Error, Debug)]
pub enum FetchError {
    /// Parse error
    #[error("Parsing error: {0}")]
    Parse(String),
    /// Remote error
    #[error("Remote error: {0}")]
    Remote(String),
}

/// Fetches repository pages from the GitHub REST API.
pub struct RestFetcher {
    client: Client,
    endpoint: String,
    page_size: u16,
}

impl RestFetcher {
    /// Creates a new `RestFetcher` instance against the given endpoint.
    ///
    /// The timeout bounds each page request individually, so one hung
    /// upstream call cannot stall an inbound request forever.
    pub fn try_new(endpoint: &str, page_size: u16, request_timeout: Duration) -> StdResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(request_timeout)
            .build()
            .with_context(|| "Failed to build the outbound HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            page_size,
        })
    }

    fn repos_url(&self, username: &str) -> String {
        format!("{}/users/{username}/repos", self.endpoint)
    }

    fn page_query(&self, page: u32) -> [(&'static str, String); 4] {
        [
            ("per_page", self.page_size.to_string()),
            ("page", page.to_string()),
            ("sort", "updated".to_string()),
            ("direction", "desc".to_string()),
        ]
    }
}

#[async_trait::async_trait]
impl RepositoryPageFetcher for RestFetcher {
    async fn fetch_page(&self, username: &str, page: u32) -> StdResult<RepositoryCollection> {
        let url = self.repos_url(username);
        debug!("Fetching page {page} for user {username} from {url}");
        let response = self
            .client
            .get(&url)
            .query(&self.page_query(page))
            .send()
            .await
            .map_err(|e| FetchError::Remote(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Remote(format!("Unexpected status {status}")).into());
        }
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Remote(e.to_string()))?;
        let repositories =
            serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        Ok(repositories)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;
    use serde_json::json;

    use crate::Repository;

    use super::*;

    fn rest_fetcher(server: &MockServer) -> RestFetcher {
        RestFetcher::try_new(&server.base_url(), 100, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn repos_url_targets_the_account_listing() {
        let fetcher =
            RestFetcher::try_new(GITHUB_REST_ENDPOINT, 100, Duration::from_secs(5)).unwrap();

        assert_eq!(
            "https://api.github.com/users/testuser/repos",
            fetcher.repos_url("testuser")
        );
    }

    #[test]
    fn repos_url_does_not_double_the_endpoint_trailing_slash() {
        let fetcher =
            RestFetcher::try_new("https://api.github.com/", 100, Duration::from_secs(5)).unwrap();

        assert_eq!(
            "https://api.github.com/users/testuser/repos",
            fetcher.repos_url("testuser")
        );
    }

    #[tokio::test]
    async fn fetch_page_sends_the_pagination_parameters() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET")
                .path("/users/testuser/repos")
                .query_param("per_page", "100")
                .query_param("page", "2")
                .query_param("sort", "updated")
                .query_param("direction", "desc")
                .header_exists("User-Agent");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!([
                    {
                        "name": "repository-1",
                        "stargazers_count": 10,
                        "pushed_at": "2024-05-02T12:00:00Z"
                    },
                    {
                        "name": "repository-2",
                        "stargazers_count": 3,
                        "pushed_at": "2024-05-01T12:00:00Z"
                    }
                ]));
        });
        let fetcher = rest_fetcher(&server);

        let repositories = fetcher.fetch_page("testuser", 2).await.unwrap();

        mock.assert();
        assert_eq!(
            vec![
                Repository::new("repository-1", 10, "2024-05-02T12:00:00Z"),
                Repository::new("repository-2", 3, "2024-05-01T12:00:00Z"),
            ],
            repositories
        );
    }

    #[tokio::test]
    async fn fetch_page_fails_on_non_success_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/users/testuser/repos");
            then.status(404);
        });
        let fetcher = rest_fetcher(&server);

        let error = fetcher
            .fetch_page("testuser", 1)
            .await
            .expect_err("Expected a remote error on non success status");

        assert!(matches!(
            error.downcast_ref::<FetchError>(),
            Some(FetchError::Remote(_))
        ));
    }

    #[tokio::test]
    async fn fetch_page_fails_on_malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/users/testuser/repos");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("{\"message\": \"not a list of repositories\"}");
        });
        let fetcher = rest_fetcher(&server);

        let error = fetcher
            .fetch_page("testuser", 1)
            .await
            .expect_err("Expected a parse error on malformed body");

        assert!(matches!(
            error.downcast_ref::<FetchError>(),
            Some(FetchError::Parse(_))
        ));
    }
}
