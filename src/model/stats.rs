use std::ops::Deref;

use serde::Serialize;

use super::{Repository, RepositoryCollection};

/// The number of repositories retained by the recency view.
pub const LAST_UPDATED_TOTAL: usize = 5;

/// The number of stars a repository must exceed to enter the starred view.
pub const STARS_THRESHOLD: u32 = 5;

/// Keeps the repositories with strictly more than [STARS_THRESHOLD] stars,
/// in input order.
pub fn filter_by_stars(repositories: &[Repository]) -> Vec<Repository> {
    repositories
        .iter()
        .filter(|repository| *repository.stargazers_count().deref() > STARS_THRESHOLD)
        .cloned()
        .collect()
}

/// Returns the `total` most recently pushed repositories, most recent first.
///
/// Recency compares parsed instants rather than raw timestamp strings, so the
/// ordering holds even when upstream timestamps mix timezone offsets. A
/// repository whose timestamp does not parse orders last. The sort is stable,
/// ties keep input order.
pub fn last_updated(repositories: &[Repository], total: usize) -> Vec<Repository> {
    let mut sorted = repositories.to_vec();
    sorted.sort_by(|a, b| b.pushed_at().instant().cmp(&a.pushed_at().instant()));
    sorted.truncate(total);

    sorted
}

/// Sums the stars across all repositories, 0 for an empty collection.
pub fn sum_stars(repositories: &[Repository]) -> u64 {
    repositories
        .iter()
        .map(|repository| u64::from(*repository.stargazers_count().deref()))
        .sum()
}

/// The derived views computed over the full repository collection of an
/// account, as served to the caller.
#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserReposStats {
    /// The sum of stars across all repositories of the account.
    total_stars: u64,

    /// The five most recently pushed repositories, most recent first.
    last5_updated: Vec<Repository>,

    /// The repositories with more than five stars.
    repos_with_more_than5_stars: Vec<Repository>,
}

impl UserReposStats {
    /// Computes the three views over the given collection.
    pub fn from_repositories(repositories: &RepositoryCollection) -> Self {
        Self {
            total_stars: sum_stars(repositories),
            last5_updated: last_updated(repositories, LAST_UPDATED_TOTAL),
            repos_with_more_than5_stars: filter_by_stars(repositories),
        }
    }
}
