use std::{fmt::Display, ops::Deref};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// The name of a repository.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(pub String);

impl Deref for RepositoryName {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The number of stars a repository has.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarsCounter(pub u32);

impl Deref for StarsCounter {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for StarsCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The instant of the last push to a repository, kept verbatim as reported
/// by the upstream API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PushedAt(pub String);

impl PushedAt {
    /// Parses the timestamp as an RFC 3339 instant.
    ///
    /// Returns `None` when the upstream value is not a valid timestamp, so
    /// that recency ordering never depends on the raw string representation.
    pub fn instant(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.0).ok()
    }
}

impl Deref for PushedAt {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for PushedAt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata of a GitHub repository, as listed by the REST API.
///
/// Only the fields consumed by the statistics are kept, any other field
/// returned by the upstream API is ignored on deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// The name of the repository.
    name: RepositoryName,

    /// The number of stars the repository has.
    stargazers_count: StarsCounter,

    /// The instant of the last push to the repository.
    pushed_at: PushedAt,
}

impl Repository {
    /// Creates a new `Repository` instance.
    pub fn new(name: &str, stargazers_count: u32, pushed_at: &str) -> Self {
        Self {
            name: RepositoryName(name.to_string()),
            stargazers_count: StarsCounter(stargazers_count),
            pushed_at: PushedAt(pushed_at.to_string()),
        }
    }

    /// Retrieves the repository name.
    pub fn name(&self) -> &RepositoryName {
        &self.name
    }

    /// Retrieves the stars of the repository.
    pub fn stargazers_count(&self) -> &StarsCounter {
        &self.stargazers_count
    }

    /// Retrieves the instant of the last push to the repository.
    pub fn pushed_at(&self) -> &PushedAt {
        &self.pushed_at
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Repository: {}, Stars: {}, Pushed at: {}",
            self.name, self.stargazers_count, self.pushed_at
        )
    }
}

/// The ordered sequence of repositories of an account, merged across pages in
/// request order.
pub type RepositoryCollection = Vec<Repository>;
