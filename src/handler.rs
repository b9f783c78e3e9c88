use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use log::info;

use crate::{RepositoryLister, UserReposStats};

/// The state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The lister used to retrieve the repositories of an account.
    lister: Arc<dyn RepositoryLister>,
}

impl AppState {
    /// Creates a new `AppState` instance with the given lister.
    pub fn new(lister: Arc<dyn RepositoryLister>) -> Self {
        Self { lister }
    }
}

/// Builds the HTTP router of the service.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/repos/{username}", get(get_user_repos_stats))
        .with_state(state)
}

/// Handles `GET /api/repos/{username}`.
///
/// Always responds 200: an upstream failure truncates the listing instead of
/// failing the request, so an unreachable upstream and an account without
/// repositories produce the same response shape.
async fn get_user_repos_stats(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Json<UserReposStats> {
    info!("Computing repository statistics for user {username}");
    let repositories = state.lister.list_all(&username).await;

    Json(UserReposStats::from_repositories(&repositories))
}
