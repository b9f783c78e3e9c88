use std::{sync::Arc, time::Duration};

use clap::Parser;
use log::info;
use tokio::net::TcpListener;

use github_repo_stats::{
    AppState, GITHUB_REST_ENDPOINT, PaginatedLister, RepositoryLister, RestFetcher, StdResult,
    build_router,
};

/// Command line arguments for the repository statistics server
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Address the HTTP server listens on
    #[arg(short, long, default_value = "0.0.0.0:3000")]
    listen_address: String,

    /// Base URL of the GitHub REST API
    #[arg(short, long, default_value = GITHUB_REST_ENDPOINT, env = "GITHUB_API_ENDPOINT")]
    github_endpoint: String,

    /// Maximum number of repositories fetched per page
    #[arg(short, long, default_value_t = 100)]
    max_repositories_fetched_per_page: u16,

    /// Maximum number of pages fetched for a single account
    #[arg(short = 'p', long, default_value_t = 50)]
    max_pages_fetched_per_account: u32,

    /// Timeout in seconds applied to each outbound page request
    #[arg(short, long, default_value_t = 30)]
    request_timeout_seconds: u64,
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    info!("Starting repository statistics server");
    let args = Args::parse();

    let lister = build_paginated_lister(&args)?;
    let router = build_router(AppState::new(lister));
    let listener = TcpListener::bind(&args.listen_address).await?;
    info!("Listening on {}", args.listen_address);
    axum::serve(listener, router).await?;

    Ok(())
}

fn build_paginated_lister(args: &Args) -> StdResult<Arc<dyn RepositoryLister>> {
    let fetcher = Arc::new(RestFetcher::try_new(
        &args.github_endpoint,
        args.max_repositories_fetched_per_page,
        Duration::from_secs(args.request_timeout_seconds),
    )?);

    Ok(Arc::new(PaginatedLister::new(
        fetcher,
        args.max_repositories_fetched_per_page,
        args.max_pages_fetched_per_account,
    )))
}
