//! One-shot profile fetch with an observable state.
//!
//! `ProfileFetcher::spawn` starts a single task at service initialisation. It
//! requests the profile, then the repositories, and publishes the outcome on
//! a watch channel. The task never retries. Dropping the fetcher aborts it.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::github::models::{Profile, RepositorySummary};
use crate::github::{ProfileSource, REPO_PAGE_SIZE};

pub const PROFILE_ERROR: &str = "Failed to fetch GitHub profile";
pub const REPOSITORIES_ERROR: &str = "Failed to fetch repositories";

/// Profile and repositories arrive together or not at all.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Error(String),
    Ready {
        profile: Profile,
        repositories: Vec<RepositorySummary>,
    },
}

pub struct ProfileFetcher {
    state: watch::Receiver<FetchState>,
    task: JoinHandle<()>,
}

impl ProfileFetcher {
    pub fn spawn(source: Arc<dyn ProfileSource>, username: String) -> Self {
        let (tx, rx) = watch::channel(FetchState::Loading);
        let task = tokio::spawn(async move {
            run_fetch(source.as_ref(), &username, &tx).await;
        });
        Self { state: rx, task }
    }

    pub fn current(&self) -> FetchState {
        self.state.borrow().clone()
    }

    #[cfg(test)]
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.clone()
    }
}

impl Drop for ProfileFetcher {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Runs both requests in order and publishes the final state.
pub async fn run_fetch(
    source: &dyn ProfileSource,
    username: &str,
    state: &watch::Sender<FetchState>,
) {
    state.send_replace(FetchState::Loading);

    let next = match fetch_all(source, username).await {
        Ok((profile, repositories)) => {
            info!(
                "GitHub data loaded for {username}: {} repositories",
                repositories.len()
            );
            FetchState::Ready {
                profile,
                repositories,
            }
        }
        Err(message) => FetchState::Error(message.to_string()),
    };

    state.send_replace(next);
}

async fn fetch_all(
    source: &dyn ProfileSource,
    username: &str,
) -> Result<(Profile, Vec<RepositorySummary>), &'static str> {
    let profile = source.fetch_profile(username).await.map_err(|e| {
        warn!("GitHub profile fetch for {username} failed: {e}");
        PROFILE_ERROR
    })?;

    let mut repositories = source
        .fetch_repositories(username, REPO_PAGE_SIZE)
        .await
        .map_err(|e| {
            warn!("GitHub repository fetch for {username} failed: {e}");
            REPOSITORIES_ERROR
        })?;
    repositories.truncate(REPO_PAGE_SIZE);

    Ok((profile, repositories))
}
