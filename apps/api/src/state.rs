use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::github::fetcher::ProfileFetcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only for the process lifetime.
    pub catalog: Arc<Catalog>,
    /// Dropping the last handle aborts an unfinished fetch.
    pub github: Arc<ProfileFetcher>,
}
