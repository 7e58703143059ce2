use axum::{extract::State, Json};

use crate::github::view::GitHubView;
use crate::state::AppState;

/// GET /api/v1/github
///
/// Snapshot of the one-shot profile fetch: loading, error, or ready with data.
pub async fn handle_get_github(State(state): State<AppState>) -> Json<GitHubView> {
    Json(GitHubView::from_state(
        state.github.current(),
        state.config.github_profile_url(),
    ))
}
