use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::github::fetcher::FetchState;
use crate::github::models::{Profile, RepositorySummary};
use crate::visuals::LanguageColor;

/// Topics shown per repository card.
const MAX_TOPICS: usize = 3;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FetchStatus {
    Loading,
    Error,
    Ready,
}

#[derive(Debug, Serialize)]
pub struct ProfileCard {
    pub login: String,
    pub display_name: String,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub html_url: String,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
}

#[derive(Debug, Serialize)]
pub struct RepositoryCard {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub language: String,
    pub language_color: &'static str,
    pub stars: u32,
    pub forks: u32,
    pub topics: Vec<String>,
    pub updated: String,
}

/// What the GitHub section of the page renders. `profile_url` is always set
/// so the page can link out even when the fetch failed.
#[derive(Debug, Serialize)]
pub struct GitHubView {
    pub status: FetchStatus,
    pub error: Option<String>,
    pub profile_url: String,
    pub profile: Option<ProfileCard>,
    pub repositories: Vec<RepositoryCard>,
}

impl GitHubView {
    pub fn from_state(state: FetchState, profile_url: String) -> Self {
        match state {
            FetchState::Loading => Self {
                status: FetchStatus::Loading,
                error: None,
                profile_url,
                profile: None,
                repositories: vec![],
            },
            FetchState::Error(message) => Self {
                status: FetchStatus::Error,
                error: Some(message),
                profile_url,
                profile: None,
                repositories: vec![],
            },
            FetchState::Ready {
                profile,
                repositories,
            } => Self {
                status: FetchStatus::Ready,
                error: None,
                profile_url,
                profile: Some(profile_card(profile)),
                repositories: repositories.into_iter().map(repository_card).collect(),
            },
        }
    }
}

fn profile_card(profile: Profile) -> ProfileCard {
    ProfileCard {
        display_name: profile.name.unwrap_or_else(|| profile.login.clone()),
        login: profile.login,
        avatar_url: profile.avatar_url,
        bio: profile.bio,
        html_url: profile.html_url,
        public_repos: profile.public_repos,
        followers: profile.followers,
        following: profile.following,
    }
}

fn repository_card(repo: RepositorySummary) -> RepositoryCard {
    let color = LanguageColor::for_language(repo.language.as_deref());
    RepositoryCard {
        id: repo.id,
        language: format_repo_language(repo.language.as_deref()).to_string(),
        language_color: color.css_class(),
        updated: format_repo_date(&repo.updated_at),
        name: repo.name,
        description: repo.description,
        url: repo.html_url,
        stars: repo.stargazers_count,
        forks: repo.forks_count,
        topics: repo.topics.into_iter().take(MAX_TOPICS).collect(),
    }
}

pub fn format_repo_language(language: Option<&str>) -> &str {
    language.unwrap_or("Unknown")
}

/// `Jan 15, 2024`
pub fn format_repo_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::fixtures::{profile, repo};

    const PROFILE_URL: &str = "https://github.com/dangi-ai";

    #[test]
    fn test_loading_view_has_no_data() {
        let view = GitHubView::from_state(FetchState::Loading, PROFILE_URL.into());
        assert_eq!(view.status, FetchStatus::Loading);
        assert!(view.profile.is_none());
        assert!(view.repositories.is_empty());
    }

    #[test]
    fn test_error_view_keeps_escape_hatch() {
        let view = GitHubView::from_state(
            FetchState::Error("Failed to fetch GitHub profile".into()),
            PROFILE_URL.into(),
        );
        assert_eq!(view.status, FetchStatus::Error);
        assert_eq!(view.error.as_deref(), Some("Failed to fetch GitHub profile"));
        assert_eq!(view.profile_url, PROFILE_URL);
        assert!(view.profile.is_none());
    }

    #[test]
    fn test_ready_view_counts_match_profile() {
        let state = FetchState::Ready {
            profile: profile(),
            repositories: vec![repo(1, "alpha", "2024-01-15T10:00:00Z")],
        };
        let view = GitHubView::from_state(state, PROFILE_URL.into());
        let card = view.profile.unwrap();

        assert_eq!(card.public_repos, 12);
        assert_eq!(card.followers, 5);
        assert_eq!(card.following, 3);
        // name is null in the fixture
        assert_eq!(card.display_name, "dangi-ai");
    }

    #[test]
    fn test_repository_card_formatting() {
        let mut summary = repo(7, "beta", "2024-01-05T23:59:00Z");
        summary.language = None;
        let card = repository_card(summary);

        assert_eq!(card.language, "Unknown");
        assert_eq!(card.language_color, "bg-gray-500");
        assert_eq!(card.updated, "Jan 5, 2024");
        assert_eq!(card.topics, vec!["rust", "axum", "tokio"]);
    }
}
