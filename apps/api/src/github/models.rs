use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account profile from `GET /users/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
}

/// One entry from `GET /users/{username}/repos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RepositorySummary {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    #[serde(default)]
    pub topics: Vec<String>,
    pub updated_at: DateTime<Utc>,
}
