use serde_json::{json, Value};

use crate::github::models::{Profile, RepositorySummary};

pub fn profile_json() -> Value {
    json!({
        "login": "dangi-ai",
        "id": 1,
        "avatar_url": "https://avatars.githubusercontent.com/u/1",
        "html_url": "https://github.com/dangi-ai",
        "name": null,
        "bio": "Backend engineer",
        "public_repos": 12,
        "followers": 5,
        "following": 3
    })
}

pub fn repo_json(id: u64, name: &str, updated_at: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "full_name": format!("dangi-ai/{name}"),
        "description": null,
        "html_url": format!("https://github.com/dangi-ai/{name}"),
        "language": "Rust",
        "stargazers_count": 4,
        "forks_count": 1,
        "topics": ["rust", "axum", "tokio", "serde"],
        "updated_at": updated_at
    })
}

pub fn profile() -> Profile {
    serde_json::from_value(profile_json()).unwrap()
}

pub fn repo(id: u64, name: &str, updated_at: &str) -> RepositorySummary {
    serde_json::from_value(repo_json(id, name, updated_at)).unwrap()
}
