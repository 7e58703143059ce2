pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers;
use crate::contact::handle_contact;
use crate::github::handlers::handle_get_github;
use crate::navigation::{handle_active_section, handle_get_navigation};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Content catalog
        .route("/api/v1/portfolio", get(handlers::handle_get_portfolio))
        .route("/api/v1/portfolio/skills", get(handlers::handle_get_skills))
        .route(
            "/api/v1/portfolio/experience",
            get(handlers::handle_get_experience),
        )
        .route(
            "/api/v1/portfolio/projects",
            get(handlers::handle_get_projects),
        )
        .route("/api/v1/portfolio/blog", get(handlers::handle_get_blog))
        .route(
            "/api/v1/portfolio/blog/:slug",
            get(handlers::handle_get_blog_post),
        )
        // Navigation
        .route("/api/v1/navigation", get(handle_get_navigation))
        .route("/api/v1/navigation/active", post(handle_active_section))
        // GitHub profile
        .route("/api/v1/github", get(handle_get_github))
        // Contact
        .route("/api/v1/contact", post(handle_contact))
        .with_state(state)
}
