use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{BlogPost, Catalog, Experience, Project, Skill};
use crate::errors::AppError;
use crate::state::AppState;
use crate::visuals::Icon;

#[derive(Debug, Deserialize)]
pub struct ProjectsQuery {
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Serialize)]
pub struct SkillCategoryView {
    pub title: String,
    pub icon: Icon,
    pub skills: Vec<Skill>,
}

/// GET /api/v1/portfolio
pub async fn handle_get_portfolio(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.catalog.as_ref().clone())
}

/// GET /api/v1/portfolio/skills
pub async fn handle_get_skills(State(state): State<AppState>) -> Json<Vec<SkillCategoryView>> {
    let categories = state
        .catalog
        .skill_categories
        .iter()
        .map(|c| SkillCategoryView {
            title: c.title.clone(),
            icon: Icon::from_key(&c.icon),
            skills: c.skills.clone(),
        })
        .collect();
    Json(categories)
}

/// GET /api/v1/portfolio/experience
pub async fn handle_get_experience(State(state): State<AppState>) -> Json<Vec<Experience>> {
    Json(state.catalog.experiences.clone())
}

/// GET /api/v1/portfolio/projects?featured=true
pub async fn handle_get_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectsQuery>,
) -> Json<Vec<Project>> {
    let projects = if params.featured {
        state.catalog.featured_projects().cloned().collect()
    } else {
        state.catalog.projects.clone()
    };
    Json(projects)
}

/// GET /api/v1/portfolio/blog
pub async fn handle_get_blog(State(state): State<AppState>) -> Json<Vec<BlogPost>> {
    Json(state.catalog.blog_posts.clone())
}

/// GET /api/v1/portfolio/blog/:slug
pub async fn handle_get_blog_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, AppError> {
    state
        .catalog
        .blog_post(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Blog post '{slug}' not found")))
}
