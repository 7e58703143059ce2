//! Content catalog — the fixed portfolio records served to the page.
//!
//! Authored as JSON and embedded in the binary. `CONTENT_PATH` swaps in a
//! file read once at startup. The parsed catalog is validated, wrapped in an
//! `Arc`, and never mutated afterwards.

pub mod handlers;
pub mod models;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

pub use models::*;

const EMBEDDED_CATALOG: &str = include_str!("../../content/portfolio.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Catalog JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate {collection} id '{id}'")]
    DuplicateId {
        collection: &'static str,
        id: String,
    },

    #[error("Duplicate blog slug '{0}'")]
    DuplicateSlug(String),

    #[error("Skill '{skill}' has level {level}, expected 0-100")]
    LevelOutOfRange { skill: String, level: u8 },

    #[error("Navigation href '{0}' must be an in-page anchor starting with '#'")]
    InvalidNavHref(String),
}

impl Catalog {
    /// Loads the catalog from `path` when given, otherwise the embedded content.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                info!("Loading content catalog from {}", path.display());
                Self::from_json(&raw)?
            }
            None => Self::embedded()?,
        };

        info!(
            "Content catalog ready: {} skill categories, {} experiences, {} projects, {} blog posts",
            catalog.skill_categories.len(),
            catalog.experiences.len(),
            catalog.projects.len(),
            catalog.blog_posts.len()
        );
        Ok(catalog)
    }

    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        ensure_unique_ids("experience", self.experiences.iter().map(|e| e.id.as_str()))?;
        ensure_unique_ids("project", self.projects.iter().map(|p| p.id.as_str()))?;
        ensure_unique_ids("blog post", self.blog_posts.iter().map(|b| b.id.as_str()))?;

        let mut slugs = HashSet::new();
        for post in &self.blog_posts {
            if !slugs.insert(post.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(post.slug.clone()));
            }
        }

        for skill in self.skill_categories.iter().flat_map(|c| &c.skills) {
            if let Some(level) = skill.level.filter(|l| *l > 100) {
                return Err(CatalogError::LevelOutOfRange {
                    skill: skill.name.clone(),
                    level,
                });
            }
        }

        if let Some(item) = self.nav_items.iter().find(|n| !n.href.starts_with('#')) {
            return Err(CatalogError::InvalidNavHref(item.href.clone()));
        }

        Ok(())
    }

    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    pub fn blog_post(&self, slug: &str) -> Option<&BlogPost> {
        self.blog_posts.iter().find(|p| p.slug == slug)
    }
}

fn ensure_unique_ids<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::io::Write;

    fn embedded_json() -> Value {
        serde_json::from_str(EMBEDDED_CATALOG).unwrap()
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.personal_info.name, "Sushil Dangi");
        assert_eq!(catalog.nav_items.len(), 8);
        assert_eq!(catalog.skill_categories.len(), 4);
        assert_eq!(catalog.experiences.len(), 3);
        assert_eq!(catalog.projects.len(), 6);
        assert_eq!(catalog.blog_posts.len(), 6);
    }

    #[test]
    fn test_featured_projects_only_returns_flagged() {
        let catalog = Catalog::embedded().unwrap();
        let featured: Vec<&str> = catalog.featured_projects().map(|p| p.id.as_str()).collect();
        assert_eq!(featured, vec!["proj-1", "proj-2", "proj-3"]);
    }

    #[test]
    fn test_blog_post_lookup_by_slug() {
        let catalog = Catalog::embedded().unwrap();
        let post = catalog.blog_post("securing-apis").unwrap();
        assert_eq!(post.id, "blog-6");
        assert!(catalog.blog_post("no-such-post").is_none());
    }

    #[test]
    fn test_optional_project_fields_default() {
        let mut raw = embedded_json();
        raw["projects"][0] = json!({
            "id": "proj-x",
            "title": "Minimal",
            "description": "d",
            "tech_stack": [],
            "impact": "i"
        });
        let catalog = Catalog::from_json(&raw.to_string()).unwrap();
        let project = &catalog.projects[0];
        assert!(!project.featured);
        assert!(project.problem_statement.is_none());
        assert!(project.live_url.is_none());
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let mut raw = embedded_json();
        raw["blog_posts"][1]["slug"] = json!("designing-scalable-microservices");
        let err = Catalog::from_json(&raw.to_string()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSlug(ref s) if s == "designing-scalable-microservices"));
    }

    #[test]
    fn test_duplicate_project_id_rejected() {
        let mut raw = embedded_json();
        raw["projects"][2]["id"] = json!("proj-1");
        let err = Catalog::from_json(&raw.to_string()).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateId { collection: "project", .. }
        ));
    }

    #[test]
    fn test_skill_level_above_100_rejected() {
        let mut raw = embedded_json();
        raw["skill_categories"][0]["skills"][0]["level"] = json!(101);
        let err = Catalog::from_json(&raw.to_string()).unwrap_err();
        assert!(matches!(err, CatalogError::LevelOutOfRange { level: 101, .. }));
    }

    #[test]
    fn test_nav_href_without_anchor_rejected() {
        let mut raw = embedded_json();
        raw["nav_items"][0]["href"] = json!("/home");
        let err = Catalog::from_json(&raw.to_string()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidNavHref(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_load_from_file_overrides_embedded() {
        let mut raw = embedded_json();
        raw["personal_info"]["name"] = json!("Someone Else");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(raw.to_string().as_bytes()).unwrap();

        let catalog = Catalog::load(Some(file.path())).unwrap();
        assert_eq!(catalog.personal_info.name, "Someone Else");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Catalog::load(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
