use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub education: Education,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutContent {
    pub intro: String,
    pub journey: String,
    pub philosophy: String,
    pub interests: String,
    pub approach: String,
}

/// A navigation entry. `href` is an in-page anchor such as `#about`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

impl NavItem {
    /// The section id the anchor points at (`#about` → `about`).
    pub fn section_id(&self) -> &str {
        self.href.trim_start_matches('#')
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Proficiency percentage, 0 – 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub icon: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub period: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub problem_statement: Option<String>,
    pub tech_stack: Vec<String>,
    pub impact: String,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub tags: Vec<String>,
    pub slug: String,
}

/// The hand-authored portfolio content. Loaded once at startup, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub personal_info: PersonalInfo,
    pub about: AboutContent,
    pub nav_items: Vec<NavItem>,
    pub social_links: Vec<SocialLink>,
    pub skill_categories: Vec<SkillCategory>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub blog_posts: Vec<BlogPost>,
}
