//! Static key → visual treatment tables.
//!
//! Catalog entries and repository metadata carry free-form keys (icon names,
//! language names). They resolve here to a closed set of treatments, falling
//! back to a default for anything unknown.

use serde::Serialize;

/// Icon shown next to a skill category.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Server,
    Database,
    Cloud,
    Layers,
    Code,
}

impl Icon {
    pub fn from_key(key: &str) -> Self {
        match key {
            "Server" => Icon::Server,
            "Database" => Icon::Database,
            "Cloud" => Icon::Cloud,
            "Layers" => Icon::Layers,
            _ => Icon::Code,
        }
    }
}

/// Colour swatch for a repository's primary language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageColor {
    Orange,
    DeepOrange,
    LightOrange,
    Yellow,
    Blue,
    LightBlue,
    DeepBlue,
    Green,
    Cyan,
    Pink,
    Purple,
    DeepPurple,
    Indigo,
    Red,
    Gray,
}

impl LanguageColor {
    pub fn for_language(language: Option<&str>) -> Self {
        match language {
            Some("Java") | Some("HTML") => LanguageColor::Orange,
            Some("Rust") => LanguageColor::DeepOrange,
            Some("Swift") => LanguageColor::LightOrange,
            Some("JavaScript") => LanguageColor::Yellow,
            Some("TypeScript") => LanguageColor::Blue,
            Some("CSS") => LanguageColor::LightBlue,
            Some("Dockerfile") => LanguageColor::DeepBlue,
            Some("Python") => LanguageColor::Green,
            Some("Go") => LanguageColor::Cyan,
            Some("C++") => LanguageColor::Pink,
            Some("C#") => LanguageColor::Purple,
            Some("Kotlin") => LanguageColor::DeepPurple,
            Some("PHP") => LanguageColor::Indigo,
            Some("Ruby") => LanguageColor::Red,
            // Shell shares the fallback swatch.
            _ => LanguageColor::Gray,
        }
    }

    /// Stylesheet class the page applies to the swatch.
    pub fn css_class(self) -> &'static str {
        match self {
            LanguageColor::Orange => "bg-orange-500",
            LanguageColor::DeepOrange => "bg-orange-600",
            LanguageColor::LightOrange => "bg-orange-400",
            LanguageColor::Yellow => "bg-yellow-400",
            LanguageColor::Blue => "bg-blue-500",
            LanguageColor::LightBlue => "bg-blue-400",
            LanguageColor::DeepBlue => "bg-blue-600",
            LanguageColor::Green => "bg-green-500",
            LanguageColor::Cyan => "bg-cyan-500",
            LanguageColor::Pink => "bg-pink-500",
            LanguageColor::Purple => "bg-purple-500",
            LanguageColor::DeepPurple => "bg-purple-600",
            LanguageColor::Indigo => "bg-indigo-500",
            LanguageColor::Red => "bg-red-500",
            LanguageColor::Gray => "bg-gray-500",
        }
    }
}
