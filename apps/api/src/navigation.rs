//! Navigation entries and scroll-spy.
//!
//! The page reports where its sections sit and how far it has scrolled; the
//! first section containing the probe point is highlighted.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

/// Header switches to its "scrolled" style past this offset.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
/// Probe point sits this far below the top of the viewport.
pub const SCROLL_SPY_OFFSET_PX: f64 = 100.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

#[derive(Debug, Serialize)]
pub struct NavEntry {
    pub label: String,
    pub href: String,
    pub section_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ActiveSectionRequest {
    pub scroll_y: f64,
    pub sections: Vec<SectionBounds>,
}

#[derive(Debug, Serialize)]
pub struct ActiveSectionResponse {
    pub scrolled: bool,
    pub active_section: Option<String>,
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

/// Linear scan in navigation order. `None` means no section contains the probe;
/// callers keep whatever was highlighted before.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let probe = scroll_y + SCROLL_SPY_OFFSET_PX;
    sections
        .iter()
        .find(|s| probe >= s.offset_top && probe < s.offset_top + s.height)
        .map(|s| s.id.as_str())
}

/// GET /api/v1/navigation
pub async fn handle_get_navigation(State(state): State<AppState>) -> Json<Vec<NavEntry>> {
    let entries = state
        .catalog
        .nav_items
        .iter()
        .map(|n| NavEntry {
            label: n.label.clone(),
            href: n.href.clone(),
            section_id: n.section_id().to_string(),
        })
        .collect();
    Json(entries)
}

/// POST /api/v1/navigation/active
pub async fn handle_active_section(
    payload: Result<Json<ActiveSectionRequest>, JsonRejection>,
) -> Result<Json<ActiveSectionResponse>, AppError> {
    let Json(req) = payload?;
    Ok(Json(ActiveSectionResponse {
        scrolled: is_scrolled(req.scroll_y),
        active_section: active_section(&req.sections, req.scroll_y).map(str::to_string),
    }))
}
