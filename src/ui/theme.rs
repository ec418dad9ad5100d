//! Class names shared across pages. The rules live in `assets/main.css`.

use crate::app::LoadView;
use crate::domain::TooltipVariant;

// ============================================
// LAYOUT
// ============================================

pub const PAGE: &str = "page";
pub const PAGE_HEADER: &str = "page-header";
pub const PANEL: &str = "panel";
pub const PANEL_GRID: &str = "panel-grid";
pub const SECTION_TITLE: &str = "section-title";
pub const MUTED: &str = "muted";

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-button nav-button-active"
    } else {
        "nav-button"
    }
}

// ============================================
// STATUS BADGES
// ============================================

pub fn load_badge(view: &LoadView) -> (&'static str, &'static str) {
    match view {
        LoadView::Loading => ("Loading", "badge badge-loading"),
        LoadView::Ready { .. } => ("Ready", "badge badge-ready"),
        LoadView::Failed(_) => ("Failed", "badge badge-failed"),
    }
}

pub fn legend_row(variant: TooltipVariant) -> &'static str {
    match variant {
        TooltipVariant::Danger => "legend-row legend-row-danger",
        TooltipVariant::Warning => "legend-row legend-row-warning",
        TooltipVariant::Info | TooltipVariant::Default => "legend-row",
    }
}
