use dioxus::prelude::*;

use crate::domain::LegendEntry;
use crate::ui::components::tooltip::{use_tooltip, TooltipContent};
use crate::ui::theme;
use crate::util::assets;

#[component]
pub fn Legend(title: String, entries: Vec<LegendEntry>, empty_text: Option<String>) -> Element {
    let tooltip = use_tooltip();

    rsx! {
        section { class: theme::PANEL,
            h3 { class: theme::SECTION_TITLE, "{title}" }
            if entries.is_empty() {
                p { class: theme::MUTED, {empty_text.unwrap_or_else(|| "Nothing to show yet.".to_string())} }
            }
            ul { class: "legend",
                for entry in entries {
                    LegendRow { key: "{entry.key}", entry: entry.clone(), on_hover: move |(evt, entry): (MouseEvent, LegendEntry)| {
                        let content = TooltipContent::new(entry.label.clone()).line(entry.detail.clone());
                        tooltip.show(&evt, content, Some(entry.variant));
                    }, on_leave: move |_| tooltip.hide() }
                }
            }
        }
    }
}

#[component]
fn LegendRow(
    entry: LegendEntry,
    on_hover: EventHandler<(MouseEvent, LegendEntry)>,
    on_leave: EventHandler<()>,
) -> Element {
    let swatch_style = match &entry.border {
        Some(border) => format!("background: {}; border: 2px solid {border};", entry.color),
        None => format!("background: {};", entry.color),
    };
    let label_class = entry.class.clone().unwrap_or_default();
    let icon_uri = entry.icon.as_deref().map(assets::icon_src);
    let hovered = entry.clone();

    rsx! {
        li {
            class: "{theme::legend_row(entry.variant)}",
            onmouseenter: move |evt| on_hover.call((evt, hovered.clone())),
            onmouseleave: move |_| on_leave.call(()),
            span { class: "legend-swatch", style: "{swatch_style}" }
            if let Some(uri) = icon_uri {
                img { class: "legend-icon", src: "{uri}", alt: "" }
            }
            span { class: "legend-label {label_class}", "{entry.label}" }
            span { class: "legend-detail {theme::MUTED}", "{entry.detail}" }
        }
    }
}
