use dioxus::prelude::*;

use crate::app::LoadView;
use crate::domain::DatasetKey;
use crate::ui::theme;

#[component]
pub fn DatasetPanel(key_name: DatasetKey, view: LoadView) -> Element {
    let (label, badge) = theme::load_badge(&view);
    let detail = match &view {
        LoadView::Loading => format!("Fetching {}…", key_name.resource_path()),
        LoadView::Ready { summary, .. } => format!("{} {}", summary.records, summary.shape.label()),
        LoadView::Failed(message) => message.clone(),
    };
    let loaded_at = match &view {
        LoadView::Ready {
            loaded_at: Some(at), ..
        } => Some(format!("Cached since {at}")),
        _ => None,
    };
    let detail_class = if matches!(view, LoadView::Failed(_)) {
        "panel-error"
    } else {
        theme::MUTED
    };

    rsx! {
        div { class: theme::PANEL,
            div { class: "panel-heading",
                h3 { class: theme::SECTION_TITLE, "{key_name.label()}" }
                span { class: "{badge}", "{label}" }
            }
            p { class: detail_class, "{detail}" }
            if let Some(loaded_at) = loaded_at {
                p { class: theme::MUTED, "{loaded_at}" }
            }
        }
    }
}
