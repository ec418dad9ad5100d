use std::sync::Arc;

use dioxus::prelude::*;

use crate::{
    app::{load_view, ready, use_dataset},
    domain::{index_documents, protected_zone_entries, ClassificationTables, DatasetKey},
    ui::{
        components::{dataset_panel::DatasetPanel, legend::Legend},
        theme,
    },
};

#[component]
pub fn HarborInspectorPage() -> Element {
    let tables = use_context::<Arc<ClassificationTables>>();
    let reports = use_dataset(DatasetKey::HarborReports);
    let documents = use_dataset(DatasetKey::Documents);
    let locations = use_dataset(DatasetKey::Locations);

    let indexed = ready(&documents)
        .map(|docs| index_documents(&docs).len())
        .unwrap_or(0);
    let zone_watchlist = protected_zone_entries(&tables);

    rsx! {
        div { class: theme::PAGE,
            header { class: theme::PAGE_HEADER,
                h2 { "Harbor Inspector" }
                p { class: theme::MUTED, "Harbor reports cross-checked against documents and known locations." }
            }
            div { class: theme::PANEL_GRID,
                DatasetPanel { key_name: DatasetKey::HarborReports, view: load_view(&reports) }
                DatasetPanel { key_name: DatasetKey::Documents, view: load_view(&documents) }
                DatasetPanel { key_name: DatasetKey::Locations, view: load_view(&locations) }
            }
            p { class: theme::MUTED, "{indexed} documents indexed by id." }
            Legend { title: "Protected zones".to_string(), entries: zone_watchlist }
        }
    }
}
