use std::sync::Arc;

use dioxus::prelude::*;

use crate::{
    app::{load_view, ready, use_dataset, Cache},
    domain::{commodity_entries, vessel_entries, ClassificationTables, DatasetKey},
    ui::{
        components::{dataset_panel::DatasetPanel, legend::Legend},
        theme,
    },
};

#[component]
pub fn TrafficExplorerPage() -> Element {
    let tables = use_context::<Arc<ClassificationTables>>();
    let cache = use_context::<Cache>();
    let vessels = use_dataset(DatasetKey::Vessels);
    let commodities = use_dataset(DatasetKey::Commodities);
    let transactions = use_dataset(DatasetKey::Transactions);

    let vessel_legend = vessel_entries(&tables, ready(&vessels).as_deref());
    let commodity_legend = ready(&commodities)
        .map(|data| commodity_entries(&tables, cache.asset_paths(), &data))
        .unwrap_or_default();

    rsx! {
        div { class: theme::PAGE,
            header { class: theme::PAGE_HEADER,
                h2 { "Traffic Explorer" }
                p { class: theme::MUTED, "Vessel movements and the commodities they carry." }
            }
            div { class: theme::PANEL_GRID,
                DatasetPanel { key_name: DatasetKey::Vessels, view: load_view(&vessels) }
                DatasetPanel { key_name: DatasetKey::Commodities, view: load_view(&commodities) }
                DatasetPanel { key_name: DatasetKey::Transactions, view: load_view(&transactions) }
            }
            div { class: theme::PANEL_GRID,
                Legend { title: "Vessel types".to_string(), entries: vessel_legend }
                Legend {
                    title: "Commodities".to_string(),
                    entries: commodity_legend,
                    empty_text: Some("Commodity list not loaded.".to_string()),
                }
            }
        }
    }
}
