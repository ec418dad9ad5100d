use std::sync::Arc;

use dioxus::prelude::*;

use crate::{
    app::{load_view, ready, use_dataset},
    domain::{zone_entries, ClassificationTables, DatasetKey},
    ui::{
        components::{dataset_panel::DatasetPanel, legend::Legend},
        theme,
    },
};

#[component]
pub fn TrajectoryAnalyzerPage() -> Element {
    let tables = use_context::<Arc<ClassificationTables>>();
    let trajectories = use_dataset(DatasetKey::Trajectories);
    let pings = use_dataset(DatasetKey::Pings);
    let geo = use_dataset(DatasetKey::Geo);

    let zones = ready(&geo)
        .map(|data| zone_entries(&tables, &data))
        .unwrap_or_default();

    rsx! {
        div { class: theme::PAGE,
            header { class: theme::PAGE_HEADER,
                h2 { "Trajectory Analyzer" }
                p { class: theme::MUTED, "Vessel tracks and transponder pings over the Oceanus zones." }
            }
            div { class: theme::PANEL_GRID,
                DatasetPanel { key_name: DatasetKey::Trajectories, view: load_view(&trajectories) }
                DatasetPanel { key_name: DatasetKey::Pings, view: load_view(&pings) }
                DatasetPanel { key_name: DatasetKey::Geo, view: load_view(&geo) }
            }
            Legend {
                title: "Zones".to_string(),
                entries: zones,
                empty_text: Some("Zone map not loaded.".to_string()),
            }
        }
    }
}
