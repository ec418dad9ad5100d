use std::sync::Arc;

use dioxus::prelude::*;
use tracing::{error, info, warn};

use crate::{
    domain::{
        load_tables_or_canonical, summarize, ClassificationTables, Dataset, DatasetKey,
        DatasetSummary, TooltipState, Viewport,
    },
    infra::{CacheState, DataSource, DatasetCache, FileFetcher, LoadError},
    ui::{
        components::{
            toast::{push_toast, Toast, ToastKind, ToastMessage},
            tooltip::{Tooltip, TooltipContent},
        },
        pages::{HarborInspectorPage, TrafficExplorerPage, TrajectoryAnalyzerPage},
        shell::Shell,
    },
    util::{assets, config::AppConfig},
};

/// Cache type shared through the component tree.
pub type Cache = DatasetCache<DataSource>;

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    TrafficExplorer {},
    #[route("/harborinspector")]
    HarborInspector {},
    #[route("/trajectoryanalyzer")]
    TrajectoryAnalyzer {},
}

/// Process-wide services built once at startup.
#[derive(Clone)]
pub struct Session {
    pub cache: Cache,
    pub tables: Arc<ClassificationTables>,
    pub viewport: Viewport,
    pub warnings: Vec<String>,
}

impl Session {
    pub fn start() -> Self {
        match AppConfig::from_env() {
            Ok(config) => Self::from_config(config, Vec::new()),
            Err(err) => {
                warn!(target: "config", error = %err, "invalid configuration; using defaults");
                Self::from_config(AppConfig::default(), vec![format!("{err}; using defaults.")])
            }
        }
    }

    pub fn from_config(config: AppConfig, mut warnings: Vec<String>) -> Self {
        let source = config.data_source().unwrap_or_else(|err| {
            error!(target: "config", error = %err, "data source unavailable; reading bundled files");
            warnings.push(format!("{err}; reading bundled data instead."));
            DataSource::Files(FileFetcher::new("public"))
        });

        let (tables, table_error) = load_tables_or_canonical(config.classification_file.as_deref());
        if let Some(err) = table_error {
            warnings.push(format!("{err}; using built-in classification."));
        }

        info!(
            target: "config",
            base_path = %config.base_path,
            source = ?config.source,
            "session started"
        );

        Self {
            cache: DatasetCache::new(source, config.asset_paths()),
            tables: Arc::new(tables),
            viewport: config.viewport,
            warnings,
        }
    }
}

#[component]
pub fn App() -> Element {
    let session = use_hook(Session::start);
    use_context_provider(|| session.cache.clone());
    use_context_provider(|| session.tables.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let viewport = use_signal(|| session.viewport);
    use_context_provider(|| viewport);

    let tooltip = use_signal(TooltipState::<TooltipContent>::default);
    use_context_provider(|| tooltip);

    use_hook({
        let warnings = session.warnings.clone();
        move || {
            for warning in warnings {
                push_toast(toasts, ToastKind::Warning, warning);
            }
        }
    });

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Tooltip {}
        Toast {}
    }
}

/// A dataset together with the cache slot it was served from.
#[derive(Clone, Debug)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub state: CacheState,
}

/// Loads `key` through the shared cache. Failures become an error toast; the
/// caller still receives the error so the panel can show it.
pub fn use_dataset(key: DatasetKey) -> Resource<Result<LoadedDataset, LoadError>> {
    let cache = use_context::<Cache>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    use_resource(move || {
        let cache = cache.clone();
        async move {
            match cache.load(key).await {
                Ok(dataset) => Ok(LoadedDataset {
                    dataset,
                    state: cache.state(key).await,
                }),
                Err(err) => {
                    push_toast(toasts, ToastKind::Error, format!("{err}"));
                    Err(err)
                }
            }
        }
    })
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoadView {
    Loading,
    Ready {
        summary: DatasetSummary,
        loaded_at: Option<String>,
    },
    Failed(String),
}

impl LoadView {
    pub fn from_result(result: Option<&Result<LoadedDataset, LoadError>>) -> Self {
        match result {
            None => LoadView::Loading,
            Some(Ok(loaded)) => LoadView::Ready {
                summary: summarize(&loaded.dataset),
                loaded_at: loaded.state.loaded_at_string(),
            },
            Some(Err(err)) => LoadView::Failed(err.to_string()),
        }
    }
}

/// The loaded dataset, if the resource has resolved successfully.
pub fn ready(resource: &Resource<Result<LoadedDataset, LoadError>>) -> Option<Dataset> {
    match &*resource.read() {
        Some(Ok(loaded)) => Some(Arc::clone(&loaded.dataset)),
        _ => None,
    }
}

pub fn load_view(resource: &Resource<Result<LoadedDataset, LoadError>>) -> LoadView {
    LoadView::from_result((*resource.read()).as_ref())
}

#[component]
pub fn TrafficExplorer() -> Element {
    rsx! { Shell { TrafficExplorerPage {} } }
}

#[component]
pub fn HarborInspector() -> Element {
    rsx! { Shell { HarborInspectorPage {} } }
}

#[component]
pub fn TrajectoryAnalyzer() -> Element {
    rsx! { Shell { TrajectoryAnalyzerPage {} } }
}
