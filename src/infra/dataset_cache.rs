#![allow(dead_code)]

//! Session-wide, single-flight dataset cache.
//!
//! - The first `load` for a key spawns exactly one fetch and publishes the
//!   pending load; overlapping callers wait on it instead of fetching again.
//! - A resolved dataset is kept for the rest of the process, no TTL.
//! - A failed load is handed to every waiter and the key becomes retryable.

use std::{collections::HashMap, sync::Arc};

use thiserror::Error;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

use crate::domain::{AssetPaths, Dataset, DatasetKey};
use crate::infra::fetch::{FetchError, Fetcher};

#[derive(Clone, Debug, Error)]
pub enum LoadError {
    #[error("failed to load {key} dataset: {source}")]
    Fetch {
        key: DatasetKey,
        #[source]
        source: Arc<FetchError>,
    },
    #[error("loading {0} dataset was interrupted")]
    Interrupted(DatasetKey),
}

impl LoadError {
    pub fn key(&self) -> DatasetKey {
        match self {
            LoadError::Fetch { key, .. } | LoadError::Interrupted(key) => *key,
        }
    }
}

type LoadOutcome = Result<Dataset, LoadError>;

enum Entry {
    Loading(watch::Receiver<Option<LoadOutcome>>),
    Resolved {
        dataset: Dataset,
        loaded_at: OffsetDateTime,
    },
}

/// Observable state of a cache slot. A failed load is reported to its waiters
/// and leaves the slot `Empty`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheState {
    Empty,
    Loading,
    Resolved { loaded_at: OffsetDateTime },
}

impl CacheState {
    pub fn loaded_at_string(&self) -> Option<String> {
        match self {
            CacheState::Resolved { loaded_at } => loaded_at.format(&Rfc3339).ok(),
            _ => None,
        }
    }
}

struct CacheInner<F> {
    fetcher: F,
    paths: AssetPaths,
    entries: Mutex<HashMap<DatasetKey, Entry>>,
}

pub struct DatasetCache<F> {
    inner: Arc<CacheInner<F>>,
}

impl<F> Clone for DatasetCache<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: Fetcher> DatasetCache<F> {
    pub fn new(fetcher: F, paths: AssetPaths) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                fetcher,
                paths,
                entries: Mutex::new(HashMap::new()),
            }),
        }
    }

    pub fn resolve_asset_path(&self, relative: &str) -> String {
        self.inner.paths.resolve(relative)
    }

    pub fn asset_paths(&self) -> &AssetPaths {
        &self.inner.paths
    }

    /// Returns the dataset for `key`, fetching it at most once per successful load.
    pub async fn load(&self, key: DatasetKey) -> Result<Dataset, LoadError> {
        let mut pending = {
            let mut entries = self.inner.entries.lock().await;
            match entries.get(&key) {
                Some(Entry::Resolved { dataset, .. }) => return Ok(Arc::clone(dataset)),
                Some(Entry::Loading(pending)) => {
                    debug!(target: "cache", %key, "attaching to in-flight load");
                    pending.clone()
                }
                None => {
                    let (tx, rx) = watch::channel(None);
                    entries.insert(key, Entry::Loading(rx.clone()));
                    self.spawn_fetch(key, tx);
                    rx
                }
            }
        };

        let outcome = match pending.wait_for(Option::is_some).await {
            Ok(published) => (*published).clone(),
            Err(_) => None,
        };

        match outcome {
            Some(outcome) => outcome,
            None => {
                self.reset_abandoned(key, &pending).await;
                Err(LoadError::Interrupted(key))
            }
        }
    }

    pub async fn state(&self, key: DatasetKey) -> CacheState {
        match self.inner.entries.lock().await.get(&key) {
            None => CacheState::Empty,
            Some(Entry::Loading(_)) => CacheState::Loading,
            Some(Entry::Resolved { loaded_at, .. }) => CacheState::Resolved {
                loaded_at: *loaded_at,
            },
        }
    }

    /// Runs the fetch on its own task so it completes even if the caller that
    /// started it is dropped.
    fn spawn_fetch(&self, key: DatasetKey, tx: watch::Sender<Option<LoadOutcome>>) {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let path = inner.paths.resolve(key.resource_path());
            info!(target: "cache", %key, %path, "fetching dataset");

            let outcome = inner
                .fetcher
                .fetch_json(&path)
                .await
                .map(Arc::new)
                .map_err(|err| LoadError::Fetch {
                    key,
                    source: Arc::new(err),
                });

            {
                let mut entries = inner.entries.lock().await;
                match &outcome {
                    Ok(dataset) => {
                        entries.insert(
                            key,
                            Entry::Resolved {
                                dataset: Arc::clone(dataset),
                                loaded_at: OffsetDateTime::now_utc(),
                            },
                        );
                        info!(target: "cache", %key, "dataset resolved");
                    }
                    Err(err) => {
                        entries.remove(&key);
                        warn!(target: "cache", %key, error = %err, "dataset load failed; key is retryable");
                    }
                }
            }

            tx.send_replace(Some(outcome));
        });
    }

    /// The fetch task died without publishing. Clear the slot if it still
    /// points at that load so the next call can retry.
    async fn reset_abandoned(&self, key: DatasetKey, pending: &watch::Receiver<Option<LoadOutcome>>) {
        let mut entries = self.inner.entries.lock().await;
        if let Some(Entry::Loading(current)) = entries.get(&key) {
            if current.same_channel(pending) {
                entries.remove(&key);
                warn!(target: "cache", %key, "fetch task ended without a result; key is retryable");
            }
        }
    }
}
