//! Dataset loading: fetch collaborators and the session cache.

pub mod dataset_cache;
pub mod fetch;

#[allow(unused_imports)]
pub use dataset_cache::{CacheState, DatasetCache, LoadError};
#[allow(unused_imports)]
pub use fetch::{DataSource, FetchError, Fetcher, FileFetcher, HttpFetcher};
