//! Fetch collaborators backing the dataset cache.
//!
//! - [`HttpFetcher`] pulls JSON over HTTP relative to a configured origin.
//! - [`FileFetcher`] reads JSON from a local directory (bundled `public/` data).

use std::{future::Future, io, path::PathBuf};

use reqwest::{Client, Url};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = concat!("oceanus-watch/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Resolves a resource path to a parsed JSON value. Contents are not interpreted.
pub trait Fetcher: Send + Sync + 'static {
    fn fetch_json(&self, path: &str) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

#[derive(Clone, Debug)]
pub struct HttpFetcher {
    http: Client,
    origin: Url,
}

impl HttpFetcher {
    pub fn new(mut origin: Url) -> Result<Self, FetchError> {
        // Without a trailing slash `join` would replace the last path segment.
        if !origin.path().ends_with('/') {
            let path = format!("{}/", origin.path());
            origin.set_path(&path);
        }
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, origin })
    }

    /// Paths are always resolved below the origin, even when they start with `/`.
    fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.origin.join(path.trim_start_matches('/'))
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch_json(&self, path: &str) -> Result<Value, FetchError> {
        let url = self.url(path)?;
        debug!(target: "fetch", %url, "requesting dataset");
        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Parse {
            path: path.to_string(),
            source,
        })
    }
}

#[derive(Clone, Debug)]
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn file_path(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

impl Fetcher for FileFetcher {
    async fn fetch_json(&self, path: &str) -> Result<Value, FetchError> {
        let file = self.file_path(path);
        debug!(target: "fetch", path = %file.display(), "reading dataset");
        let raw = tokio::fs::read(&file).await.map_err(|source| FetchError::Io {
            path: file.clone(),
            source,
        })?;
        serde_json::from_slice(&raw).map_err(|source| FetchError::Parse {
            path: path.to_string(),
            source,
        })
    }
}

/// The configured backing store, chosen once at startup.
#[derive(Clone, Debug)]
pub enum DataSource {
    Http(HttpFetcher),
    Files(FileFetcher),
}

impl Fetcher for DataSource {
    async fn fetch_json(&self, path: &str) -> Result<Value, FetchError> {
        match self {
            DataSource::Http(fetcher) => fetcher.fetch_json(path).await,
            DataSource::Files(fetcher) => fetcher.fetch_json(path).await,
        }
    }
}
