//! Startup configuration read from the environment.

use std::{collections::HashMap, path::PathBuf};

use reqwest::Url;
use thiserror::Error;

use crate::domain::{AssetPaths, Viewport};
use crate::infra::fetch::{DataSource, FetchError, FileFetcher, HttpFetcher};

pub const ENV_BASE_PATH: &str = "OCEANUS_BASE_PATH";
pub const ENV_DATA_URL: &str = "OCEANUS_DATA_URL";
pub const ENV_DATA_DIR: &str = "OCEANUS_DATA_DIR";
pub const ENV_CLASSIFICATION: &str = "OCEANUS_CLASSIFICATION";
pub const ENV_VIEWPORT: &str = "OCEANUS_VIEWPORT";

const DEFAULT_BASE_PATH: &str = "/";
const DEFAULT_DATA_DIR: &str = "public";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OCEANUS_DATA_URL is not a valid URL: {0}")]
    DataUrl(#[from] url::ParseError),
    #[error("OCEANUS_VIEWPORT must look like 1280x800, got {0:?}")]
    Viewport(String),
    #[error("failed to build data source: {0}")]
    Source(#[from] FetchError),
}

#[derive(Clone, Debug, PartialEq)]
pub enum SourceConfig {
    Http(Url),
    Directory(PathBuf),
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub base_path: String,
    pub source: SourceConfig,
    pub classification_file: Option<PathBuf>,
    pub viewport: Viewport,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            source: SourceConfig::Directory(PathBuf::from(DEFAULT_DATA_DIR)),
            classification_file: None,
            viewport: Viewport::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(|name| vars.get(name).cloned())
    }

    /// Builds the config from any variable lookup. Empty values count as unset.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(base) = get(ENV_BASE_PATH) {
            config.base_path = base;
        }

        config.source = match (get(ENV_DATA_URL), get(ENV_DATA_DIR)) {
            (Some(url), _) => SourceConfig::Http(Url::parse(&url)?),
            (None, Some(dir)) => SourceConfig::Directory(PathBuf::from(dir)),
            (None, None) => config.source,
        };

        config.classification_file = get(ENV_CLASSIFICATION).map(PathBuf::from);

        if let Some(raw) = get(ENV_VIEWPORT) {
            config.viewport = parse_viewport(&raw).ok_or(ConfigError::Viewport(raw))?;
        }

        Ok(config)
    }

    pub fn asset_paths(&self) -> AssetPaths {
        AssetPaths::new(self.base_path.clone())
    }

    pub fn data_source(&self) -> Result<DataSource, ConfigError> {
        Ok(match &self.source {
            SourceConfig::Http(origin) => DataSource::Http(HttpFetcher::new(origin.clone())?),
            SourceConfig::Directory(dir) => DataSource::Files(FileFetcher::new(dir.clone())),
        })
    }
}

fn parse_viewport(raw: &str) -> Option<Viewport> {
    let (width, height) = raw.trim().split_once(['x', 'X'])?;
    let width = width.trim().parse::<f64>().ok()?;
    let height = height.trim().parse::<f64>().ok()?;
    let usable = |side: f64| side.is_finite() && side > 0.0;
    (usable(width) && usable(height)).then(|| Viewport::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_vars(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_read_from_public_directory() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.asset_paths().resolve("data/vessels.json"), "/data/vessels.json");
    }

    #[test]
    fn data_url_wins_over_directory() {
        let config = config_from(&[
            (ENV_DATA_URL, "https://data.oceanus.test/"),
            (ENV_DATA_DIR, "/srv/oceanus"),
            (ENV_BASE_PATH, "/vast"),
        ])
        .unwrap();
        assert!(matches!(config.source, SourceConfig::Http(ref url) if url.host_str() == Some("data.oceanus.test")));
        assert_eq!(config.base_path, "/vast");
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = config_from(&[(ENV_DATA_URL, "  "), (ENV_DATA_DIR, "fixtures")]).unwrap();
        assert_eq!(config.source, SourceConfig::Directory(PathBuf::from("fixtures")));
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(matches!(
            config_from(&[(ENV_DATA_URL, "not a url")]),
            Err(ConfigError::DataUrl(_))
        ));
        assert!(matches!(
            config_from(&[(ENV_VIEWPORT, "wide")]),
            Err(ConfigError::Viewport(_))
        ));
        assert!(matches!(
            config_from(&[(ENV_VIEWPORT, "0x800")]),
            Err(ConfigError::Viewport(_))
        ));
        for raw in ["infxinf", "1280xinf", "NaNx800"] {
            assert!(
                matches!(config_from(&[(ENV_VIEWPORT, raw)]), Err(ConfigError::Viewport(_))),
                "{raw} accepted"
            );
        }
    }

    #[test]
    fn viewport_and_tables_are_read() {
        let config = config_from(&[
            (ENV_VIEWPORT, "1024x768"),
            (ENV_CLASSIFICATION, "tables.json"),
        ])
        .unwrap();
        assert_eq!(config.viewport, Viewport::new(1024.0, 768.0));
        assert_eq!(config.classification_file, Some(PathBuf::from("tables.json")));
    }
}
