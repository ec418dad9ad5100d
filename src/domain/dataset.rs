#![allow(dead_code)]

use std::{collections::HashMap, fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A loaded dataset. Shared read-only between every caller of the cache.
pub type Dataset = Arc<Value>;

/// Closed set of datasets the dashboard knows how to load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DatasetKey {
    Vessels,
    Pings,
    Transactions,
    Trajectories,
    Commodities,
    Geo,
    Documents,
    Locations,
    HarborReports,
}

impl DatasetKey {
    pub const ALL: [DatasetKey; 9] = [
        DatasetKey::Vessels,
        DatasetKey::Pings,
        DatasetKey::Transactions,
        DatasetKey::Trajectories,
        DatasetKey::Commodities,
        DatasetKey::Geo,
        DatasetKey::Documents,
        DatasetKey::Locations,
        DatasetKey::HarborReports,
    ];

    /// Key as used by the front end (`harborReports`, `geo`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKey::Vessels => "vessels",
            DatasetKey::Pings => "pings",
            DatasetKey::Transactions => "transactions",
            DatasetKey::Trajectories => "trajectories",
            DatasetKey::Commodities => "commodities",
            DatasetKey::Geo => "geo",
            DatasetKey::Documents => "documents",
            DatasetKey::Locations => "locations",
            DatasetKey::HarborReports => "harborReports",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == raw)
    }

    /// Resource path relative to the configured base path.
    pub fn resource_path(&self) -> &'static str {
        match self {
            DatasetKey::Vessels => "data/vessels.json",
            DatasetKey::Pings => "data/transponder_pings.json",
            DatasetKey::Transactions => "data/transactions.json",
            DatasetKey::Trajectories => "data/trajectories.json",
            DatasetKey::Commodities => "data/commodities.json",
            DatasetKey::Geo => "data/oceanus.geojson",
            DatasetKey::Documents => "data/documents.json",
            DatasetKey::Locations => "data/locations.json",
            DatasetKey::HarborReports => "data/harbor_reports.json",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DatasetKey::Vessels => "Vessels",
            DatasetKey::Pings => "Transponder pings",
            DatasetKey::Transactions => "Transactions",
            DatasetKey::Trajectories => "Trajectories",
            DatasetKey::Commodities => "Commodities",
            DatasetKey::Geo => "Geospatial zones",
            DatasetKey::Documents => "Documents",
            DatasetKey::Locations => "Locations",
            DatasetKey::HarborReports => "Harbor reports",
        }
    }
}

impl fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prefixes relative asset paths with the configured base path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetPaths {
    base: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::new("/")
    }
}

impl AssetPaths {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Joins `relative` onto the base path with exactly one `/` between them.
    /// Absolute URLs and empty input are passed through untouched.
    pub fn resolve(&self, relative: &str) -> String {
        if relative.is_empty() || relative.contains("://") {
            return relative.to_string();
        }
        let base = self.base.trim_end_matches('/');
        let relative = relative.trim_start_matches('/');
        format!("{base}/{relative}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatasetShape {
    FeatureCollection,
    Array,
    Object,
    Scalar,
}

impl DatasetShape {
    pub fn label(&self) -> &'static str {
        match self {
            DatasetShape::FeatureCollection => "features",
            DatasetShape::Array => "records",
            DatasetShape::Object => "entries",
            DatasetShape::Scalar => "value",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DatasetSummary {
    pub shape: DatasetShape,
    pub records: usize,
}

pub fn summarize(dataset: &Value) -> DatasetSummary {
    if let Some(features) = geojson_features(dataset) {
        return DatasetSummary {
            shape: DatasetShape::FeatureCollection,
            records: features.len(),
        };
    }
    match dataset {
        Value::Array(items) => DatasetSummary {
            shape: DatasetShape::Array,
            records: items.len(),
        },
        Value::Object(map) => DatasetSummary {
            shape: DatasetShape::Object,
            records: map.len(),
        },
        _ => DatasetSummary {
            shape: DatasetShape::Scalar,
            records: 1,
        },
    }
}

fn geojson_features(dataset: &Value) -> Option<&Vec<Value>> {
    let is_collection = dataset
        .get("type")
        .and_then(Value::as_str)
        .map(|kind| kind == "FeatureCollection")
        .unwrap_or(false);
    if !is_collection {
        return None;
    }
    dataset.get("features").and_then(Value::as_array)
}

/// Builds an id -> document index from the `documents` dataset.
/// Entries without a string or numeric `id` are skipped.
pub fn index_documents(documents: &Value) -> HashMap<String, &Value> {
    let Some(items) = documents.as_array() else {
        return HashMap::new();
    };
    items
        .iter()
        .filter_map(|doc| {
            let id = match doc.get("id")? {
                Value::String(id) => id.clone(),
                Value::Number(id) => id.to_string(),
                _ => return None,
            };
            Some((id, doc))
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneFeature {
    pub name: String,
    pub kind: String,
}

/// Lists named zones from a GeoJSON feature collection (`properties.Name` / `properties.Kind`).
pub fn zone_features(geo: &Value) -> Vec<ZoneFeature> {
    let Some(features) = geojson_features(geo) else {
        return Vec::new();
    };
    features
        .iter()
        .filter_map(|feature| {
            let props = feature.get("properties")?;
            let name = props.get("Name").and_then(Value::as_str)?;
            let kind = props.get("Kind").and_then(Value::as_str).unwrap_or_default();
            Some(ZoneFeature {
                name: name.to_string(),
                kind: kind.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolve_joins_with_single_separator() {
        let paths = AssetPaths::new("/oceanus/");
        assert_eq!(paths.resolve("data/vessels.json"), "/oceanus/data/vessels.json");
        assert_eq!(paths.resolve("/data/vessels.json"), "/oceanus/data/vessels.json");

        let root = AssetPaths::default();
        assert_eq!(root.resolve("data/oceanus.geojson"), "/data/oceanus.geojson");
    }

    #[test]
    fn resolve_passes_through_absolute_and_empty() {
        let paths = AssetPaths::new("/app");
        assert_eq!(paths.resolve("https://cdn.test/x.json"), "https://cdn.test/x.json");
        assert_eq!(paths.resolve(""), "");
    }

    #[test]
    fn keys_round_trip_through_front_end_names() {
        for key in DatasetKey::ALL {
            assert_eq!(DatasetKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(DatasetKey::parse("harborReports"), Some(DatasetKey::HarborReports));
        assert_eq!(DatasetKey::parse("ships"), None);
        assert_eq!(DatasetKey::Pings.resource_path(), "data/transponder_pings.json");
    }

    #[test]
    fn summarize_detects_shapes() {
        let geo = json!({"type": "FeatureCollection", "features": [{}, {}, {}]});
        assert_eq!(
            summarize(&geo),
            DatasetSummary { shape: DatasetShape::FeatureCollection, records: 3 }
        );
        assert_eq!(summarize(&json!([1, 2])).records, 2);
        assert_eq!(summarize(&json!({"a": 1})).shape, DatasetShape::Object);
        assert_eq!(summarize(&json!(null)).shape, DatasetShape::Scalar);
    }

    #[test]
    fn index_documents_skips_entries_without_id() {
        let docs = json!([
            {"id": "doc-1", "title": "Catch report"},
            {"id": 7, "title": "Manifest"},
            {"title": "orphan"},
            {"id": null}
        ]);
        let index = index_documents(&docs);
        assert_eq!(index.len(), 2);
        assert_eq!(index["doc-1"]["title"], "Catch report");
        assert_eq!(index["7"]["title"], "Manifest");
        assert!(index_documents(&json!({"id": "x"})).is_empty());
    }

    #[test]
    fn zone_features_reads_name_and_kind() {
        let geo = json!({
            "type": "FeatureCollection",
            "features": [
                {"properties": {"Name": "Nemo Reef", "Kind": "Ecological Preserve"}},
                {"properties": {"Name": "Haacklee"}},
                {"properties": {"Kind": "buoy"}}
            ]
        });
        let zones = zone_features(&geo);
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].kind, "Ecological Preserve");
        assert_eq!(zones[1].kind, "");
    }
}
