//! Legend view models derived from datasets and the classification tables.

use std::collections::BTreeMap;

use serde_json::Value;

use super::classification::{ClassificationTables, CommodityStatus, VesselType};
use super::dataset::{zone_features, AssetPaths};
use super::tooltip::TooltipVariant;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub key: String,
    pub label: String,
    pub color: String,
    pub border: Option<String>,
    pub class: Option<String>,
    pub icon: Option<String>,
    pub detail: String,
    pub variant: TooltipVariant,
}

pub fn status_variant(status: CommodityStatus) -> TooltipVariant {
    match status {
        CommodityStatus::Legal => TooltipVariant::Info,
        CommodityStatus::Suspect => TooltipVariant::Warning,
        CommodityStatus::Illegal => TooltipVariant::Danger,
    }
}

/// Accepts either an array of `{id, name}` records or an object keyed by id.
/// Icons are resolved under `paths`.
pub fn commodity_entries(
    tables: &ClassificationTables,
    paths: &AssetPaths,
    commodities: &Value,
) -> Vec<LegendEntry> {
    let pairs: Vec<(String, String)> = match commodities {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| {
                let id = item.get("id").and_then(Value::as_str)?;
                let name = item.get("name").and_then(Value::as_str).unwrap_or(id);
                Some((id.to_string(), name.to_string()))
            })
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(id, item)| {
                let name = item.get("name").and_then(Value::as_str).unwrap_or(id);
                (id.clone(), name.to_string())
            })
            .collect(),
        _ => Vec::new(),
    };

    let mut entries: Vec<LegendEntry> = pairs
        .into_iter()
        .map(|(id, name)| {
            let status = tables.commodity_status(&id);
            let style = tables.status_style(status);
            LegendEntry {
                label: name,
                color: style.color.clone(),
                border: None,
                class: Some(style.class.clone()),
                icon: Some(tables.commodity_icon_path(&id, paths)),
                detail: status.label().to_string(),
                variant: status_variant(status),
                key: id,
            }
        })
        .collect();
    // Illegal first, then suspect, then legal; alphabetical within a status.
    entries.sort_by(|a, b| {
        let rank = |entry: &LegendEntry| tables.commodity_status(&entry.key);
        rank(b).cmp(&rank(a)).then_with(|| a.label.cmp(&b.label))
    });
    entries
}

/// Counts vessels per type from records carrying a `type` or `vessel_type` tag.
pub fn count_by_vessel_type(vessels: &Value) -> BTreeMap<VesselType, usize> {
    let mut counts = BTreeMap::new();
    let Some(items) = vessels.as_array() else {
        return counts;
    };
    for item in items {
        let tag = item
            .get("type")
            .or_else(|| item.get("vessel_type"))
            .and_then(Value::as_str)
            .unwrap_or_default();
        *counts.entry(VesselType::from_tag(tag)).or_insert(0) += 1;
    }
    counts
}

pub fn vessel_entries(tables: &ClassificationTables, vessels: Option<&Value>) -> Vec<LegendEntry> {
    let counts = vessels.map(count_by_vessel_type).unwrap_or_default();
    VesselType::ALL
        .into_iter()
        .map(|vessel_type| {
            let count = counts.get(&vessel_type).copied().unwrap_or(0);
            LegendEntry {
                key: format!("{vessel_type:?}"),
                label: vessel_type.label().to_string(),
                color: tables.vessel_type_color(vessel_type).to_string(),
                border: None,
                class: None,
                icon: None,
                detail: format!("{count} vessels"),
                variant: TooltipVariant::Default,
            }
        })
        .collect()
}

pub fn zone_entries(tables: &ClassificationTables, geo: &Value) -> Vec<LegendEntry> {
    zone_features(geo)
        .into_iter()
        .map(|zone| {
            let palette = tables.zone_palette(&zone.kind);
            let illegal = tables.is_illegal_fishing_zone(&zone.name);
            let kind = if zone.kind.is_empty() {
                "Unclassified"
            } else {
                zone.kind.as_str()
            };
            LegendEntry {
                key: zone.name.clone(),
                label: zone.name.clone(),
                color: palette.fill.clone(),
                border: Some(palette.border.clone()),
                class: None,
                icon: None,
                detail: if illegal {
                    format!("{kind} (no fishing)")
                } else {
                    kind.to_string()
                },
                variant: if illegal {
                    TooltipVariant::Danger
                } else {
                    TooltipVariant::Default
                },
            }
        })
        .collect()
}

/// Zones where fishing is prohibited, styled like illegal commodities.
pub fn protected_zone_entries(tables: &ClassificationTables) -> Vec<LegendEntry> {
    let color = &tables.status_style(CommodityStatus::Illegal).color;
    tables
        .illegal_fishing_zones
        .iter()
        .map(|name| LegendEntry {
            key: name.clone(),
            label: name.clone(),
            color: color.clone(),
            border: None,
            class: None,
            icon: None,
            detail: "Fishing prohibited".to_string(),
            variant: TooltipVariant::Danger,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn commodities_sort_by_severity_then_name() {
        let tables = ClassificationTables::canonical();
        let data = json!([
            {"id": "gadusnspecificatae4ba", "name": "Cod/Gadus n.specificatae"},
            {"id": "piscesfoetidaae7", "name": "Offidiaa/Piscis foetida"},
            {"id": "habeaspisces4eb", "name": "Sockfish/Pisces foetida"},
            {"id": "mystery", "name": "Abalone"}
        ]);
        let paths = AssetPaths::new("/oceanus");
        let entries = commodity_entries(tables, &paths, &data);
        let keys: Vec<_> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(
            keys,
            ["piscesfoetidaae7", "habeaspisces4eb", "mystery", "gadusnspecificatae4ba"]
        );
        assert_eq!(entries[0].class.as_deref(), Some("commodity-illegal"));
        assert_eq!(entries[0].variant, TooltipVariant::Danger);
        assert_eq!(entries[0].icon.as_deref(), Some("/oceanus/icons/fish-icon-illegal.svg"));
        assert_eq!(entries[1].icon.as_deref(), Some("/oceanus/icons/fish-icon-suspect.svg"));
        assert_eq!(entries[2].detail, "Legal");
    }

    #[test]
    fn commodities_accept_keyed_objects() {
        let tables = ClassificationTables::canonical();
        let data = json!({"piscessatisb87": {"name": "Sockfish"}, "other": {}});
        let paths = AssetPaths::default();
        let entries = commodity_entries(tables, &paths, &data);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "Sockfish");
        assert_eq!(entries[1].label, "other");
        assert!(commodity_entries(tables, &paths, &json!(42)).is_empty());
    }

    #[test]
    fn vessel_counts_fold_unknown_types_into_other() {
        let vessels = json!([
            {"type": "Entity.Vessel.FishingVessel"},
            {"type": "Entity.Vessel.FishingVessel"},
            {"vessel_type": "Entity.Vessel.CargoVessel"},
            {"type": "Entity.Vessel.Submarine"},
            {}
        ]);
        let counts = count_by_vessel_type(&vessels);
        assert_eq!(counts[&VesselType::Fishing], 2);
        assert_eq!(counts[&VesselType::Cargo], 1);
        assert_eq!(counts[&VesselType::Other], 2);

        let entries = vessel_entries(ClassificationTables::canonical(), Some(&vessels));
        assert_eq!(entries.len(), VesselType::ALL.len());
        assert_eq!(entries[0].detail, "2 vessels");
        assert_eq!(vessel_entries(ClassificationTables::canonical(), None)[0].detail, "0 vessels");
    }

    #[test]
    fn zones_flag_illegal_fishing_areas() {
        let tables = ClassificationTables::canonical();
        let geo = json!({
            "type": "FeatureCollection",
            "features": [
                {"properties": {"Name": "Nemo Reef", "Kind": "Ecological Preserve"}},
                {"properties": {"Name": "Cod Table", "Kind": "Fishing Ground"}},
                {"properties": {"Name": "Mystery Rock"}}
            ]
        });
        let entries = zone_entries(tables, &geo);
        assert_eq!(entries[0].variant, TooltipVariant::Danger);
        assert_eq!(entries[0].detail, "Ecological Preserve (no fishing)");
        assert_eq!(entries[1].color, tables.zone_fill("Fishing Ground"));
        assert_eq!(entries[2].color, tables.default_zone.fill);
        assert_eq!(entries[2].detail, "Unclassified");
    }

    #[test]
    fn protected_zones_list_every_illegal_fishing_zone() {
        let tables = ClassificationTables::canonical();
        let entries = protected_zone_entries(tables);
        let names: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(names, ["Don Limpet Preserve", "Ghoti Preserve", "Nemo Reef"]);
        assert!(entries.iter().all(|e| e.variant == TooltipVariant::Danger));
    }
}
