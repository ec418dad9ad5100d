#![allow(dead_code)]

//! Classification tables and the lookups that turn entity identifiers into
//! visual encodings (colors, icons, CSS classes).
//!
//! Unknown identifiers never fail: commodities default to [`CommodityStatus::Legal`],
//! vessel types to [`VesselType::Other`], zone kinds to the default palette.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs, io,
    path::Path,
    sync::OnceLock,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use super::dataset::AssetPaths;

const FALLBACK_VESSEL_COLOR: &str = "#9e9e9e";
const ICON_DIR: &str = "icons";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommodityStatus {
    Legal,
    Suspect,
    Illegal,
}

impl CommodityStatus {
    pub const ALL: [CommodityStatus; 3] = [
        CommodityStatus::Legal,
        CommodityStatus::Suspect,
        CommodityStatus::Illegal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CommodityStatus::Legal => "Legal",
            CommodityStatus::Suspect => "Suspect",
            CommodityStatus::Illegal => "Illegal",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VesselType {
    Fishing,
    Cargo,
    FerryPassenger,
    FerryCargo,
    Research,
    Tour,
    Other,
}

impl VesselType {
    pub const ALL: [VesselType; 7] = [
        VesselType::Fishing,
        VesselType::Cargo,
        VesselType::FerryPassenger,
        VesselType::FerryCargo,
        VesselType::Research,
        VesselType::Tour,
        VesselType::Other,
    ];

    /// Accepts graph tags (`Entity.Vessel.FishingVessel`) and short names
    /// (`FishingVessel`, `fishing`). Anything unrecognised is [`VesselType::Other`].
    pub fn from_tag(tag: &str) -> Self {
        let short = tag.trim().trim_start_matches("Entity.Vessel.");
        match normalize(short).as_str() {
            "fishing" | "fishingvessel" => VesselType::Fishing,
            "cargo" | "cargovessel" => VesselType::Cargo,
            "ferrypassenger" | "passengerferry" => VesselType::FerryPassenger,
            "ferrycargo" | "cargoferry" => VesselType::FerryCargo,
            "research" | "researchvessel" => VesselType::Research,
            "tour" | "tourvessel" => VesselType::Tour,
            _ => VesselType::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VesselType::Fishing => "Fishing vessel",
            VesselType::Cargo => "Cargo vessel",
            VesselType::FerryPassenger => "Passenger ferry",
            VesselType::FerryCargo => "Cargo ferry",
            VesselType::Research => "Research vessel",
            VesselType::Tour => "Tour vessel",
            VesselType::Other => "Other",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZoneKind {
    FishingGround,
    EcologicalPreserve,
    Island,
    Buoy,
    City,
}

impl ZoneKind {
    pub const ALL: [ZoneKind; 5] = [
        ZoneKind::FishingGround,
        ZoneKind::EcologicalPreserve,
        ZoneKind::Island,
        ZoneKind::Buoy,
        ZoneKind::City,
    ];

    /// Matches GeoJSON `Kind` values case-insensitively (`Fishing Ground`, `buoy`, `fishing_ground`).
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "fishingground" => Some(ZoneKind::FishingGround),
            "ecologicalpreserve" => Some(ZoneKind::EcologicalPreserve),
            "island" => Some(ZoneKind::Island),
            "buoy" => Some(ZoneKind::Buoy),
            "city" => Some(ZoneKind::City),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ZoneKind::FishingGround => "Fishing ground",
            ZoneKind::EcologicalPreserve => "Ecological preserve",
            ZoneKind::Island => "Island",
            ZoneKind::Buoy => "Buoy",
            ZoneKind::City => "City",
        }
    }
}

fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-' | '.'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusStyle {
    pub color: String,
    pub icon: String,
    pub class: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZonePalette {
    pub fill: String,
    pub border: String,
}

impl ZonePalette {
    fn new(fill: &str, border: &str) -> Self {
        Self {
            fill: fill.to_string(),
            border: border.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read classification tables: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse classification tables: {0}")]
    Json(#[from] serde_json::Error),
    #[error("commodity {0} is listed as both illegal and suspect")]
    Overlap(String),
    #[error("no style configured for {0:?} commodities")]
    MissingStatusStyle(CommodityStatus),
}

/// Immutable lookup tables. Every derived visual reads through these, so
/// swapping the tables is enough to restyle the dashboard.
///
/// Deserializing always validates; overlapping or incomplete tables are rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableSource")]
pub struct ClassificationTables {
    pub illegal_commodities: BTreeSet<String>,
    pub suspect_commodities: BTreeSet<String>,
    pub status_styles: BTreeMap<CommodityStatus, StatusStyle>,
    pub vessel_colors: BTreeMap<VesselType, String>,
    pub zone_palettes: BTreeMap<ZoneKind, ZonePalette>,
    pub default_zone: ZonePalette,
    pub illegal_fishing_zones: BTreeSet<String>,
}

/// Unvalidated wire form of [`ClassificationTables`].
#[derive(Deserialize)]
struct TableSource {
    illegal_commodities: BTreeSet<String>,
    #[serde(default)]
    suspect_commodities: BTreeSet<String>,
    status_styles: BTreeMap<CommodityStatus, StatusStyle>,
    #[serde(default)]
    vessel_colors: BTreeMap<VesselType, String>,
    #[serde(default)]
    zone_palettes: BTreeMap<ZoneKind, ZonePalette>,
    default_zone: ZonePalette,
    #[serde(default)]
    illegal_fishing_zones: BTreeSet<String>,
}

impl TryFrom<TableSource> for ClassificationTables {
    type Error = TableError;

    fn try_from(source: TableSource) -> Result<Self, Self::Error> {
        let tables = Self {
            illegal_commodities: source.illegal_commodities,
            suspect_commodities: source.suspect_commodities,
            status_styles: source.status_styles,
            vessel_colors: source.vessel_colors,
            zone_palettes: source.zone_palettes,
            default_zone: source.default_zone,
            illegal_fishing_zones: source.illegal_fishing_zones,
        };
        tables.validate()?;
        Ok(tables)
    }
}

static CANONICAL: OnceLock<ClassificationTables> = OnceLock::new();

impl ClassificationTables {
    /// Built-in tables shared by the whole process.
    pub fn canonical() -> &'static ClassificationTables {
        CANONICAL.get_or_init(Self::builtin)
    }

    fn builtin() -> Self {
        let set = |ids: &[&str]| ids.iter().map(|id| id.to_string()).collect::<BTreeSet<_>>();
        let style = |color: &str, icon: &str, class: &str| StatusStyle {
            color: color.to_string(),
            icon: icon.to_string(),
            class: class.to_string(),
        };

        Self {
            illegal_commodities: set(&["piscesfoetidaae7", "piscisosseusb6d", "piscessatisb87"]),
            suspect_commodities: set(&["habeaspisces4eb", "labridaenrefert9be"]),
            status_styles: BTreeMap::from([
                (
                    CommodityStatus::Legal,
                    style("#4caf50", "fish-icon-default.svg", "commodity-legal"),
                ),
                (
                    CommodityStatus::Suspect,
                    style("#ff9800", "fish-icon-suspect.svg", "commodity-suspect"),
                ),
                (
                    CommodityStatus::Illegal,
                    style("#e53935", "fish-icon-illegal.svg", "commodity-illegal"),
                ),
            ]),
            vessel_colors: BTreeMap::from([
                (VesselType::Fishing, "#1f77b4".to_string()),
                (VesselType::Cargo, "#ff7f0e".to_string()),
                (VesselType::FerryPassenger, "#2ca02c".to_string()),
                (VesselType::FerryCargo, "#d62728".to_string()),
                (VesselType::Research, "#9467bd".to_string()),
                (VesselType::Tour, "#8c564b".to_string()),
                (VesselType::Other, FALLBACK_VESSEL_COLOR.to_string()),
            ]),
            zone_palettes: BTreeMap::from([
                (ZoneKind::FishingGround, ZonePalette::new("#bde0fe", "#4895ef")),
                (ZoneKind::EcologicalPreserve, ZonePalette::new("#d8f3dc", "#40916c")),
                (ZoneKind::Island, ZonePalette::new("#f4e3c1", "#a07c47")),
                (ZoneKind::Buoy, ZonePalette::new("#ffd166", "#e09f3e")),
                (ZoneKind::City, ZonePalette::new("#adb5bd", "#495057")),
            ]),
            default_zone: ZonePalette::new("#e9ecef", "#868e96"),
            illegal_fishing_zones: set(&["Don Limpet Preserve", "Nemo Reef", "Ghoti Preserve"]),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, TableError> {
        let source: TableSource = serde_json::from_str(raw)?;
        Self::try_from(source)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, TableError> {
        let raw = fs::read_to_string(path)?;
        let tables = Self::from_json_str(&raw)?;
        info!(
            target: "classification",
            path = %path.display(),
            illegal = tables.illegal_commodities.len(),
            suspect = tables.suspect_commodities.len(),
            "loaded classification tables"
        );
        Ok(tables)
    }

    /// Illegal and suspect sets must be disjoint and every status needs a style.
    pub fn validate(&self) -> Result<(), TableError> {
        if let Some(id) = self
            .illegal_commodities
            .intersection(&self.suspect_commodities)
            .next()
        {
            return Err(TableError::Overlap(id.clone()));
        }
        for status in CommodityStatus::ALL {
            if !self.status_styles.contains_key(&status) {
                return Err(TableError::MissingStatusStyle(status));
            }
        }
        Ok(())
    }

    pub fn commodity_status(&self, id: &str) -> CommodityStatus {
        if self.illegal_commodities.contains(id) {
            CommodityStatus::Illegal
        } else if self.suspect_commodities.contains(id) {
            CommodityStatus::Suspect
        } else {
            CommodityStatus::Legal
        }
    }

    pub fn status_style(&self, status: CommodityStatus) -> &StatusStyle {
        // validate() guarantees every status is present; tables built by hand
        // without validation fall back to the canonical legal style.
        self.status_styles
            .get(&status)
            .or_else(|| self.status_styles.get(&CommodityStatus::Legal))
            .unwrap_or_else(|| Self::canonical().legal_style())
    }

    fn legal_style(&self) -> &StatusStyle {
        &self.status_styles[&CommodityStatus::Legal]
    }

    pub fn commodity_color(&self, id: &str) -> &str {
        &self.status_style(self.commodity_status(id)).color
    }

    pub fn commodity_icon(&self, id: &str) -> &str {
        &self.status_style(self.commodity_status(id)).icon
    }

    pub fn commodity_style_class(&self, id: &str) -> &str {
        &self.status_style(self.commodity_status(id)).class
    }

    pub fn commodity_icon_path(&self, id: &str, paths: &AssetPaths) -> String {
        paths.resolve(&format!("{ICON_DIR}/{}", self.commodity_icon(id)))
    }

    pub fn vessel_type_color(&self, vessel_type: VesselType) -> &str {
        self.vessel_colors
            .get(&vessel_type)
            .or_else(|| self.vessel_colors.get(&VesselType::Other))
            .map(String::as_str)
            .unwrap_or(FALLBACK_VESSEL_COLOR)
    }

    pub fn vessel_color(&self, tag: &str) -> &str {
        self.vessel_type_color(VesselType::from_tag(tag))
    }

    pub fn zone_palette(&self, kind: &str) -> &ZonePalette {
        match ZoneKind::parse(kind) {
            Some(kind) => self.zone_kind_palette(kind),
            None => &self.default_zone,
        }
    }

    pub fn zone_kind_palette(&self, kind: ZoneKind) -> &ZonePalette {
        self.zone_palettes.get(&kind).unwrap_or(&self.default_zone)
    }

    pub fn zone_fill(&self, kind: &str) -> &str {
        &self.zone_palette(kind).fill
    }

    pub fn zone_border(&self, kind: &str) -> &str {
        &self.zone_palette(kind).border
    }

    pub fn is_illegal_fishing_zone(&self, name: &str) -> bool {
        self.illegal_fishing_zones.contains(name.trim())
    }
}

/// Loads override tables from `path`, falling back to the canonical tables when
/// the file is unreadable or invalid. The error is returned alongside so the
/// caller can surface it.
pub fn load_tables_or_canonical(path: Option<&Path>) -> (ClassificationTables, Option<TableError>) {
    let Some(path) = path else {
        return (ClassificationTables::canonical().clone(), None);
    };
    match ClassificationTables::load_from_path(path) {
        Ok(tables) => (tables, None),
        Err(err) => {
            warn!(
                target: "classification",
                path = %path.display(),
                error = %err,
                "falling back to built-in classification tables"
            );
            (ClassificationTables::canonical().clone(), Some(err))
        }
    }
}

pub fn commodity_status(id: &str) -> CommodityStatus {
    ClassificationTables::canonical().commodity_status(id)
}

pub fn commodity_color(id: &str) -> &'static str {
    ClassificationTables::canonical().commodity_color(id)
}

pub fn commodity_icon(id: &str) -> &'static str {
    ClassificationTables::canonical().commodity_icon(id)
}

pub fn commodity_style_class(id: &str) -> &'static str {
    ClassificationTables::canonical().commodity_style_class(id)
}

pub fn vessel_color(tag: &str) -> &'static str {
    ClassificationTables::canonical().vessel_color(tag)
}

pub fn zone_fill(kind: &str) -> &'static str {
    ClassificationTables::canonical().zone_fill(kind)
}

pub fn zone_border(kind: &str) -> &'static str {
    ClassificationTables::canonical().zone_border(kind)
}

pub fn is_illegal_fishing_zone(name: &str) -> bool {
    ClassificationTables::canonical().is_illegal_fishing_zone(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_sets_are_disjoint() {
        let tables = ClassificationTables::canonical();
        assert!(tables.validate().is_ok());
        assert!(tables
            .illegal_commodities
            .is_disjoint(&tables.suspect_commodities));
    }

    #[test]
    fn status_follows_table_membership() {
        assert_eq!(commodity_status("piscesfoetidaae7"), CommodityStatus::Illegal);
        assert_eq!(commodity_status("habeaspisces4eb"), CommodityStatus::Suspect);
        assert_eq!(commodity_status("gadusnspecificatae4ba"), CommodityStatus::Legal);
        for _ in 0..3 {
            assert_eq!(commodity_status("piscessatisb87"), CommodityStatus::Illegal);
        }
    }

    #[test]
    fn unknown_commodity_uses_legal_visuals() {
        let tables = ClassificationTables::canonical();
        let legal = tables.status_style(CommodityStatus::Legal);
        assert_eq!(commodity_status("not-a-fish"), CommodityStatus::Legal);
        assert_eq!(commodity_color("not-a-fish"), legal.color);
        assert_eq!(commodity_icon("not-a-fish"), legal.icon);
        assert_eq!(commodity_style_class(""), legal.class);
    }

    #[test]
    fn visuals_track_status_changes() {
        let mut tables = ClassificationTables::canonical().clone();
        let id = "thunnininveradb7";
        assert_eq!(tables.commodity_style_class(id), "commodity-legal");

        tables.suspect_commodities.insert(id.to_string());
        let suspect = tables.status_style(CommodityStatus::Suspect).clone();
        assert_eq!(tables.commodity_color(id), suspect.color);
        assert_eq!(tables.commodity_icon(id), suspect.icon);
        assert_eq!(tables.commodity_style_class(id), suspect.class);
    }

    #[test]
    fn illegal_takes_precedence_when_sets_overlap() {
        let mut tables = ClassificationTables::canonical().clone();
        tables.suspect_commodities.insert("piscesfoetidaae7".into());
        assert_eq!(tables.commodity_status("piscesfoetidaae7"), CommodityStatus::Illegal);
        assert!(matches!(tables.validate(), Err(TableError::Overlap(id)) if id == "piscesfoetidaae7"));
    }

    #[test]
    fn icon_path_goes_through_base_path() {
        let tables = ClassificationTables::canonical();
        let paths = AssetPaths::new("/oceanus");
        assert_eq!(
            tables.commodity_icon_path("piscisosseusb6d", &paths),
            "/oceanus/icons/fish-icon-illegal.svg"
        );
    }

    #[test]
    fn vessel_tags_parse_in_both_forms() {
        assert_eq!(VesselType::from_tag("Entity.Vessel.FishingVessel"), VesselType::Fishing);
        assert_eq!(VesselType::from_tag("Entity.Vessel.Ferry.Passenger"), VesselType::FerryPassenger);
        assert_eq!(VesselType::from_tag("cargo"), VesselType::Cargo);
        assert_eq!(VesselType::from_tag("Entity.Vessel.Submarine"), VesselType::Other);
    }

    #[test]
    fn unknown_vessel_type_uses_other_color() {
        let other = ClassificationTables::canonical().vessel_type_color(VesselType::Other);
        assert_eq!(vessel_color("hovercraft"), other);
        assert_eq!(vessel_color("Entity.Vessel.Tour"), "#8c564b");

        let mut tables = ClassificationTables::canonical().clone();
        tables.vessel_colors.remove(&VesselType::Research);
        assert_eq!(tables.vessel_color("research"), other);
        tables.vessel_colors.clear();
        assert_eq!(tables.vessel_color("research"), FALLBACK_VESSEL_COLOR);
    }

    #[test]
    fn zone_kinds_fall_back_to_default_palette() {
        let tables = ClassificationTables::canonical();
        assert_eq!(zone_fill("Fishing Ground"), "#bde0fe");
        assert_eq!(zone_border("fishing_ground"), "#4895ef");
        assert_eq!(zone_fill("buoy"), "#ffd166");
        assert_eq!(zone_fill("volcano"), tables.default_zone.fill);
        assert_eq!(zone_border(""), tables.default_zone.border);
    }

    #[test]
    fn illegal_fishing_zones_match_by_name() {
        assert!(is_illegal_fishing_zone("Nemo Reef"));
        assert!(is_illegal_fishing_zone(" Ghoti Preserve "));
        assert!(!is_illegal_fishing_zone("Cod Table"));
    }

    #[test]
    fn external_tables_are_validated() {
        let raw = r##"{
            "illegal_commodities": ["a"],
            "suspect_commodities": ["b"],
            "status_styles": {
                "legal": {"color": "#0f0", "icon": "l.svg", "class": "ok"},
                "suspect": {"color": "#ff0", "icon": "s.svg", "class": "maybe"},
                "illegal": {"color": "#f00", "icon": "i.svg", "class": "bad"}
            },
            "vessel_colors": {"Fishing": "#123456"},
            "default_zone": {"fill": "#fff", "border": "#000"}
        }"##;
        let tables = ClassificationTables::from_json_str(raw).unwrap();
        assert_eq!(tables.commodity_style_class("b"), "maybe");
        assert_eq!(tables.vessel_color("fishing"), "#123456");
        assert_eq!(tables.vessel_color("cargo"), FALLBACK_VESSEL_COLOR);
        assert_eq!(tables.zone_fill("island"), "#fff");

        let overlapping = raw.replace(r#"["b"]"#, r#"["a"]"#);
        assert!(matches!(
            ClassificationTables::from_json_str(&overlapping),
            Err(TableError::Overlap(_))
        ));

        let missing_style = raw.replace(r##""suspect": {"color": "#ff0", "icon": "s.svg", "class": "maybe"},"##, "");
        assert!(matches!(
            ClassificationTables::from_json_str(&missing_style),
            Err(TableError::MissingStatusStyle(CommodityStatus::Suspect))
        ));
    }

    #[test]
    fn plain_deserialization_validates_tables() {
        let canonical = ClassificationTables::canonical();
        let json = serde_json::to_string(canonical).unwrap();
        let decoded: ClassificationTables = serde_json::from_str(&json).unwrap();
        assert_eq!(&decoded, canonical);

        let mut overlapping = canonical.clone();
        overlapping.suspect_commodities.insert("piscesfoetidaae7".to_string());
        let json = serde_json::to_string(&overlapping).unwrap();
        let err = serde_json::from_str::<ClassificationTables>(&json).unwrap_err();
        assert!(err.to_string().contains("piscesfoetidaae7 is listed as both illegal and suspect"));
    }

    #[test]
    fn missing_override_file_falls_back() {
        let (tables, err) =
            load_tables_or_canonical(Some(Path::new("/definitely/not/here/tables.json")));
        assert_eq!(&tables, ClassificationTables::canonical());
        assert!(matches!(err, Some(TableError::Io(_))));

        let (_, none) = load_tables_or_canonical(None);
        assert!(none.is_none());
    }
}
