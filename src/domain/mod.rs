//! Dataset descriptors, classification tables and tooltip placement.

pub mod classification;
pub mod dataset;
pub mod legend;
pub mod tooltip;

#[allow(unused_imports)]
pub use classification::{
    commodity_color, commodity_icon, commodity_status, commodity_style_class,
    is_illegal_fishing_zone, load_tables_or_canonical, vessel_color, zone_border, zone_fill,
    ClassificationTables, CommodityStatus, StatusStyle, TableError, VesselType, ZoneKind,
    ZonePalette,
};
#[allow(unused_imports)]
pub use dataset::{
    index_documents, summarize, zone_features, AssetPaths, Dataset, DatasetKey, DatasetShape,
    DatasetSummary, ZoneFeature,
};
#[allow(unused_imports)]
pub use legend::{
    commodity_entries, count_by_vessel_type, protected_zone_entries, status_variant,
    vessel_entries, zone_entries, LegendEntry,
};
#[allow(unused_imports)]
pub use tooltip::{
    compute_position, hide, show, PointerEvent, TooltipGeometry, TooltipState, TooltipVariant,
    Viewport,
};
