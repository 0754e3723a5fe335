#![doc = "Mineral-rights polygon classification and free-zone clustering"]
mod classify;
mod config;
mod engine;
mod error;
mod io;
mod record;
mod report;
mod zones;

#[doc(inline)]
pub use polyring::{parse_ring, AreaMode, LatLng, Ring};

#[doc(inline)]
pub use classify::{
    classify_all, classify_area_type, classify_record, detect_district,
    AreaType, Bound, ClassifiedFeature, District, DistrictRule, UNKNOWN_DISTRICT,
};

#[doc(inline)]
pub use config::EngineConfig;

#[doc(inline)]
pub use engine::{Engine, EngineOutput};

#[doc(inline)]
pub use error::ExportError;

#[doc(inline)]
pub use io::{
    clusters_to_geojson, feature_coordinates, features_to_geojson, format_table, records_to_geojson,
    ring_to_coordinates, summarize_top, to_pretty_json, write_geojson, ZoneSummary, FEATURES_NAME, ZONES_NAME,
};

#[doc(inline)]
pub use record::{
    available_minerals, dedupe_records, read_records_from_json_file, records_for_mineral,
    records_from_json_bytes, PolygonRecord,
};

#[doc(inline)]
pub use report::DatasetReport;

#[doc(inline)]
pub use zones::{
    cluster_free_polygons, filter_by_mineral, free_polygons, is_free, rank_clusters, top_n,
    Cluster, ClusterPoints, ExclusionSet, FreePolygon, MineralTally, VoterIndex, VoterPolicy,
    DEFAULT_TOP_N, PROXIMITY_THRESHOLD, UNKNOWN_MINERAL,
};
