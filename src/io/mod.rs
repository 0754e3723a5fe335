mod geojson;
mod summary;

pub use geojson::{
    clusters_to_geojson, feature_coordinates, features_to_geojson, records_to_geojson,
    ring_to_coordinates, to_pretty_json, write_geojson, FEATURES_NAME, ZONES_NAME,
};
pub use summary::{format_table, summarize_top, ZoneSummary};
