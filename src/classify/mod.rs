mod area_type;
mod district;

pub use area_type::{classify_area_type, AreaType};
pub use district::{detect_district, Bound, District, DistrictRule, UNKNOWN_DISTRICT};

use polyring::Ring;
use serde::Serialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::record::PolygonRecord;

/// A record with its derived area type, district, and area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedFeature {
    pub mineral: String,
    pub company_name: String,
    pub grant_status: String,
    pub area_type: AreaType,
    pub district: District,
    pub area_km2: f64,
    pub ring: Ring,
}

/// Classify one record. Unparseable geometry yields an empty ring, zero area
/// and an unknown district.
pub fn classify_record(record: &PolygonRecord, config: &EngineConfig) -> ClassifiedFeature {
    let ring = record.ring();
    ClassifiedFeature {
        mineral: record.mineral().to_string(),
        company_name: record.company_name().to_string(),
        grant_status: record.grant_status().to_string(),
        area_type: classify_area_type(record.grant_status.as_deref()),
        district: detect_district(&ring, &config.district_rules),
        area_km2: config.feature_area.area_km2(&ring),
        ring,
    }
}

/// Classify every record in input order.
///
/// With `skip_empty_geometry` set, records whose geometry has no coordinate
/// pairs are dropped instead of exported with a zero area.
pub fn classify_all(records: &[PolygonRecord], config: &EngineConfig) -> Vec<ClassifiedFeature> {
    let mut features = Vec::with_capacity(records.len());
    let mut empty = 0usize;

    for record in records {
        let feature = classify_record(record, config);
        if feature.ring.is_empty() {
            empty += 1;
            if config.skip_empty_geometry { continue }
        }
        features.push(feature);
    }

    if empty > 0 {
        debug!(empty, skipped = config.skip_empty_geometry, "[classify] records without usable geometry");
    }
    features
}
