use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{anyhow, Context, Result};
use polyring::Ring;
use serde_json::{json, Value};

use crate::classify::ClassifiedFeature;
use crate::record::PolygonRecord;
use crate::zones::{Cluster, UNKNOWN_MINERAL};

/// Collection name of the classified export.
pub const FEATURES_NAME: &str = "GB_Complete_Mineral_Resources";

/// Collection name of the free-zone export.
pub const ZONES_NAME: &str = "GB_Free_Areas_Potential";

/// GeoJSON Polygon coordinates for a ring: one open `[lng, lat]` ring.
/// This is the only place the (lat, lng) ring order is swapped.
pub fn ring_to_coordinates(ring: &Ring) -> Value {
    let exterior: Vec<[f64; 2]> = ring.to_line_string().coords()
        .map(|c| [c.x, c.y])
        .collect();
    json!([exterior])
}

fn polygon_feature(ring: &Ring, properties: Value) -> Value {
    json!({
        "type": "Feature",
        "properties": properties,
        "geometry": {
            "type": "Polygon",
            "coordinates": ring_to_coordinates(ring),
        },
    })
}

fn collection(name: &str, features: Vec<Value>) -> Value {
    json!({
        "type": "FeatureCollection",
        "name": name,
        "features": features,
    })
}

#[inline]
fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}

/// Export classified features. Missing attributes get the portal's
/// placeholders, and areas are written with two decimals.
pub fn features_to_geojson(features: &[ClassifiedFeature], name: &str, data_source: &str) -> Value {
    let features = features.iter().map(|f| {
        polygon_feature(&f.ring, json!({
            "mineral": or_placeholder(&f.mineral, UNKNOWN_MINERAL),
            "company_name": or_placeholder(&f.company_name, "N/A"),
            "grant_status": or_placeholder(&f.grant_status, "N/A"),
            "area_type": f.area_type.label(),
            "district": f.district.as_str(),
            "area_km2": format!("{:.2}", f.area_km2),
            "data_source": data_source,
        }))
    }).collect();
    collection(name, features)
}

/// Export ranked clusters; `cluster` is the 1-based rank.
pub fn clusters_to_geojson(clusters: &[Cluster], name: &str) -> Value {
    let features = clusters.iter().enumerate().map(|(i, c)| {
        polygon_feature(c.points(), json!({
            "cluster": i + 1,
            "points": c.point_count(),
            "area_km2": format!("{:.2}", c.area_km2()),
            "potentialMineral": c.potential_mineral(),
        }))
    }).collect();
    collection(name, features)
}

/// Export raw records for one mineral with their attributes as supplied.
pub fn records_to_geojson(records: &[&PolygonRecord], name: &str) -> Value {
    let features = records.iter().map(|r| {
        polygon_feature(&r.ring(), json!({
            "mineral": r.mineral(),
            "company": r.company_name(),
            "status": r.grant_status(),
        }))
    }).collect();
    collection(name, features)
}

/// Read back the exterior `[lng, lat]` pairs of a Polygon feature.
pub fn feature_coordinates(feature: &Value) -> Result<Vec<[f64; 2]>> {
    let ring = feature["geometry"]["coordinates"].get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow!("[feature_coordinates] Feature has no exterior ring"))?;

    ring.iter().map(|pair| {
        match (pair.get(0).and_then(Value::as_f64), pair.get(1).and_then(Value::as_f64)) {
            (Some(lng), Some(lat)) => Ok([lng, lat]),
            _ => Err(anyhow!("[feature_coordinates] Invalid coordinate pair: {}", pair)),
        }
    }).collect()
}

/// Pretty-print with two-space indentation.
pub fn to_pretty_json(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize GeoJSON")
}

/// Write pretty-printed GeoJSON to `path`.
pub fn write_geojson(path: &Path, value: &Value) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create GeoJSON file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write GeoJSON file: {}", path.display()))?;
    writer.flush()?;
    Ok(())
}
