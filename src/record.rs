use std::{fs::File, io::BufReader, path::Path};

use ahash::AHashMap;
use anyhow::{Context, Result};
use polyring::{parse_ring, Ring};
use serde::{Deserialize, Serialize};

/// One raw mineral-rights polygon as supplied by the host.
///
/// Every field may be absent; accessors treat absent as the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolygonRecord {
    #[serde(default)]
    pub mineral: Option<String>,

    #[serde(default, alias = "companyName")]
    pub company_name: Option<String>,

    #[serde(default, alias = "grantstatus", alias = "grantStatus")]
    pub grant_status: Option<String>,

    /// `"<lng> <lat>"` pairs in any surrounding text.
    #[serde(default, alias = "geo")]
    pub geometry: Option<String>,
}

impl PolygonRecord {
    pub fn new(
        mineral: impl Into<String>,
        company_name: impl Into<String>,
        grant_status: impl Into<String>,
        geometry: impl Into<String>,
    ) -> Self {
        Self {
            mineral: Some(mineral.into()),
            company_name: Some(company_name.into()),
            grant_status: Some(grant_status.into()),
            geometry: Some(geometry.into()),
        }
    }

    #[inline] pub fn mineral(&self) -> &str { self.mineral.as_deref().unwrap_or("") }

    #[inline] pub fn company_name(&self) -> &str { self.company_name.as_deref().unwrap_or("") }

    #[inline] pub fn grant_status(&self) -> &str { self.grant_status.as_deref().unwrap_or("") }

    #[inline] pub fn geometry(&self) -> &str { self.geometry.as_deref().unwrap_or("") }

    /// Parse the geometry string into a (lat, lng) ring.
    #[inline] pub fn ring(&self) -> Ring { parse_ring(self.geometry()) }
}

/// The host wraps each record as `{ "polygonData": { ... } }`; flat records
/// are accepted too.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRecord {
    Wrapped {
        #[serde(rename = "polygonData")]
        polygon_data: PolygonRecord,
    },
    Flat(PolygonRecord),
}

impl From<RawRecord> for PolygonRecord {
    fn from(raw: RawRecord) -> Self {
        match raw {
            RawRecord::Wrapped { polygon_data } => polygon_data,
            RawRecord::Flat(record) => record,
        }
    }
}

/// Read records from a JSON array held in memory.
pub fn records_from_json_bytes(bytes: &[u8]) -> Result<Vec<PolygonRecord>> {
    let raw: Vec<RawRecord> = serde_json::from_slice(bytes)
        .context("Failed to parse polygon records")?;
    Ok(raw.into_iter().map(PolygonRecord::from).collect())
}

/// Read records from a JSON file containing an array of records.
pub fn read_records_from_json_file(path: &Path) -> Result<Vec<PolygonRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to read records file: {}", path.display()))?;
    let raw: Vec<RawRecord> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse polygon records in {}", path.display()))?;
    Ok(raw.into_iter().map(PolygonRecord::from).collect())
}

/// Collapse records sharing the same geometry, mineral, and company.
///
/// The key is the tuple of the three fields, not their concatenation, so
/// records that only agree once the strings are joined end to end (geometry
/// `"74.6 35.9"` + mineral `"1Gold"` against `"74.6 35.91"` + `"Gold"`) stay
/// distinct. The last record with a given key wins, but it keeps the
/// position of the first record with that key.
pub fn dedupe_records(records: &[PolygonRecord]) -> Vec<PolygonRecord> {
    let mut slots: AHashMap<(&str, &str, &str), usize> = AHashMap::with_capacity(records.len());
    let mut unique: Vec<PolygonRecord> = Vec::with_capacity(records.len());

    for record in records {
        let key = (record.geometry(), record.mineral(), record.company_name());
        match slots.get(&key) {
            Some(&slot) => unique[slot] = record.clone(),
            None => {
                slots.insert(key, unique.len());
                unique.push(record.clone());
            }
        }
    }
    unique
}

/// Distinct trimmed minerals, sorted. The empty mineral is left out.
pub fn available_minerals(records: &[PolygonRecord]) -> Vec<String> {
    let mut minerals: Vec<String> = records.iter()
        .map(|r| r.mineral().trim())
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect();
    minerals.sort();
    minerals.dedup();
    minerals
}

/// Records whose trimmed mineral equals `mineral`, ignoring case.
pub fn records_for_mineral<'a>(records: &'a [PolygonRecord], mineral: &str) -> Vec<&'a PolygonRecord> {
    let target = mineral.trim().to_lowercase();
    records.iter()
        .filter(|r| r.mineral().trim().to_lowercase() == target)
        .collect()
}
