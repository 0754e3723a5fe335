use std::fmt;

use ahash::AHashMap;
use serde::Serialize;
use tracing::{info, warn};

use crate::classify::{classify_area_type, detect_district, AreaType};
use crate::config::EngineConfig;
use crate::record::PolygonRecord;

/// District whose absence suggests the host had not loaded every layer.
const SENTINEL_DISTRICT: &str = "Diamer";

/// Completeness summary of a record snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetReport {
    pub total: usize,
    /// Distinct districts, first-seen order.
    pub districts: Vec<String>,
    /// Distinct non-empty trimmed minerals, first-seen order.
    pub minerals: Vec<String>,
    /// Distinct area types, first-seen order.
    pub area_types: Vec<AreaType>,
    /// Polygons per district, in the order of `districts`.
    pub district_counts: Vec<(String, usize)>,
    pub warnings: Vec<String>,
}

impl DatasetReport {
    pub fn from_records(records: &[PolygonRecord], config: &EngineConfig) -> Self {
        let mut district_counts: Vec<(String, usize)> = Vec::new();
        let mut district_slots: AHashMap<String, usize> = AHashMap::new();
        let mut minerals: Vec<String> = Vec::new();
        let mut area_types: Vec<AreaType> = Vec::new();

        for record in records {
            let district = detect_district(&record.ring(), &config.district_rules).to_string();
            match district_slots.get(&district) {
                Some(&slot) => district_counts[slot].1 += 1,
                None => {
                    district_slots.insert(district.clone(), district_counts.len());
                    district_counts.push((district, 1));
                }
            }

            let mineral = record.mineral().trim();
            if !mineral.is_empty() && !minerals.iter().any(|m| m == mineral) {
                minerals.push(mineral.to_string());
            }

            let ty = classify_area_type(record.grant_status.as_deref());
            if !area_types.contains(&ty) {
                area_types.push(ty);
            }
        }

        let mut warnings = Vec::new();
        if records.is_empty() {
            warnings.push("dataset is empty".to_string());
        } else if config.district_rules.iter().any(|r| r.name == SENTINEL_DISTRICT)
            && !district_slots.contains_key(SENTINEL_DISTRICT)
        {
            warnings.push(format!("no {SENTINEL_DISTRICT} polygons found, dataset may be incomplete"));
        }

        let report = Self {
            total: records.len(),
            districts: district_counts.iter().map(|(d, _)| d.clone()).collect(),
            minerals,
            area_types,
            district_counts,
            warnings,
        };
        report.log();
        report
    }

    /// Polygons counted for `district`; zero if it never appeared.
    pub fn count_for(&self, district: &str) -> usize {
        self.district_counts.iter()
            .find(|(d, _)| d == district)
            .map_or(0, |&(_, n)| n)
    }

    #[inline] pub fn is_clean(&self) -> bool { self.warnings.is_empty() }

    fn log(&self) {
        info!(
            total = self.total,
            districts = self.districts.len(),
            minerals = self.minerals.len(),
            area_types = self.area_types.len(),
            "[report] dataset validated"
        );
        for warning in &self.warnings {
            warn!("[report] {warning}");
        }
    }
}

impl fmt::Display for DatasetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total polygons: {}", self.total)?;
        writeln!(f, "Districts found: {}", self.districts.join(", "))?;
        for (district, n) in &self.district_counts {
            writeln!(f, "  {district}: {n}")?;
        }
        writeln!(f, "Minerals found: {}", self.minerals.join(", "))?;
        let types: Vec<&str> = self.area_types.iter().map(AreaType::label).collect();
        writeln!(f, "Area types found: {}", types.join(", "))?;
        for warning in &self.warnings {
            writeln!(f, "Warning: {warning}")?;
        }
        Ok(())
    }
}
