use serde_json::Value;
use tracing::{debug, info};

use crate::classify::{classify_all, ClassifiedFeature};
use crate::config::EngineConfig;
use crate::error::ExportError;
use crate::io::{clusters_to_geojson, features_to_geojson, records_to_geojson, FEATURES_NAME, ZONES_NAME};
use crate::record::{records_for_mineral, PolygonRecord};
use crate::zones::{cluster_free_polygons, filter_by_mineral, free_polygons, rank_clusters, Cluster, VoterIndex};

/// Everything derived from one record snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOutput {
    pub features: Vec<ClassifiedFeature>,
    /// Free zones, largest first.
    pub clusters: Vec<Cluster>,
}

/// Runs the classification and free-zone pipeline over a record snapshot.
/// Holds only configuration, so one engine can serve independent datasets.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self { Self { config } }

    #[inline] pub fn config(&self) -> &EngineConfig { &self.config }

    /// Classify every record.
    pub fn classify(&self, records: &[PolygonRecord]) -> Vec<ClassifiedFeature> {
        classify_all(records, &self.config)
    }

    /// Free polygons → clusters → potential mineral and area → ranking.
    pub fn free_zones(&self, records: &[PolygonRecord]) -> Vec<Cluster> {
        let config = &self.config;
        let free = free_polygons(records, &config.excluded_statuses);
        debug!(records = records.len(), free = free.len(), "[zones] free polygons found");

        let clusters = cluster_free_polygons(&free, config.proximity_threshold);
        let voters = VoterIndex::build(records, &config.excluded_statuses, config.voters);
        if voters.is_empty() {
            debug!("[zones] no claimed coordinates, every zone resolves to Unknown");
        }
        debug!(
            clusters = clusters.len(),
            voter_points = voters.len(),
            area = config.cluster_area.to_str(),
            "[zones] estimating potential minerals"
        );

        let frozen: Vec<Cluster> = clusters.into_iter()
            .map(|points| Cluster::freeze(points, &voters, config.cluster_area, config.proximity_threshold))
            .collect();
        rank_clusters(frozen)
    }

    pub fn run(&self, records: &[PolygonRecord]) -> EngineOutput {
        let features = self.classify(records);
        let clusters = self.free_zones(records);
        info!(features = features.len(), clusters = clusters.len(), "[engine] run complete");
        EngineOutput { features, clusters }
    }

    /// Classified FeatureCollection, or `NoRecords` if there is nothing to write.
    pub fn export_features(&self, records: &[PolygonRecord]) -> Result<Value, ExportError> {
        let features = self.classify(records);
        if features.is_empty() { return Err(ExportError::NoRecords) }
        Ok(features_to_geojson(&features, FEATURES_NAME, &self.config.data_source))
    }

    /// Ranked free zones to export, optionally restricted to clusters whose
    /// potential mineral is `mineral`. `NoFreeZones` if none remain.
    pub fn select_zones(&self, records: &[PolygonRecord], mineral: Option<&str>) -> Result<Vec<Cluster>, ExportError> {
        let clusters = self.free_zones(records);
        let clusters: Vec<Cluster> = match mineral {
            Some(mineral) => filter_by_mineral(&clusters, mineral).into_iter().cloned().collect(),
            None => clusters,
        };
        if clusters.is_empty() { return Err(ExportError::NoFreeZones) }
        Ok(clusters)
    }

    /// Ranked free-zone FeatureCollection; see [`Engine::select_zones`].
    pub fn export_zones(&self, records: &[PolygonRecord], mineral: Option<&str>) -> Result<Value, ExportError> {
        let clusters = self.select_zones(records, mineral)?;
        Ok(clusters_to_geojson(&clusters, ZONES_NAME))
    }

    /// Raw records of one mineral, named `<mineral>_GB`.
    pub fn export_mineral(&self, records: &[PolygonRecord], mineral: &str) -> Result<Value, ExportError> {
        let selected = records_for_mineral(records, mineral);
        if selected.is_empty() { return Err(ExportError::NoMatchingMineral(mineral.to_string())) }
        Ok(records_to_geojson(&selected, &format!("{}_GB", mineral.trim())))
    }
}
