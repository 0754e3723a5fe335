use std::{fs::File, io::BufReader, path::Path};

use anyhow::{ensure, Context, Result};
use polyring::AreaMode;
use serde::{Deserialize, Serialize};

use crate::classify::DistrictRule;
use crate::zones::{ExclusionSet, VoterPolicy, DEFAULT_TOP_N, PROXIMITY_THRESHOLD};

/// Tunables for one engine run. Every field has a default, so a config file
/// only needs the fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Box half-width in degrees for clustering and voting.
    pub proximity_threshold: f64,
    /// Statuses that make a polygon taken.
    pub excluded_statuses: ExclusionSet,
    /// District rules in precedence order.
    pub district_rules: Vec<DistrictRule>,
    /// Area formula for classified features.
    pub feature_area: AreaMode,
    /// Area formula for clusters.
    pub cluster_area: AreaMode,
    pub voters: VoterPolicy,
    pub top_n: usize,
    /// `data_source` property written on classified features.
    pub data_source: String,
    /// Drop records with no coordinate pairs from the classified export.
    pub skip_empty_geometry: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            proximity_threshold: PROXIMITY_THRESHOLD,
            excluded_statuses: ExclusionSet::default(),
            district_rules: DistrictRule::default_rules(),
            feature_area: AreaMode::Planar,
            cluster_area: AreaMode::Geodesic,
            voters: VoterPolicy::AllClaims,
            top_n: DEFAULT_TOP_N,
            data_source: "GB_Mines_Portal_Complete".to_string(),
            skip_empty_geometry: false,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a config from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(text)
            .context("Failed to parse engine config")?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a config from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: EngineConfig = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.proximity_threshold.is_finite() && self.proximity_threshold > 0.0,
            "[config] proximity_threshold must be a positive number, got {}", self.proximity_threshold
        );
        Ok(())
    }
}
