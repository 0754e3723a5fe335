mod cluster;
mod free;
mod potential;
mod rank;

pub use cluster::{cluster_free_polygons, ClusterPoints, PROXIMITY_THRESHOLD};
pub use free::{free_polygons, is_free, ExclusionSet, FreePolygon};
pub use potential::{MineralTally, VoterIndex, VoterPolicy, UNKNOWN_MINERAL};
pub use rank::{filter_by_mineral, rank_clusters, top_n, DEFAULT_TOP_N};

use polyring::{AreaMode, Ring};
use serde::Serialize;

/// A finished free zone: its point set is frozen, and area and potential
/// mineral were computed from it once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    points: Ring,
    members: Vec<usize>,
    area_km2: f64,
    potential_mineral: String,
}

impl Cluster {
    pub fn new(points: Ring, members: Vec<usize>, area_km2: f64, potential_mineral: impl Into<String>) -> Self {
        Self { points, members, area_km2, potential_mineral: potential_mineral.into() }
    }

    /// Freeze a clustering result, computing its area under `mode` and its
    /// potential mineral from `voters`.
    pub fn freeze(points: ClusterPoints, voters: &VoterIndex, mode: AreaMode, threshold: f64) -> Self {
        let (points, members) = points.into_parts();
        let area_km2 = mode.area_km2(&points);
        let potential_mineral = voters.potential_mineral(&points, threshold);
        Self { points, members, area_km2, potential_mineral }
    }

    #[inline] pub fn points(&self) -> &Ring { &self.points }

    #[inline] pub fn point_count(&self) -> usize { self.points.len() }

    /// Input indices of the free polygons in this zone.
    #[inline] pub fn members(&self) -> &[usize] { &self.members }

    #[inline] pub fn area_km2(&self) -> f64 { self.area_km2 }

    #[inline] pub fn potential_mineral(&self) -> &str { &self.potential_mineral }
}
