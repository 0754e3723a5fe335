use polyring::{LatLng, Ring};
use rstar::{primitives::GeomWithData, RTree, AABB};
use tracing::debug;

use super::free::FreePolygon;

/// Degrees within which two points are close on both axes (about 5 km).
pub const PROXIMITY_THRESHOLD: f64 = 0.05;

/// A cluster within the clustering pass. Points only grow, and only through
/// the clusterer; estimation consumes it into a frozen [`super::Cluster`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterPoints {
    points: Ring,
    members: Vec<usize>,
}

impl ClusterPoints {
    /// All member points in merge order, duplicates kept.
    #[inline] pub fn points(&self) -> &Ring { &self.points }

    /// Input indices of the free polygons merged into this cluster.
    #[inline] pub fn members(&self) -> &[usize] { &self.members }

    #[inline] pub(crate) fn into_parts(self) -> (Ring, Vec<usize>) { (self.points, self.members) }

    fn absorb(&mut self, polygon: &FreePolygon) {
        self.points.extend_from(&polygon.ring);
        self.members.push(polygon.source);
    }
}

/// Cluster point tagged with its cluster id.
type IndexedPoint = GeomWithData<[f64; 2], usize>;

/// Search envelope around `p`. Padded slightly so rounding in the corners
/// never drops a candidate; hits are rechecked with the strict predicate.
#[inline]
fn envelope(p: &LatLng, threshold: f64) -> AABB<[f64; 2]> {
    let pad = threshold * (1.0 + 1e-9);
    AABB::from_corners([p.lng - pad, p.lat - pad], [p.lng + pad, p.lat + pad])
}

/// Lowest id of any cluster with a point close to some point of `ring`.
/// Cluster ids are creation order, so this is the first match of a linear scan.
fn first_touching(index: &RTree<IndexedPoint>, ring: &Ring, threshold: f64) -> Option<usize> {
    ring.iter()
        .flat_map(|p| {
            index.locate_in_envelope(&envelope(p, threshold))
                .filter(move |hit| {
                    let [lng, lat] = *hit.geom();
                    p.is_close(&LatLng::new(lat, lng), threshold)
                })
                .map(|hit| hit.data)
        })
        .min()
}

/// Greedy single-pass clustering in input order.
///
/// Each ring joins the earliest-created cluster holding a point close to any
/// of its points, or starts a new cluster. Merging is not transitive across
/// existing clusters: a ring that bridges two clusters joins only the first.
/// Rings without points are skipped.
pub fn cluster_free_polygons(polygons: &[FreePolygon], threshold: f64) -> Vec<ClusterPoints> {
    let mut clusters: Vec<ClusterPoints> = Vec::new();
    let mut index: RTree<IndexedPoint> = RTree::new();
    let mut skipped = 0usize;

    for polygon in polygons {
        if polygon.ring.is_empty() {
            skipped += 1;
            continue;
        }

        let id = match first_touching(&index, &polygon.ring, threshold) {
            Some(id) => id,
            None => {
                clusters.push(ClusterPoints::default());
                clusters.len() - 1
            }
        };
        clusters[id].absorb(polygon);

        for p in polygon.ring.iter() {
            index.insert(IndexedPoint::new(p.key(), id));
        }
    }

    debug!(polygons = polygons.len(), clusters = clusters.len(), skipped, "[cluster] clustering complete");
    clusters
}
