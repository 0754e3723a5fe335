use ahash::AHashMap;
use polyring::{parse_pairs, LatLng, Ring};
use rstar::{primitives::GeomWithData, RTree, AABB};
use serde::{Deserialize, Serialize};

use super::free::ExclusionSet;
use crate::record::PolygonRecord;

/// Potential mineral of a cluster with no nearby claims.
pub const UNKNOWN_MINERAL: &str = "Unknown";

/// Which claimed polygons may vote on a cluster's potential mineral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoterPolicy {
    /// Every polygon with a mineral.
    #[default]
    AllClaims,
    /// Polygons with a mineral whose status is outside the exclusion set.
    ExcludeTaken,
}

/// Where a claimed coordinate sits in the scan order: voter polygon index in
/// the input, coordinate index in its ring, and interned mineral.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Vote {
    voter: usize,
    coord: usize,
    mineral: usize,
}

type VotePoint = GeomWithData<[f64; 2], Vote>;

/// Claimed-polygon coordinates, indexed for neighbour voting.
pub struct VoterIndex {
    minerals: Vec<String>,
    tree: RTree<VotePoint>,
}

/// Votes per mineral in the order each mineral first received a vote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MineralTally {
    votes: Vec<(String, usize)>,
}

impl MineralTally {
    #[inline] pub fn votes(&self) -> &[(String, usize)] { &self.votes }

    /// The mineral with the most votes; ties go to the one voted for first.
    pub fn winner(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.votes {
            if best.is_none_or(|b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(mineral, _)| mineral.as_str())
    }
}

impl VoterIndex {
    /// Index the coordinates of every eligible voter in `records`.
    pub fn build(records: &[PolygonRecord], excluded: &ExclusionSet, policy: VoterPolicy) -> Self {
        let mut interned: AHashMap<&str, usize> = AHashMap::new();
        let mut minerals: Vec<String> = Vec::new();
        let mut points: Vec<VotePoint> = Vec::new();

        for (voter, record) in records.iter().enumerate() {
            let mineral = record.mineral().trim();
            if mineral.is_empty() { continue }
            if policy == VoterPolicy::ExcludeTaken && excluded.contains(record.grant_status()) { continue }

            let id = *interned.entry(mineral).or_insert_with(|| {
                minerals.push(mineral.to_string());
                minerals.len() - 1
            });
            points.extend(parse_pairs(record.geometry()).enumerate().map(|(coord, p)| {
                VotePoint::new(p.key(), Vote { voter, coord, mineral: id })
            }));
        }

        Self { minerals, tree: RTree::bulk_load(points) }
    }

    /// Number of indexed voter coordinates.
    #[inline] pub fn len(&self) -> usize { self.tree.size() }

    #[inline] pub fn is_empty(&self) -> bool { self.tree.size() == 0 }

    /// Count one vote per (cluster point, voter coordinate) pair that is close
    /// on both axes.
    ///
    /// The tally order matches a scan over cluster points, then voters in
    /// input order, then voter coordinates.
    pub fn tally(&self, points: &Ring, threshold: f64) -> MineralTally {
        // per mineral: (votes, first (point, voter, coord) that voted for it)
        let mut counts: AHashMap<usize, (usize, (usize, usize, usize))> = AHashMap::new();
        let pad = threshold * (1.0 + 1e-9);

        for (i, p) in points.iter().enumerate() {
            let envelope = AABB::from_corners([p.lng - pad, p.lat - pad], [p.lng + pad, p.lat + pad]);
            for hit in self.tree.locate_in_envelope(&envelope) {
                let [lng, lat] = *hit.geom();
                if !p.is_close(&LatLng::new(lat, lng), threshold) { continue }

                let vote = hit.data;
                let key = (i, vote.voter, vote.coord);
                let entry = counts.entry(vote.mineral).or_insert((0, key));
                entry.0 += 1;
                if key < entry.1 { entry.1 = key }
            }
        }

        let mut ordered: Vec<(usize, (usize, (usize, usize, usize)))> = counts.into_iter().collect();
        ordered.sort_by_key(|&(_, (_, first))| first);

        MineralTally {
            votes: ordered.into_iter()
                .map(|(mineral, (count, _))| (self.minerals[mineral].clone(), count))
                .collect(),
        }
    }

    /// Potential mineral for a cluster: tally winner, or `"Unknown"`.
    pub fn potential_mineral(&self, points: &Ring, threshold: f64) -> String {
        self.tally(points, threshold)
            .winner()
            .unwrap_or(UNKNOWN_MINERAL)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Direct scan over cluster points, voters and coordinates.
    fn tally_linear(records: &[PolygonRecord], points: &Ring, threshold: f64) -> Vec<(String, usize)> {
        let mut votes: Vec<(String, usize)> = Vec::new();
        for p in points {
            for record in records {
                let mineral = record.mineral().trim();
                if mineral.is_empty() { continue }
                for q in parse_pairs(record.geometry()) {
                    if !p.is_close(&q, threshold) { continue }
                    match votes.iter_mut().find(|(m, _)| m == mineral) {
                        Some(entry) => entry.1 += 1,
                        None => votes.push((mineral.to_string(), 1)),
                    }
                }
            }
        }
        votes
    }

    fn claim(mineral: &str, status: &str, geometry: &str) -> PolygonRecord {
        PolygonRecord::new(mineral, "", status, geometry)
    }

    #[test]
    fn nearby_claim_wins() {
        let records = vec![claim("Gold", "Granted", "74.6 35.9 74.61 35.9")];
        let index = VoterIndex::build(&records, &ExclusionSet::default(), VoterPolicy::AllClaims);
        let cluster = Ring::from_lat_lng(&[[35.9, 74.6], [35.92, 74.62]]);
        assert_eq!(index.potential_mineral(&cluster, 0.05), "Gold");
        // each cluster point sees both claim coordinates
        assert_eq!(index.tally(&cluster, 0.05).votes(), &[("Gold".to_string(), 4)]);
    }

    #[test]
    fn no_votes_is_unknown() {
        let records = vec![claim("Gold", "", "74.6 35.9")];
        let index = VoterIndex::build(&records, &ExclusionSet::default(), VoterPolicy::AllClaims);
        let far = Ring::from_lat_lng(&[[30.0, 70.0]]);
        assert!(index.tally(&far, 0.05).votes().is_empty());
        assert_eq!(index.potential_mineral(&far, 0.05), UNKNOWN_MINERAL);
    }

    #[test]
    fn index_without_claims_is_empty() {
        let records = vec![claim("", "", "74.6 35.9"), claim("Gold", "", "garbage")];
        let index = VoterIndex::build(&records, &ExclusionSet::default(), VoterPolicy::AllClaims);
        assert!(index.is_empty());
        assert_eq!(index.potential_mineral(&Ring::from_lat_lng(&[[35.9, 74.6]]), 0.05), UNKNOWN_MINERAL);
    }

    #[test]
    fn policy_controls_taken_voters() {
        let records = vec![claim("Gold", "Granted", "74.6 35.9"), claim("Iron", "Applied", "74.7 36.0")];
        let excluded = ExclusionSet::default();
        let cluster = Ring::from_lat_lng(&[[35.9, 74.6]]);

        let all = VoterIndex::build(&records, &excluded, VoterPolicy::AllClaims);
        assert_eq!(all.len(), 2);
        assert_eq!(all.potential_mineral(&cluster, 0.05), "Gold");

        let open = VoterIndex::build(&records, &excluded, VoterPolicy::ExcludeTaken);
        assert_eq!(open.len(), 1);
        assert_eq!(open.potential_mineral(&cluster, 0.05), UNKNOWN_MINERAL);
    }

    #[test]
    fn ties_go_to_first_encountered() {
        // Copper is scanned first for the first cluster point, so it wins a 1-1 tie.
        let records = vec![claim("Copper", "", "74.6 35.9"), claim("Gold", "", "74.6 35.9")];
        let index = VoterIndex::build(&records, &ExclusionSet::default(), VoterPolicy::AllClaims);
        let cluster = Ring::from_lat_lng(&[[35.9, 74.6]]);
        assert_eq!(index.potential_mineral(&cluster, 0.05), "Copper");

        // Gold is near the first cluster point, Copper only near the second.
        let records = vec![claim("Copper", "", "75.0 36.0"), claim("Gold", "", "74.6 35.9")];
        let index = VoterIndex::build(&records, &ExclusionSet::default(), VoterPolicy::AllClaims);
        let cluster = Ring::from_lat_lng(&[[35.9, 74.6], [36.0, 75.0]]);
        let tally = index.tally(&cluster, 0.05);
        assert_eq!(tally.votes(), &[("Gold".to_string(), 1), ("Copper".to_string(), 1)]);
        assert_eq!(tally.winner(), Some("Gold"));
    }

    #[test]
    fn majority_beats_order() {
        let records = vec![
            claim("Copper", "", "74.6 35.9"),
            claim("Gold", "", "74.6 35.9 74.61 35.91 74.62 35.92"),
        ];
        let index = VoterIndex::build(&records, &ExclusionSet::default(), VoterPolicy::AllClaims);
        let cluster = Ring::from_lat_lng(&[[35.9, 74.6]]);
        assert_eq!(index.potential_mineral(&cluster, 0.05), "Gold");
    }

    #[test]
    fn minerals_are_trimmed_before_voting() {
        let records = vec![claim(" Gold", "", "74.6 35.9"), claim("Gold ", "", "74.6 35.9")];
        let index = VoterIndex::build(&records, &ExclusionSet::default(), VoterPolicy::AllClaims);
        let tally = index.tally(&Ring::from_lat_lng(&[[35.9, 74.6]]), 0.05);
        assert_eq!(tally.votes(), &[("Gold".to_string(), 2)]);
    }

    #[test]
    fn index_agrees_with_linear_scan() {
        let records = vec![
            claim("Gold", "", "74.60 35.90 74.61 35.90 74.61 35.91"),
            claim("Copper", "", "74.63 35.93 74.64 35.93"),
            claim("", "", "74.62 35.92"),
            claim("Iron", "", "74.70 36.00 74.66 35.95"),
            claim("Gold", "", "74.65 35.94"),
        ];
        let index = VoterIndex::build(&records, &ExclusionSet::default(), VoterPolicy::AllClaims);
        let cluster = Ring::from_lat_lng(&[[35.92, 74.62], [35.95, 74.65], [35.90, 74.60], [35.99, 74.69]]);
        assert_eq!(index.tally(&cluster, 0.05).votes(), tally_linear(&records, &cluster, 0.05).as_slice());
    }
}
