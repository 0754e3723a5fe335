use super::Cluster;

/// Number of zones in the top list.
pub const DEFAULT_TOP_N: usize = 10;

/// Sort clusters by area, largest first. The sort is stable, so clusters of
/// equal area keep their creation order.
pub fn rank_clusters(mut clusters: Vec<Cluster>) -> Vec<Cluster> {
    clusters.sort_by(|a, b| b.area_km2().total_cmp(&a.area_km2()));
    clusters
}

/// The first `n` ranked clusters (fewer if there are not that many).
#[inline]
pub fn top_n(clusters: &[Cluster], n: usize) -> &[Cluster] {
    &clusters[..n.min(clusters.len())]
}

/// Clusters whose potential mineral is exactly `mineral`.
pub fn filter_by_mineral<'a>(clusters: &'a [Cluster], mineral: &str) -> Vec<&'a Cluster> {
    clusters.iter().filter(|c| c.potential_mineral() == mineral).collect()
}

#[cfg(test)]
mod tests {
    use polyring::Ring;

    use super::*;

    fn cluster(member: usize, area: f64, mineral: &str) -> Cluster {
        Cluster::new(Ring::from_lat_lng(&[[35.0, 74.0]]), vec![member], area, mineral)
    }

    #[test]
    fn largest_first() {
        let ranked = rank_clusters(vec![cluster(0, 1.0, "Gold"), cluster(1, 3.0, "Iron"), cluster(2, 2.0, "Gold")]);
        let areas: Vec<f64> = ranked.iter().map(Cluster::area_km2).collect();
        assert_eq!(areas, vec![3.0, 2.0, 1.0]);
        assert!(areas.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn equal_areas_keep_creation_order() {
        let ranked = rank_clusters(vec![
            cluster(0, 2.0, "A"),
            cluster(1, 5.0, "B"),
            cluster(2, 2.0, "C"),
            cluster(3, 2.0, "D"),
        ]);
        let order: Vec<usize> = ranked.iter().map(|c| c.members()[0]).collect();
        assert_eq!(order, vec![1, 0, 2, 3]);
    }

    #[test]
    fn top_n_is_a_plain_prefix() {
        let ranked = rank_clusters((0..12).map(|i| cluster(i, i as f64, "Gold")).collect());
        assert_eq!(top_n(&ranked, DEFAULT_TOP_N).len(), 10);
        assert_eq!(top_n(&ranked, DEFAULT_TOP_N)[0].area_km2(), 11.0);
        assert_eq!(top_n(&ranked, 50).len(), 12);
        assert!(top_n(&ranked, 0).is_empty());
        assert!(top_n(&[], 10).is_empty());
    }

    #[test]
    fn filter_is_exact() {
        let clusters = vec![cluster(0, 1.0, "Gold"), cluster(1, 1.0, "gold"), cluster(2, 1.0, "Unknown")];
        let gold = filter_by_mineral(&clusters, "Gold");
        assert_eq!(gold.len(), 1);
        assert_eq!(gold[0].members(), &[0]);
    }
}
