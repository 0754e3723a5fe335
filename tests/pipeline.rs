// End-to-end tests for the engine: classification, free-zone clustering,
// potential-mineral voting and ranking over small record snapshots.

use gbminerals::{
    AreaType, Engine, EngineConfig, ExportError, PolygonRecord, VoterPolicy, UNKNOWN_MINERAL,
};

fn snapshot() -> Vec<PolygonRecord> {
    vec![
        PolygonRecord::new("Gold", "Acme Mining", "Granted", "74.60 35.90 74.65 35.90 74.65 35.95 74.60 35.95"),
        // free, 0.01 degrees east of the Gold lease
        PolygonRecord::new("", "", "", "74.66 35.90 74.70 35.90 74.70 35.95"),
        // free, nowhere near any claim
        PolygonRecord::new("", "", "", "76.90 34.10 76.95 34.10 76.95 34.15"),
    ]
}

fn free_strip(lng: f64) -> PolygonRecord {
    let geometry = format!("{:.2} 35.00 {:.2} 35.00 {:.2} 35.02", lng, lng + 0.02, lng + 0.02);
    PolygonRecord::new("", "", "", &geometry)
}

#[test]
fn classifies_granted_gold_lease() {
    let features = Engine::default().classify(&snapshot());
    let gold = &features[0];
    assert_eq!(gold.area_type, AreaType::MiningLease);
    assert_eq!(gold.district.as_str(), "Gilgit");
    assert!(gold.area_km2 > 0.0);
}

#[test]
fn free_zone_next_to_lease_inherits_its_mineral() {
    let clusters = Engine::default().free_zones(&snapshot());
    assert_eq!(clusters.len(), 2);

    let near = clusters.iter().find(|c| c.members() == [1]).unwrap();
    let far = clusters.iter().find(|c| c.members() == [2]).unwrap();
    assert_eq!(near.potential_mineral(), "Gold");
    assert_eq!(far.potential_mineral(), UNKNOWN_MINERAL);
}

#[test]
fn excluding_taken_voters_leaves_zone_unknown() {
    let config = EngineConfig { voters: VoterPolicy::ExcludeTaken, ..EngineConfig::default() };
    let clusters = Engine::new(config).free_zones(&snapshot());
    assert!(clusters.iter().all(|c| c.potential_mineral() == UNKNOWN_MINERAL));
}

#[test]
fn clusters_are_ranked_by_area_descending() {
    let clusters = Engine::default().free_zones(&snapshot());
    assert!(clusters.windows(2).all(|w| w[0].area_km2() >= w[1].area_km2()));
    assert!(clusters.iter().all(|c| c.area_km2() > 0.0));
}

#[test]
fn bridging_polygon_chains_in_input_order() {
    let records = vec![free_strip(74.00), free_strip(74.06), free_strip(74.12)];
    let clusters = Engine::default().free_zones(&records);
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].members(), [0, 1, 2]);
    assert_eq!(clusters[0].point_count(), 9);
}

#[test]
fn bridging_polygon_does_not_merge_existing_clusters() {
    // the two ends arrive first, so the middle strip only joins the first of them
    let records = vec![free_strip(74.12), free_strip(74.00), free_strip(74.06)];
    let clusters = Engine::default().free_zones(&records);
    assert_eq!(clusters.len(), 2);

    let mut members: Vec<Vec<usize>> = clusters.iter().map(|c| c.members().to_vec()).collect();
    members.sort();
    assert_eq!(members, vec![vec![0, 2], vec![1]]);
}

#[test]
fn claimed_and_excluded_polygons_never_cluster() {
    let records = vec![
        PolygonRecord::new("Copper", "", "", "74.60 35.90 74.61 35.90 74.61 35.91"),
        PolygonRecord::new("", "", "Granted", "74.60 35.90 74.61 35.90 74.61 35.91"),
        PolygonRecord::new("", "", " STUDY ", "74.60 35.90 74.61 35.90 74.61 35.91"),
    ];
    let engine = Engine::default();
    assert!(engine.free_zones(&records).is_empty());
    assert_eq!(engine.export_zones(&records, None), Err(ExportError::NoFreeZones));
}

#[test]
fn run_returns_features_and_clusters() {
    let output = Engine::default().run(&snapshot());
    assert_eq!(output.features.len(), 3);
    assert_eq!(output.clusters.len(), 2);
}

#[test]
fn empty_snapshot_produces_nothing() {
    let engine = Engine::default();
    let output = engine.run(&[]);
    assert!(output.features.is_empty());
    assert!(output.clusters.is_empty());
    assert_eq!(engine.export_features(&[]), Err(ExportError::NoRecords));
}

#[test]
fn portal_example_gold_lease_and_two_free_zones() {
    let records = vec![
        PolygonRecord::new("Gold", "", "Granted", "74.6 35.9 74.61 35.9 74.61 35.91 74.6 35.91"),
        PolygonRecord::new("", "", "", "74.6 35.9 74.62 35.9 74.62 35.92 74.6 35.92"),
        PolygonRecord::new("", "", "", "70.0 30.0 70.01 30.0 70.01 30.01 70.0 30.01"),
    ];
    let output = Engine::default().run(&records);

    let gold = &output.features[0];
    assert_eq!(gold.area_type, AreaType::MiningLease);
    assert_eq!(gold.district.as_str(), "Gilgit");
    assert!(gold.area_km2 > 0.0);

    assert_eq!(output.clusters.len(), 2);
    let near = output.clusters.iter().find(|c| c.members() == [1]).unwrap();
    let far = output.clusters.iter().find(|c| c.members() == [2]).unwrap();
    assert_eq!(near.potential_mineral(), "Gold");
    assert_eq!(far.potential_mineral(), UNKNOWN_MINERAL);
}

#[test]
fn selected_zones_match_the_exported_collection() {
    let engine = Engine::default();
    let records = snapshot();

    let all = engine.select_zones(&records, None).unwrap();
    let exported = engine.export_zones(&records, None).unwrap();
    assert_eq!(exported["features"].as_array().unwrap().len(), all.len());

    let gold = engine.select_zones(&records, Some("Gold")).unwrap();
    assert_eq!(gold.len(), 1);
    assert_eq!(gold[0].members(), [1]);
    assert_eq!(engine.select_zones(&records, Some("Zinc")), Err(ExportError::NoFreeZones));
}
