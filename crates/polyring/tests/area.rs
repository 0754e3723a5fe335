// Integration tests for ring parsing and area estimation:
//   parse_ring on portal geometry strings, planar and geodesic areas,
//   and agreement between the two on small rings.

use polyring::{geodesic_area_km2, parse_ring, planar_area_km2, AreaMode, LatLng, KM_PER_DEGREE};

const SQUARE: &str = "74.60 35.90 74.70 35.90 74.70 36.00 74.60 36.00";

#[test]
fn parses_portal_geometry_into_lat_lng() {
    let ring = parse_ring(SQUARE);
    assert_eq!(ring.len(), 4);
    assert_eq!(ring.points()[1], LatLng::new(35.90, 74.70));
}

#[test]
fn planar_area_of_tenth_degree_square() {
    let area = planar_area_km2(&parse_ring(SQUARE));
    let expected = 0.01 * KM_PER_DEGREE * KM_PER_DEGREE * 35.9_f64.to_radians().cos();
    assert!((area - expected).abs() < 1e-6, "area = {area}, expected = {expected}");
}

#[test]
fn planar_and_geodesic_agree_on_small_rings() {
    let ring = parse_ring(SQUARE);
    let planar = AreaMode::Planar.area_km2(&ring);
    let geodesic = AreaMode::Geodesic.area_km2(&ring);
    assert!(geodesic > 0.0);
    assert!((planar - geodesic).abs() / geodesic < 0.01, "planar = {planar}, geodesic = {geodesic}");
}

#[test]
fn degenerate_rings_have_no_area() {
    for geometry in ["", "74.60 35.90", "74.60 35.90 74.70 35.90", "noise without pairs"] {
        let ring = parse_ring(geometry);
        assert_eq!(planar_area_km2(&ring), 0.0);
        assert_eq!(geodesic_area_km2(&ring), 0.0);
    }
}
