use lazy_static::lazy_static;
use regex::Regex;

use crate::ring::{LatLng, Ring};

lazy_static! {
    /// `<lng> <lat>`: two unsigned decimals separated by a single space.
    static ref PAIR: Regex = Regex::new(r"(\d+\.\d+) (\d+\.\d+)").expect("coordinate pair pattern is valid");
}

/// Lazily yield every coordinate pair in `geometry`, in order of appearance.
///
/// Each match is read as longitude then latitude. Pairs whose numbers fail to
/// parse, or parse to a non-finite value, are skipped.
pub fn parse_pairs(geometry: &str) -> impl Iterator<Item = LatLng> + '_ {
    PAIR.captures_iter(geometry).filter_map(|caps| {
        let lng = caps[1].parse::<f64>().ok()?;
        let lat = caps[2].parse::<f64>().ok()?;
        let point = LatLng::new(lat, lng);
        point.is_finite().then_some(point)
    })
}

/// Parse a geometry string into a ring.
///
/// An empty string, or one with no matching pairs, gives an empty ring.
pub fn parse_ring(geometry: &str) -> Ring {
    parse_pairs(geometry).collect()
}
