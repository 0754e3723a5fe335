pub mod area;
pub mod parse;
pub mod ring;

pub use area::{geodesic_area_km2, planar_area_km2, AreaMode, EARTH_RADIUS_KM, KM_PER_DEGREE};
pub use parse::{parse_pairs, parse_ring};
pub use ring::{LatLng, Ring};
