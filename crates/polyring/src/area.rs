use serde::{Deserialize, Serialize};

use crate::ring::Ring;

/// Kilometres per degree of latitude used by the planar approximation.
pub const KM_PER_DEGREE: f64 = 111.32;

/// Mean Earth radius in km used by the geodesic approximation.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Which area formula to use for a ring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaMode {
    /// Shoelace in degrees, scaled at the first vertex's latitude.
    #[default]
    Planar,
    /// Spherical-excess line integral on a sphere of radius `EARTH_RADIUS_KM`.
    Geodesic,
}

impl AreaMode {
    /// Area of `ring` in km² under this mode.
    #[inline]
    pub fn area_km2(self, ring: &Ring) -> f64 {
        match self {
            AreaMode::Planar => planar_area_km2(ring),
            AreaMode::Geodesic => geodesic_area_km2(ring),
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            AreaMode::Planar => "planar",
            AreaMode::Geodesic => "geodesic",
        }
    }
}

/// Rings with fewer than 3 vertices, or with any non-finite vertex, have no
/// area under either mode.
#[inline]
fn has_area(ring: &Ring) -> bool {
    ring.len() >= 3 && !ring.has_non_finite()
}

/// Planar approximation in km², valid for small rings.
///
/// `|Σ (lng_i·lat_j − lng_j·lat_i)| · 111.32² · cos(lat_0) / 2`
pub fn planar_area_km2(ring: &Ring) -> f64 {
    let Some(first) = ring.first().filter(|_| has_area(ring)) else { return 0.0 };

    let sum: f64 = ring.edges()
        .map(|(a, b)| a.lng * b.lat - b.lng * a.lat)
        .sum();

    let scale = KM_PER_DEGREE * KM_PER_DEGREE * first.lat.to_radians().cos();
    // cos(lat_0) < 0 only for out-of-range latitudes
    (sum.abs() * scale / 2.0).max(0.0)
}

/// Geodesic approximation in km².
///
/// `|Σ Δλ · (2 + sin φ_1 + sin φ_2)| · R² / 2`
pub fn geodesic_area_km2(ring: &Ring) -> f64 {
    if !has_area(ring) { return 0.0 }

    let sum: f64 = ring.edges()
        .map(|(a, b)| {
            (b.lng - a.lng).to_radians() * (2.0 + a.lat.to_radians().sin() + b.lat.to_radians().sin())
        })
        .sum();

    sum.abs() * EARTH_RADIUS_KM * EARTH_RADIUS_KM / 2.0
}
