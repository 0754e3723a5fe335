use geo::{Coord, LineString};
use serde::{Deserialize, Serialize};

/// A position in degrees. Latitude is stored first; GeoJSON output gets
/// (lng, lat) order from [`Ring::to_line_string`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[inline] pub const fn new(lat: f64, lng: f64) -> Self { Self { lat, lng } }

    /// Both coordinates are finite numbers.
    #[inline] pub fn is_finite(&self) -> bool { self.lat.is_finite() && self.lng.is_finite() }

    /// True if both axes differ from `other` by strictly less than `threshold`
    /// degrees. This is a box test, not a distance test.
    #[inline]
    pub fn is_close(&self, other: &LatLng, threshold: f64) -> bool {
        (self.lat - other.lat).abs() < threshold && (self.lng - other.lng).abs() < threshold
    }

    /// `[lng, lat]` as an R-tree key, so envelopes read x = lng, y = lat.
    #[inline] pub fn key(&self) -> [f64; 2] { [self.lng, self.lat] }
}

/// An open polygon ring: closure from the last point back to the first is
/// implied, no duplicate closing point is stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ring {
    points: Vec<LatLng>,
}

impl Ring {
    #[inline] pub fn new(points: Vec<LatLng>) -> Self { Self { points } }

    /// Build a ring from `[lat, lng]` pairs.
    pub fn from_lat_lng(pairs: &[[f64; 2]]) -> Self {
        pairs.iter().map(|&[lat, lng]| LatLng::new(lat, lng)).collect()
    }

    #[inline] pub fn len(&self) -> usize { self.points.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.points.is_empty() }

    #[inline] pub fn points(&self) -> &[LatLng] { &self.points }

    #[inline] pub fn iter(&self) -> std::slice::Iter<'_, LatLng> { self.points.iter() }

    #[inline] pub fn into_points(self) -> Vec<LatLng> { self.points }

    #[inline] pub fn first(&self) -> Option<&LatLng> { self.points.first() }

    /// Append every point of `other`, keeping duplicates.
    #[inline] pub fn extend_from(&mut self, other: &Ring) { self.points.extend_from_slice(&other.points) }

    /// True if any vertex has a NaN or infinite coordinate.
    #[inline] pub fn has_non_finite(&self) -> bool { self.points.iter().any(|p| !p.is_finite()) }

    /// Consecutive vertex pairs, including the implied closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (LatLng, LatLng)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Arithmetic mean of the vertices (not area-weighted).
    /// `None` for an empty ring.
    pub fn centroid(&self) -> Option<LatLng> {
        if self.points.is_empty() { return None }
        let n = self.points.len() as f64;
        let (lat, lng) = self.points.iter()
            .fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat, lng + p.lng));
        Some(LatLng::new(lat / n, lng / n))
    }

    /// Convert to a `geo::LineString` with x = lng, y = lat.
    /// The line string is left open, matching the ring.
    pub fn to_line_string(&self) -> LineString<f64> {
        LineString::new(self.points.iter().map(|p| Coord { x: p.lng, y: p.lat }).collect())
    }
}

impl From<Vec<LatLng>> for Ring {
    fn from(points: Vec<LatLng>) -> Self { Self { points } }
}

impl FromIterator<LatLng> for Ring {
    fn from_iter<I: IntoIterator<Item = LatLng>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Ring {
    type Item = &'a LatLng;
    type IntoIter = std::slice::Iter<'a, LatLng>;

    fn into_iter(self) -> Self::IntoIter { self.points.iter() }
}
