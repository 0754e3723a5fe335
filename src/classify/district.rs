use std::fmt;

use polyring::{LatLng, Ring};
use serde::{Deserialize, Serialize};

/// Label used for rings that match no rule.
pub const UNKNOWN_DISTRICT: &str = "Unknown District";

/// Coarse district assigned from a ring's centroid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum District {
    Named(String),
    Unknown,
}

impl District {
    pub fn as_str(&self) -> &str {
        match self {
            District::Named(name) => name,
            District::Unknown => UNKNOWN_DISTRICT,
        }
    }

    #[inline] pub fn is_unknown(&self) -> bool { matches!(self, District::Unknown) }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<District> for String {
    fn from(district: District) -> Self {
        match district {
            District::Named(name) => name,
            District::Unknown => UNKNOWN_DISTRICT.to_string(),
        }
    }
}

/// Open interval on one axis. A missing side is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub above: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub below: Option<f64>,
}

impl Bound {
    pub const ANY: Bound = Bound { above: None, below: None };

    #[inline] pub const fn above(value: f64) -> Self { Self { above: Some(value), below: None } }

    #[inline] pub const fn below(value: f64) -> Self { Self { above: None, below: Some(value) } }

    /// Strict comparison on both sides; NaN never matches a bounded side.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.above.is_none_or(|lo| value > lo) && self.below.is_none_or(|hi| value < hi)
    }
}

/// An axis-aligned rule over a ring's centroid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictRule {
    pub name: String,
    #[serde(default)]
    pub lng: Bound,
    #[serde(default)]
    pub lat: Bound,
}

impl DistrictRule {
    pub fn new(name: impl Into<String>, lng: Bound, lat: Bound) -> Self {
        Self { name: name.into(), lng, lat }
    }

    #[inline]
    pub fn matches(&self, center: &LatLng) -> bool {
        self.lng.contains(center.lng) && self.lat.contains(center.lat)
    }

    /// Gilgit-Baltistan centroid heuristics, in precedence order.
    /// These overlap and are deliberately not geographic boundaries.
    pub fn default_rules() -> Vec<DistrictRule> {
        vec![
            DistrictRule::new("Gilgit", Bound::above(74.5), Bound::above(35.8)),
            DistrictRule::new("Diamer", Bound::above(74.0), Bound::below(35.5)),
            DistrictRule::new("Hunza", Bound::below(74.0), Bound::above(36.0)),
            DistrictRule::new("Skardu", Bound::above(75.0), Bound::above(35.0)),
            DistrictRule::new("Ghizer", Bound::below(73.0), Bound::above(36.0)),
            DistrictRule::new("Ghanche", Bound::above(76.0), Bound::ANY),
            DistrictRule::new("Nagar", Bound::below(72.5), Bound::ANY),
        ]
    }

    /// The shorter rule list of the first exporter: Gilgit, Diamer, Hunza, Skardu.
    pub fn legacy_rules() -> Vec<DistrictRule> {
        let mut rules = Self::default_rules();
        rules.truncate(4);
        rules
    }
}

/// Assign a district from the ring's vertex-mean centroid; first matching
/// rule wins. Empty rings are always unknown.
pub fn detect_district(ring: &Ring, rules: &[DistrictRule]) -> District {
    let Some(center) = ring.centroid() else { return District::Unknown };
    rules.iter()
        .find(|rule| rule.matches(&center))
        .map_or(District::Unknown, |rule| District::Named(rule.name.clone()))
}
