use std::fmt;

use serde::{Deserialize, Serialize};

/// Legal/administrative status of a polygon, derived from its grant status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaType {
    #[serde(rename = "Mining Lease")]
    MiningLease,
    #[serde(rename = "Applied Area")]
    AppliedArea,
    #[serde(rename = "Reserved Area")]
    ReservedArea,
    #[serde(rename = "Study Area")]
    StudyArea,
    #[serde(rename = "Free Area")]
    FreeArea,
    Other,
}

/// Substring rules in precedence order; the first rule with any matching
/// needle wins.
const RULES: &[(&[&str], AreaType)] = &[
    (&["grant", "lease"], AreaType::MiningLease),
    (&["applied", "pending"], AreaType::AppliedArea),
    (&["reserve"], AreaType::ReservedArea),
    (&["study", "research"], AreaType::StudyArea),
    (&["free"], AreaType::FreeArea),
];

impl AreaType {
    pub const ALL: [AreaType; 6] = [
        AreaType::MiningLease,
        AreaType::AppliedArea,
        AreaType::ReservedArea,
        AreaType::StudyArea,
        AreaType::FreeArea,
        AreaType::Other,
    ];

    /// Classify a grant status by case-insensitive substring match.
    /// A missing or empty status is a free area.
    pub fn from_status(status: Option<&str>) -> Self {
        let status = status.unwrap_or("").to_lowercase();
        if status.is_empty() { return AreaType::FreeArea }

        RULES.iter()
            .find(|(needles, _)| needles.iter().any(|needle| status.contains(needle)))
            .map_or(AreaType::Other, |&(_, ty)| ty)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AreaType::MiningLease => "Mining Lease",
            AreaType::AppliedArea => "Applied Area",
            AreaType::ReservedArea => "Reserved Area",
            AreaType::StudyArea => "Study Area",
            AreaType::FreeArea => "Free Area",
            AreaType::Other => "Other",
        }
    }
}

impl fmt::Display for AreaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a grant status; see [`AreaType::from_status`].
#[inline]
pub fn classify_area_type(status: Option<&str>) -> AreaType {
    AreaType::from_status(status)
}
