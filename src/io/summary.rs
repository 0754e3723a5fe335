use std::fmt::Write;

use serde::Serialize;

use crate::zones::{top_n, Cluster};

/// One row of the top free-zones table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneSummary {
    pub rank: usize,
    pub area_km2: f64,
    pub points: usize,
    pub potential_mineral: String,
    /// `[lat, lng]` pairs in cluster order.
    pub coordinates: Vec<[f64; 2]>,
}

impl ZoneSummary {
    /// The coordinate list as `[lat,lng]; [lat,lng]; ...` with five decimals.
    pub fn coordinates_text(&self) -> String {
        self.coordinates.iter()
            .map(|[lat, lng]| format!("[{lat:.5},{lng:.5}]"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Summaries of the first `n` ranked clusters.
pub fn summarize_top(ranked: &[Cluster], n: usize) -> Vec<ZoneSummary> {
    top_n(ranked, n).iter().enumerate().map(|(i, c)| ZoneSummary {
        rank: i + 1,
        area_km2: c.area_km2(),
        points: c.point_count(),
        potential_mineral: c.potential_mineral().to_string(),
        coordinates: c.points().iter().map(|p| [p.lat, p.lng]).collect(),
    }).collect()
}

/// Plain-text table of `rows`: one line per zone, followed by an indented
/// line with its coordinates.
pub fn format_table(rows: &[ZoneSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>3}  {:>10}  {:>6}  {}", "#", "Area km²", "Points", "Potential Mineral");
    for row in rows {
        let _ = writeln!(out, "{:>3}  {:>10.2}  {:>6}  {}", row.rank, row.area_km2, row.points, row.potential_mineral);
        let _ = writeln!(out, "     coords: {}", row.coordinates_text());
    }
    out
}
