use thiserror::Error;

/// Raised by the export entry points so a host can tell "nothing to export"
/// apart from a failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("no records to export")]
    NoRecords,
    #[error("no free zones to export")]
    NoFreeZones,
    #[error("no polygons found for {0}")]
    NoMatchingMineral(String),
}
