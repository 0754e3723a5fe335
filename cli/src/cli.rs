use std::path::PathBuf;

/// Mineral-rights classification and free-zone CLI
#[derive(clap::Parser, Debug)]
#[command(name = "gbminerals", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Engine configuration (JSON), defaults when omitted
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Export every polygon with area type, district and area
    Export(ExportArgs),

    /// Cluster free areas, rank them and export the zones
    Zones(ZonesArgs),

    /// Export the raw polygons of one mineral
    Mineral(MineralArgs),

    /// Summarize districts, minerals and area types in a snapshot
    Report(ReportArgs),
}

#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// JSON array of polygon records
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Collapse records sharing geometry, mineral and company
    #[arg(long)]
    pub dedupe: bool,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output GeoJSON file, defaults to a timestamped name in "."
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Leave out polygons whose geometry has no coordinate pairs
    #[arg(long)]
    pub skip_empty: bool,
}

#[derive(clap::Args, Debug)]
pub struct ZonesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output GeoJSON file, defaults to "./GB_Free_Areas_Potential.geojson"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Rows in the printed summary, defaults to the configured top_n
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Keep only zones whose potential mineral matches exactly
    #[arg(short, long)]
    pub mineral: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct MineralArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Mineral to export (case-insensitive)
    #[arg(required_unless_present = "list")]
    pub mineral: Option<String>,

    /// Print the available minerals instead of exporting
    #[arg(short, long)]
    pub list: bool,

    /// Output GeoJSON file, defaults to "./<MINERAL>_GB.geojson"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print only the polygon count of this district
    #[arg(short, long)]
    pub district: Option<String>,

    /// Fail when the report has warnings
    #[arg(long)]
    pub strict: bool,
}
