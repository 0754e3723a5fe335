use std::path::PathBuf;

use anyhow::Result;
use gbminerals::{clusters_to_geojson, format_table, summarize_top, write_geojson, ZONES_NAME};

use super::{load_engine, load_records};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::ZonesArgs) -> Result<()> {
    let engine = load_engine(cli)?;

    println!("[zones] loading records from {}", args.input.input.display());
    let records = load_records(&args.input)?;

    println!("[zones] clustering free areas (threshold {})", engine.config().proximity_threshold);
    let clusters = match engine.select_zones(&records, args.mineral.as_deref()) {
        Ok(clusters) => clusters,
        Err(err) => {
            println!("[zones] {err}");
            return Ok(())
        }
    };

    let top = args.top.unwrap_or(engine.config().top_n);
    println!("{}", format_table(&summarize_top(&clusters, top)));

    let out_path = args.output.clone().unwrap_or_else(|| PathBuf::from(format!("{ZONES_NAME}.geojson")));
    println!("[zones] writing {} zones to {}", clusters.len(), out_path.display());
    write_geojson(&out_path, &clusters_to_geojson(&clusters, ZONES_NAME))?;

    Ok(())
}
