use std::path::PathBuf;

use anyhow::Result;
use gbminerals::{write_geojson, Engine};

use super::{load_config, load_records};

/// `GB_COMPLETE_Mineral_Data_<local timestamp>.geojson`
fn default_output() -> PathBuf {
    let stamp = chrono::Local::now().format("%Y-%m-%dT%H-%M-%S");
    PathBuf::from(format!("GB_COMPLETE_Mineral_Data_{stamp}.geojson"))
}

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::ExportArgs) -> Result<()> {
    let mut config = load_config(cli)?;
    config.skip_empty_geometry |= args.skip_empty;
    let engine = Engine::new(config);

    println!("[export] loading records from {}", args.input.input.display());
    let records = load_records(&args.input)?;

    let collection = match engine.export_features(&records) {
        Ok(collection) => collection,
        Err(err) => {
            println!("[export] {err}");
            return Ok(())
        }
    };

    let out_path = args.output.clone().unwrap_or_else(default_output);
    let count = collection["features"].as_array().map_or(0, Vec::len);
    println!("[export] writing {count} features to {}", out_path.display());
    write_geojson(&out_path, &collection)?;

    Ok(())
}
