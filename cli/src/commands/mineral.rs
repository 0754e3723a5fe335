use std::path::PathBuf;

use anyhow::Result;
use gbminerals::{available_minerals, write_geojson};

use super::{load_engine, load_records};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::MineralArgs) -> Result<()> {
    let engine = load_engine(cli)?;
    let records = load_records(&args.input)?;

    if args.list {
        for mineral in available_minerals(&records) {
            println!("{mineral}");
        }
        return Ok(())
    }

    let Some(mineral) = args.mineral.as_deref() else {
        anyhow::bail!("a mineral name is required unless --list is given");
    };

    let collection = match engine.export_mineral(&records, mineral) {
        Ok(collection) => collection,
        Err(err) => {
            println!("[mineral] {err}");
            return Ok(())
        }
    };

    let out_path = args.output.clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}_GB.geojson", mineral.trim())));
    println!("[mineral] writing {mineral} polygons to {}", out_path.display());
    write_geojson(&out_path, &collection)?;

    Ok(())
}
