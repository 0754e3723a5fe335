pub mod export;
pub mod mineral;
pub mod report;
pub mod zones;

use anyhow::Result;
use gbminerals::{dedupe_records, read_records_from_json_file, Engine, EngineConfig, PolygonRecord};

use crate::cli::{Cli, InputArgs};

/// Config from `--config`, or the defaults.
pub(crate) fn load_config(cli: &Cli) -> Result<EngineConfig> {
    match &cli.config {
        Some(path) => EngineConfig::from_json_file(path),
        None => Ok(EngineConfig::default()),
    }
}

pub(crate) fn load_engine(cli: &Cli) -> Result<Engine> {
    Ok(Engine::new(load_config(cli)?))
}

pub(crate) fn load_records(args: &InputArgs) -> Result<Vec<PolygonRecord>> {
    let records = read_records_from_json_file(&args.input)?;
    if !args.dedupe { return Ok(records) }

    let deduped = dedupe_records(&records);
    tracing::info!(before = records.len(), after = deduped.len(), "[input] deduplicated records");
    Ok(deduped)
}
