use anyhow::Result;
use gbminerals::DatasetReport;

use super::{load_engine, load_records};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::ReportArgs) -> Result<()> {
    let engine = load_engine(cli)?;
    let records = load_records(&args.input)?;
    let report = DatasetReport::from_records(&records, engine.config());

    match &args.district {
        Some(district) => println!("{district}: {}", report.count_for(district)),
        None => print!("{report}"),
    }

    if args.strict && !report.is_clean() {
        anyhow::bail!("[report] {} warning(s): {}", report.warnings.len(), report.warnings.join("; "));
    }
    Ok(())
}
