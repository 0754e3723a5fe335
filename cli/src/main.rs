mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{export, mineral, report, zones};
use tracing::Level;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match &cli.command {
        Commands::Export(args) => export::run(&cli, args),
        Commands::Zones(args) => zones::run(&cli, args),
        Commands::Mineral(args) => mineral::run(&cli, args),
        Commands::Report(args) => report::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
