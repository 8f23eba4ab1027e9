use clap::{Parser, Subcommand};
use fred_navigator::navigator::Navigator;
use fred_navigator::settings::ResultsConfig;
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    results: ResultsConfig,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every parameter combination in RESULTS/KEY
    Keys(cmd::keys::KeysArgs),
    /// Dump one report variable of one job
    Series(cmd::series::SeriesArgs),
    /// Load a topic chart for a slider selection
    Chart(cmd::chart::ChartArgs),
}

fn main() {
    // stdout carries tables and JSON; logs go to stderr.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    info!("🚀 Initializing FRED Navigator...");

    let root = cli.results.resolve_root().unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let navigator = match Navigator::open(&root) {
        Ok(n) => n,
        Err(e) => {
            error!("❌ FATAL ERROR OPENING RESULTS:");
            error!("   {}", e);
            process::exit(1);
        }
    };

    let outcome = match cli.command {
        Commands::Keys(args) => cmd::keys::run(args, &navigator),
        Commands::Series(args) => cmd::series::run(args, &navigator),
        Commands::Chart(args) => cmd::chart::run(args, &navigator),
    };

    if let Err(e) = outcome {
        error!("{}", e);
        process::exit(1);
    }
}
