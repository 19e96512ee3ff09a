//! algo-bench CLI - Instrumented algorithm benchmarks
//!
//! Experiment parameters (array size, trial count, value ranges, seed) are
//! compiled-in constants; the command line only selects which experiment to
//! run and how the partition report is rendered.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use algo_bench::{
    experiment::{self, ExperimentConfig},
    report, search, sorts,
};

/// algo-bench: instrumented benchmarks for classic algorithms
#[derive(Parser, Debug)]
#[command(name = "algo-bench")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Benchmark Lomuto vs Hoare partitioning across input distributions
    Partition(PartitionArgs),

    /// Sweep instrumented insertion sort and merge sort over random inputs
    Sorts,

    /// Sweep instrumented binary search over sorted random inputs
    Search,

    /// Run all experiments in sequence
    All,
}

#[derive(Parser, Debug)]
struct PartitionArgs {
    /// Output format (text, markdown, json)
    #[arg(long, default_value = "text")]
    format: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Commands::Partition(args) => partition_command(&args),
        Commands::Sorts => sorts_command(),
        Commands::Search => search_command(),
        Commands::All => {
            partition_command(&PartitionArgs {
                format: "text".to_string(),
            })?;
            println!();
            sorts_command()?;
            println!();
            search_command()
        }
    }
}

/// Run the partition experiment and render its report
fn partition_command(args: &PartitionArgs) -> Result<()> {
    let config = ExperimentConfig::default();
    info!(
        array_size = config.array_size,
        trials = config.trials,
        seed = config.seed,
        "running partition experiment"
    );

    let results = experiment::run_partition_experiment(&config)
        .with_context(|| "Failed to run partition experiment")?;

    match args.format.as_str() {
        "json" => {
            let json =
                report::render_json(&results).with_context(|| "Failed to render JSON report")?;
            println!("{json}");
        }
        "markdown" => println!("{}", report::render_markdown(&results)),
        _ => println!("{}", report::render_text(&results)),
    }

    Ok(())
}

/// Run the sorting sweep
fn sorts_command() -> Result<()> {
    info!("running sorting sweep");
    sorts::run_sort_experiment(experiment::DEFAULT_SEED)
        .with_context(|| "Failed to run sorting sweep")
}

/// Run the binary search sweep
fn search_command() -> Result<()> {
    info!("running binary search sweep");
    search::run_search_experiment(experiment::DEFAULT_SEED)
        .with_context(|| "Failed to run binary search sweep")
}
