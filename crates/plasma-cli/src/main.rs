#![doc = include_str!("../README.md")]

use clap::{Parser, Subcommand};
use plasma_cli::logging::init_tracing;
use plasma_cli::{decide, prove, verify};
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Logging level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", env = "PLASMA_LOG_LEVEL")]
    log_level: String,
}

#[derive(Subcommand, Clone, Debug)]
enum Commands {
    /// Build a block and inclusion proofs from state updates
    Prove(prove::ProveArgs),
    /// Verify inclusion proofs against a block root
    Verify(verify::VerifyArgs),
    /// Decide a property with the built-in deciders
    Decide(decide::DecideArgs),
}

async fn run(command: Commands) -> Result<(), anyhow::Error> {
    match command {
        Commands::Prove(args) => prove::run(args).await,
        Commands::Verify(args) => verify::run(args).await,
        Commands::Decide(args) => decide::run(args).await,
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    if let Err(err) = init_tracing(&cli.log_level) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }

    if let Err(err) = run(cli.command).await {
        error!("plasma failed: {:#}", err);
        std::process::exit(1);
    }
    info!("plasma finished");
}
