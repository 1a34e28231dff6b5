mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fundusgate", about = "Fundus image admissibility gate")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one or more image files
    Check(commands::check::CheckArgs),
    /// Validate every image in a directory
    Batch(commands::batch::BatchArgs),
    /// Print or verify gate configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Check(args) => commands::check::run(args),
        Commands::Batch(args) => commands::batch::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
