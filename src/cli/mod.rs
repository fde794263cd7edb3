//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod distance;
pub mod search;
pub mod serve;

use clap::{Parser, Subcommand};

/// Geocode two locations and measure the distance between them
#[derive(Parser)]
#[command(name = "geospan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve two locations and print the great-circle distance
    Distance(distance::DistanceArgs),

    /// Look up coordinates for a single location
    Search(search::SearchArgs),

    /// Start the web map (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Distance(args) => distance::run(args).await,
        Commands::Search(args) => search::run(args).await,
        Commands::Serve(args) => serve::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}
