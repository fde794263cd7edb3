//! geospan CLI entry point
//!
//! Geocoded distance calculator - CLI + web map

use geospan::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
