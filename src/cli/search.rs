//! Search command handler
//!
//! One-shot coordinate lookup for a single query.

use crate::config::Config;
use crate::error::Result;
use crate::geo::{self, ResolutionOutcome};
use crate::pipeline::SearchController;
use clap::Args;

/// Search command arguments
#[derive(Args)]
pub struct SearchArgs {
    /// Address, city, or state to look up
    pub query: String,

    /// Output the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the search command
pub async fn run(args: SearchArgs) -> Result<()> {
    let config = Config::load()?;
    let controller = SearchController::new(geo::get_geocoder(&config));

    match controller.search(&args.query).await {
        ResolutionOutcome::Resolved(location) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&location)?);
            } else {
                if let Some(name) = &location.display_name {
                    eprintln!("{}", name);
                }
                println!("{:.4}, {:.4}", location.latitude, location.longitude);
            }
        }
        ResolutionOutcome::NotFound => {
            eprintln!("No match found for '{}'", args.query);
            std::process::exit(1);
        }
        ResolutionOutcome::TransportFailure(reason) => {
            eprintln!("Geocoding service unavailable ({})", reason);
            std::process::exit(1);
        }
    }

    Ok(())
}
