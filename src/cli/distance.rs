//! Distance command handler
//!
//! Resolves two location queries and prints the distance between them.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::geo;
use crate::marker::{MarkerSlot, TraceSurface};
use crate::pipeline::Orchestrator;
use clap::Args;

/// Distance command arguments
#[derive(Args)]
pub struct DistanceArgs {
    /// Start location (place name or "lat, lon")
    pub start: String,

    /// End location (place name or "lat, lon")
    pub end: String,

    /// Output the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the distance command
pub async fn run(args: DistanceArgs) -> Result<()> {
    let config = Config::load()?;
    let orchestrator = Orchestrator::new(geo::get_geocoder(&config), TraceSurface::default());

    let result = match orchestrator.calculate(&args.start, &args.end).await {
        Ok(result) => result,
        Err(Error::EmptyQuery) => {
            eprintln!("Error: Both locations are required");
            std::process::exit(1);
        }
        Err(Error::NotFound(query)) => {
            eprintln!("Error: Could not geocode '{}'", query);
            std::process::exit(1);
        }
        Err(Error::Transport(reason)) => {
            eprintln!("Error: Geocoding service unavailable ({})", reason);
            std::process::exit(1);
        }
        Err(e) => return Err(e),
    };

    if args.json {
        let start = orchestrator.marker(MarkerSlot::Start).await;
        let end = orchestrator.marker(MarkerSlot::End).await;
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "kilometers": result.kilometers,
                "start": start,
                "end": end,
            }))?
        );
        return Ok(());
    }

    for slot in [MarkerSlot::Start, MarkerSlot::End] {
        if let Some(marker) = orchestrator.marker(slot).await {
            eprintln!(
                "{}: {} ({:.4}, {:.4})",
                slot,
                marker.label.as_deref().unwrap_or("?"),
                marker.position.latitude,
                marker.position.longitude
            );
        }
    }
    println!("Distance: {:.2} km", result.kilometers);

    Ok(())
}
