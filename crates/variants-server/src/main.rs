//! Variants API server
//!
//! REST API over a coronavirus variants collection, with a Redis cache in
//! front of full-collection reads.

// Force-link variants-providers to ensure linkme registrations are included
extern crate variants_providers;

use clap::Parser;
use variants_server::args::Cli;
use variants_server::run;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref(), cli.overrides()).await
}
