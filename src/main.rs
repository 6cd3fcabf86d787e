use clap::Parser;
use listing_watch::logging::init_logging;
use listing_watch::{Client, ClientConfig, ScraperError};
use tracing::error;

/// Print listings posted since the last run, optionally checking each for keywords.
#[derive(Debug, Parser)]
#[command(name = "listing_watch")]
struct Args {
    /// Site subdomain, e.g. `sfbay`.
    location: String,
    /// Search category slug, e.g. `fua`.
    category: String,
    /// Keyword to look for in each new ad. Repeatable.
    #[arg(short, long = "keyword")]
    keywords: Vec<String>,
}

fn run(args: &Args) -> Result<(), ScraperError> {
    let config = ClientConfig::from_env()?;
    let client = Client::from_config(&config)?;

    let batch = client.get_search_list(&args.location, &args.category)?;
    for record in &batch.records {
        let line = serde_json::to_string(record)
            .map_err(|e| ScraperError::Parse(format!("serialize listing {}: {e}", record.id)))?;
        println!("{line}");

        if !args.keywords.is_empty() {
            let found = client.search_page_for_keywords(&record.url, args.keywords.as_slice())?;
            if !found.is_empty() {
                println!("{}: {}", record.id, found.join(", "));
            }
        }
    }

    Ok(())
}

fn main() {
    init_logging("info");
    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{e}");
        std::process::exit(1);
    }
}
