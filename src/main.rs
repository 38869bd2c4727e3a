use anyhow::Context;
use clap::Parser;
use listing_price_scout::models::ExtractionReport;
use listing_price_scout::scrapers::{
    CurrencyFailurePolicy, FileSource, ListingExtractor, MarkupSource, ScoutConfig, StdinSource,
};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "listing-price-scout")]
#[command(about = "Extract marketplace listings from pasted HTML and estimate a low price")]
struct Args {
    /// HTML file to read (stdin when omitted)
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// JSON config with selectors and extraction settings
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Percentile of cheapest listings used for the median
    #[arg(long)]
    percentile: Option<f64>,

    /// Drop listings with an unknown currency instead of failing
    #[arg(long)]
    skip_unknown_currency: bool,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Also write the JSON report to this file
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ScoutConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ScoutConfig::default(),
    };
    if let Some(percentile) = args.percentile {
        config.percentile = percentile;
    }
    if args.skip_unknown_currency {
        config.on_unknown_currency = CurrencyFailurePolicy::SkipListing;
    }

    let source: Box<dyn MarkupSource> = match &args.input {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(StdinSource),
    };
    info!("Reading markup from {}", source.source_name());
    let markup = source.read_markup().await?;

    let extractor = ListingExtractor::new(config).context("Invalid selector configuration")?;
    let settings = extractor.config();
    info!(
        "Extracting {:?} cards matching {:?} (median of lowest {}%)",
        settings.marketplace, settings.selectors.card, settings.percentile
    );
    let report = match extractor.extract_report(&markup) {
        Ok(report) => report,
        Err(err) => {
            error!("Extraction failed, no listings produced: {}", err);
            return Err(err).context("Failed to extract listings");
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&report)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Saved report to {}", path.display());
    }

    Ok(())
}

fn print_report(report: &ExtractionReport) {
    let median = match report.low_percentile_median {
        Some(value) => format!("{:.2}", value),
        None => "n/a".to_string(),
    };
    println!(
        "Listings: {} (Median of lowest {}%: {})",
        report.listings.len(),
        report.percentile,
        median
    );
    println!();

    for listing in &report.listings {
        println!("{}. {}", listing.id + 1, listing.listing_title);
        println!("   Seller: {}", listing.seller_name);
        println!("   Price:  {}", listing.price.formatted);
        println!("   Posted: {}", listing.time_ago);
        if let Some(image) = &listing.image_url {
            println!("   Image:  {}", image);
        }
        println!();
    }
}
