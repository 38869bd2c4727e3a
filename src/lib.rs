//! Extracts marketplace listing cards from pasted HTML and estimates a
//! typical low price as the median of the cheapest listings.

pub mod error;
pub mod models;
pub mod pricing;
pub mod scrapers;

pub use error::{Result, ScoutError};
pub use models::{ExtractionReport, Listing, Marketplace, Price};
pub use pricing::{low_percentile_median, parse_price, DEFAULT_PERCENTILE};
pub use scrapers::{extract_listings, ListingExtractor, ScoutConfig};
