use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marketplace whose card layout the default `SelectorConfig` describes.
/// Only labels the report; custom selectors keep the default label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Marketplace {
    #[default]
    Carousell,
}

/// Parsed listing price
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Price {
    /// Numeric value, always finite and non-negative
    pub amount: f64,
    /// Locale-formatted currency text, empty when the source had no digits
    pub formatted: String,
}

impl Price {
    /// Price used when the scraped text carries no number at all
    pub fn empty() -> Self {
        Self {
            amount: 0.0,
            formatted: String::new(),
        }
    }
}

/// One listing card extracted from pasted marketplace HTML
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    /// Position of the card in document order
    pub id: usize,
    pub seller_name: String,
    pub listing_title: String,
    pub price: Price,
    /// Recency text as shown on the card, e.g. "3 days ago"
    pub time_ago: String,
    pub image_url: Option<String>,
}

/// Outcome of a single extraction run, handed to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub marketplace: Marketplace,
    pub percentile: f64,
    pub listings: Vec<Listing>,
    /// Median of the cheapest `percentile`%, absent when that subset is empty
    pub low_percentile_median: Option<f64>,
    /// Cards dropped because their currency could not be resolved
    pub skipped: usize,
    pub extracted_at: DateTime<Utc>,
}
