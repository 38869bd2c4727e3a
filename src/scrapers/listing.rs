use crate::error::{Result, ScoutError};
use crate::models::{ExtractionReport, Listing};
use crate::pricing::{low_percentile_median, parse_price};
use crate::scrapers::dom::{self, MarkupNode, Signature};
use crate::scrapers::types::{CurrencyFailurePolicy, ScoutConfig};
use chrono::Utc;
use scraper::Html;
use tracing::{debug, info, warn};

/// Compiled field signatures for one card layout
#[derive(Debug, Clone)]
struct CardSignatures {
    card: Signature,
    seller_name: Signature,
    listing_title: Signature,
    price: Signature,
    time_ago: Signature,
    image: Signature,
}

/// Extracts listing cards from pasted marketplace HTML
#[derive(Debug, Clone)]
pub struct ListingExtractor {
    config: ScoutConfig,
    signatures: CardSignatures,
}

impl ListingExtractor {
    pub fn new(config: ScoutConfig) -> Result<Self> {
        let selectors = &config.selectors;
        let signatures = CardSignatures {
            card: Signature::parse(&selectors.card)?,
            seller_name: Signature::parse(&selectors.seller_name)?,
            listing_title: Signature::parse(&selectors.listing_title)?,
            price: Signature::parse(&selectors.price)?,
            time_ago: Signature::parse(&selectors.time_ago)?,
            image: Signature::parse(&selectors.image)?,
        };
        Ok(Self { config, signatures })
    }

    pub fn config(&self) -> &ScoutConfig {
        &self.config
    }

    /// Extract every listing card in document order.
    pub fn extract(&self, markup: &str) -> Result<Vec<Listing>> {
        self.extract_counting_skips(markup)
            .map(|(listings, _)| listings)
    }

    /// Extract listings and compute the low-percentile median in one go.
    pub fn extract_report(&self, markup: &str) -> Result<ExtractionReport> {
        let (listings, skipped) = self.extract_counting_skips(markup)?;
        let low_percentile_median = low_percentile_median(&listings, self.config.percentile);

        Ok(ExtractionReport {
            marketplace: self.config.marketplace,
            percentile: self.config.percentile,
            listings,
            low_percentile_median,
            skipped,
            extracted_at: Utc::now(),
        })
    }

    fn extract_counting_skips(&self, markup: &str) -> Result<(Vec<Listing>, usize)> {
        let document = Html::parse_document(markup);
        let cards = dom::select_document(&document, &self.signatures.card);
        info!("Found {} listing cards in HTML", cards.len());

        let mut listings = Vec::with_capacity(cards.len());
        let mut skipped = 0;

        for (idx, card) in cards.iter().enumerate() {
            match self.extract_card(idx, card) {
                Ok(listing) => listings.push(listing),
                Err(err @ ScoutError::UnknownCurrency { .. })
                    if self.config.on_unknown_currency == CurrencyFailurePolicy::SkipListing =>
                {
                    warn!("Skipped listing {}: {}", idx, err);
                    skipped += 1;
                }
                Err(err) => {
                    warn!("Extraction aborted at listing {}: {}", idx, err);
                    return Err(err);
                }
            }
        }

        info!(
            "Extracted {} listings ({} skipped)",
            listings.len(),
            skipped
        );
        Ok((listings, skipped))
    }

    fn extract_card<N: MarkupNode>(&self, id: usize, card: &N) -> Result<Listing> {
        let sigs = &self.signatures;

        let price_text = dom::joined_text(card, &sigs.price);
        debug!("Listing {} price text: {:?}", id, price_text);
        let price = parse_price(&price_text)?;

        Ok(Listing {
            id,
            seller_name: dom::joined_text(card, &sigs.seller_name),
            listing_title: dom::joined_text(card, &sigs.listing_title),
            price,
            time_ago: dom::joined_text(card, &sigs.time_ago),
            image_url: dom::first_attr(card, &sigs.image, "src"),
        })
    }
}

/// Extract listings with the default Carousell selectors.
pub fn extract_listings(markup: &str) -> Result<Vec<Listing>> {
    ListingExtractor::new(ScoutConfig::default())?.extract(markup)
}
