use crate::error::Result;
use crate::models::Marketplace;
use crate::pricing::DEFAULT_PERCENTILE;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Selectors locating a listing card and its fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SelectorConfig {
    /// One match per listing card
    pub card: String,
    /// Fields below are searched inside the card
    pub seller_name: String,
    pub listing_title: String,
    pub price: String,
    pub time_ago: String,
    /// Image element; its `src` becomes the listing image
    pub image: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            card: ".D_vj.D_pt".to_string(),
            seller_name: r#"p[data-testid="listing-card-text-seller-name"]"#.to_string(),
            listing_title: ".D_mH.D_mI.D_mM.D_mP.D_mS.D_mU.D_mQ.D_nm".to_string(),
            price: ".D_pX".to_string(),
            time_ago: ".D_nn".to_string(),
            image: ".D_QS.D_QT img".to_string(),
        }
    }
}

/// What to do with a card whose price carries an unknown currency prefix
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyFailurePolicy {
    /// Abort the whole run, no partial listings
    #[default]
    FailRun,
    /// Drop the card and keep going
    SkipListing,
}

/// Extraction settings, loadable from a JSON file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoutConfig {
    pub marketplace: Marketplace,
    pub selectors: SelectorConfig,
    /// Share of the cheapest listings used for the median, in percent
    pub percentile: f64,
    pub on_unknown_currency: CurrencyFailurePolicy,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            marketplace: Marketplace::default(),
            selectors: SelectorConfig::default(),
            percentile: DEFAULT_PERCENTILE,
            on_unknown_currency: CurrencyFailurePolicy::default(),
        }
    }
}

impl ScoutConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
