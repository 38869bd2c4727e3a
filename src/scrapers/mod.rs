pub mod dom;
pub mod listing;
pub mod sources;
pub mod traits;
pub mod types;

pub use listing::{extract_listings, ListingExtractor};
pub use sources::{FileSource, StdinSource};
pub use traits::MarkupSource;
pub use types::{CurrencyFailurePolicy, ScoutConfig, SelectorConfig};
