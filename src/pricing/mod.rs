pub mod aggregate;
pub mod currency;
pub mod parser;

pub use aggregate::{low_percentile_median, DEFAULT_PERCENTILE};
pub use currency::{resolve, CurrencyInfo};
pub use parser::parse_price;
