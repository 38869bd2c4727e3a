use crate::error::Result;
use crate::models::Price;
use crate::pricing::currency;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Leading non-digit prefix, then everything from the first digit on.
static PRICE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^([^0-9]*)([0-9].*)$").unwrap());

static DIGIT_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Parse scraped price text such as `"$1,234"` or `"RM99.50"`.
///
/// Text without any digit yields [`Price::empty`]. Text with digits must start
/// with a known currency prefix, otherwise `UnknownCurrency` is returned.
pub fn parse_price(raw: &str) -> Result<Price> {
    let Some(caps) = PRICE_SHAPE.captures(raw) else {
        debug!("No digits in price text {:?}", raw);
        return Ok(Price::empty());
    };

    let prefix = caps.get(1).map_or("", |m| m.as_str()).trim();
    let numeric = caps.get(2).map_or("", |m| m.as_str());

    let info = currency::resolve(prefix)?;
    let amount = sanitize_amount(numeric);

    Ok(Price {
        amount,
        formatted: info.format(amount),
    })
}

/// Turn the numeric part of a price into a number.
///
/// Commas are dropped first, then the remaining digit runs are joined with
/// `.`: `"1,234"` is 1234 while `"12 off 34"` is 12.34. Anything that does not
/// end up as a finite number (three or more runs, overflow) is 0.
pub fn sanitize_amount(numeric: &str) -> f64 {
    let without_commas = numeric.replace(',', "");
    let runs: Vec<&str> = DIGIT_RUNS
        .find_iter(&without_commas)
        .map(|m| m.as_str())
        .collect();

    if runs.is_empty() {
        return 0.0;
    }

    match runs.join(".").parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            debug!("Unparseable amount {:?}, using 0", numeric);
            0.0
        }
    }
}
