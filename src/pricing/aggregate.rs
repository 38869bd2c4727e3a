use crate::models::Listing;

/// Share of the cheapest listings used for the median, in percent.
pub const DEFAULT_PERCENTILE: f64 = 30.0;

/// Median price of the cheapest `percentile`% of `listings`.
///
/// Amounts are sorted ascending and the first `floor(percentile / 100 * n)` of
/// them form the low subset. Returns `None` when that subset is empty, which
/// covers an empty input, a cutoff that rounds down to 0 and a NaN or
/// non-positive percentile. A percentile above 100 uses every listing.
pub fn low_percentile_median(listings: &[Listing], percentile: f64) -> Option<f64> {
    let mut amounts: Vec<f64> = listings.iter().map(|l| l.price.amount).collect();
    amounts.sort_by(f64::total_cmp);

    let cutoff = (percentile / 100.0 * amounts.len() as f64).floor();
    if cutoff.is_nan() || cutoff < 1.0 {
        return None;
    }
    let cutoff = (cutoff as usize).min(amounts.len());

    median_of_sorted(&amounts[..cutoff])
}

/// Median of an already sorted slice; the two central values are averaged
/// when the length is even.
pub fn median_of_sorted(sorted: &[f64]) -> Option<f64> {
    let len = sorted.len();
    if len == 0 {
        return None;
    }
    let middle = len / 2;
    if len % 2 == 0 {
        Some((sorted[middle - 1] + sorted[middle]) / 2.0)
    } else {
        Some(sorted[middle])
    }
}
