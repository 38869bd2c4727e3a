use crate::error::{Result, ScoutError};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Locale, ISO 4217 code and number format for one supported currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyInfo {
    pub locale: &'static str,
    pub code: &'static str,
    pub symbol: &'static str,
    pub group_separator: &'static str,
    pub decimal_separator: &'static str,
    pub minor_digits: usize,
}

/// Currency table keyed by the lower-cased price prefix.
/// Both locales place the symbol in front of the number without a space.
static CURRENCIES: LazyLock<HashMap<&'static str, CurrencyInfo>> = LazyLock::new(|| {
    HashMap::from([
        (
            "$",
            CurrencyInfo {
                locale: "en-SG",
                code: "SGD",
                symbol: "$",
                group_separator: ",",
                decimal_separator: ".",
                minor_digits: 2,
            },
        ),
        (
            "rm",
            CurrencyInfo {
                locale: "ms-MY",
                code: "MYR",
                symbol: "RM",
                group_separator: ",",
                decimal_separator: ".",
                minor_digits: 2,
            },
        ),
    ])
});

/// Look up the currency for a price prefix, case-insensitively.
pub fn resolve(token: &str) -> Result<&'static CurrencyInfo> {
    CURRENCIES
        .get(token.to_lowercase().as_str())
        .ok_or_else(|| ScoutError::unknown_currency(token))
}

impl CurrencyInfo {
    /// Render `amount` as currency text for this locale.
    pub fn format(&self, amount: f64) -> String {
        // Ties round away from zero; `{:.N}` alone would round them to even.
        let scale = 10f64.powi(self.minor_digits as i32);
        let rounded = (amount.abs() * scale).round() / scale;
        let fixed = format!("{:.*}", self.minor_digits, rounded);
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (fixed.as_str(), None),
        };

        let mut out = String::with_capacity(fixed.len() + self.symbol.len() + 4);
        if amount < 0.0 {
            out.push('-');
        }
        out.push_str(self.symbol);
        out.push_str(&group_thousands(int_part, self.group_separator));
        if let Some(frac) = frac_part {
            out.push_str(self.decimal_separator);
            out.push_str(frac);
        }
        out
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}
