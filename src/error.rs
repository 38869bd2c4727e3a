//! Typed errors for the extraction core.
//!
//! The binary wraps these in `anyhow` with context; library callers can match
//! on the variant, e.g. to tell a bad currency apart from a bad selector.

use thiserror::Error;

/// Errors raised while parsing prices or extracting listings.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// Price prefix is not in the currency table
    #[error("unknown currency prefix: {token:?}")]
    UnknownCurrency { token: String },

    /// Selector text `scraper` could not parse
    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSignature { selector: String, reason: String },

    /// Configuration file could not be decoded
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Reading configuration or markup failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScoutError {
    pub fn unknown_currency(token: impl Into<String>) -> Self {
        Self::UnknownCurrency {
            token: token.into(),
        }
    }

    pub fn invalid_signature(selector: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSignature {
            selector: selector.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoutError>;
