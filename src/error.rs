//! Unified error types for the tokenomics engine.
//!
//! The simulation and statistics calculators are infallible: degenerate
//! reserves are clamped rather than reported.  `TokenomicsError` only
//! surfaces from configuration builders and configuration loading.  The
//! insight collaborator has its own failure channel in
//! [`InsightError`](crate::insight::InsightError).

use thiserror::Error;

/// Errors raised while building or loading configuration.
#[derive(Debug, Error)]
pub enum TokenomicsError {
    /// A configuration parameter is out of its accepted range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A TOML configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl TokenomicsError {
    /// Returns `true` if this error came from parameter validation rather
    /// than from parsing.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }
}

/// Convenience alias used by fallible configuration APIs.
pub type Result<T> = core::result::Result<T, TokenomicsError>;
