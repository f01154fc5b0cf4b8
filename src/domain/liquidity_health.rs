//! Liquidity health badge for the ROI simulator inputs.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::math::ratio_percent;

/// Liquidity depth of a pool relative to the value of its circulating
/// tokens.
///
/// | Ratio (liquidity / MC) | Health |
/// |------------------------|--------|
/// | `< 5%` | [`Critico`](Self::Critico) |
/// | `10% ..= 15%` | [`Saudavel`](Self::Saudavel) |
/// | `> 20%` | [`Otima`](Self::Otima) |
/// | anything else | [`Estavel`](Self::Estavel) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiquidityHealth {
    /// Liquidity below 5% of market cap.
    #[serde(rename = "CRÍTICO")]
    Critico,
    /// Neither critical nor in a target band.
    #[serde(rename = "ESTÁVEL")]
    Estavel,
    /// Liquidity between 10% and 15% of market cap.
    #[serde(rename = "SAUDÁVEL")]
    Saudavel,
    /// Liquidity above 20% of market cap.
    #[serde(rename = "ÓTIMA")]
    Otima,
}

impl LiquidityHealth {
    /// Classifies a liquidity/market-cap ratio expressed in percent.
    #[must_use]
    pub fn from_ratio(ratio_percent: f64) -> Self {
        if ratio_percent < 5.0 {
            Self::Critico
        } else if (10.0..=15.0).contains(&ratio_percent) {
            Self::Saudavel
        } else if ratio_percent > 20.0 {
            Self::Otima
        } else {
            Self::Estavel
        }
    }

    /// Assesses a pool given its USD liquidity, token price and the number
    /// of tokens valued at that price.
    ///
    /// A zero market cap is treated as `1` so an unpriced token reads as
    /// fully backed rather than dividing by zero.
    #[must_use]
    pub fn assess(liquidity_usd: f64, price: f64, circulating_tokens: f64) -> Self {
        Self::from_ratio(Self::ratio(liquidity_usd, price, circulating_tokens))
    }

    /// Returns the liquidity/market-cap ratio in percent used by
    /// [`assess`](Self::assess).
    #[must_use]
    pub fn ratio(liquidity_usd: f64, price: f64, circulating_tokens: f64) -> f64 {
        let market_cap = price * circulating_tokens;
        let market_cap = if market_cap == 0.0 { 1.0 } else { market_cap };
        ratio_percent(liquidity_usd, market_cap)
    }

    /// Returns the badge label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Critico => "CRÍTICO",
            Self::Estavel => "ESTÁVEL",
            Self::Saudavel => "SAUDÁVEL",
            Self::Otima => "ÓTIMA",
        }
    }
}

impl fmt::Display for LiquidityHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
