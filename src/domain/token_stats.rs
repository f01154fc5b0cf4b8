//! Point-in-time KPI snapshot and weekly chart samples.

use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// Dashboard KPIs derived from a
/// [`GlobalTokenomicsConfig`](crate::config::GlobalTokenomicsConfig).
///
/// Recomputed from scratch on every configuration change; carries no
/// identity of its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenStats {
    /// Pool price in USD per token.
    pub price: f64,
    /// Fully diluted valuation: `price × total_supply`.
    pub market_cap: f64,
    /// USD liquidity in the pool.
    pub liquidity: f64,
    /// Tokens in circulation.
    pub circulating_supply: f64,
    /// Maximum token supply.
    pub total_supply: f64,
    /// Team allocation in percent.
    pub team_percentage: f64,
    /// Burned tokens as a percentage of total supply.
    pub burn_percentage: f64,
    /// Current user count.
    pub user_count: u64,
    /// Overall risk tier.
    pub risk_level: RiskLevel,
    /// `liquidity / market_cap × 100`.
    pub liquidity_to_mc_ratio: f64,
}

/// One week of the projected statistics history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataPoint {
    /// Week number; `0` is the snapshot itself.
    pub week: u32,
    /// Pool price at the end of the week.
    pub price: f64,
    /// USD liquidity at the end of the week.
    pub liquidity: f64,
    /// Circulating supply at the end of the week.
    pub supply: f64,
    /// Fully diluted valuation at the end of the week.
    pub market_cap: f64,
}
