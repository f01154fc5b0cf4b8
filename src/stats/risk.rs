//! Risk tier classification.
//!
//! Tiers are evaluated worst first and the first match wins:
//!
//! | Tier | Condition (defaults) |
//! |------|----------------------|
//! | Crítico | ratio `< 1%` **or** team `> 30%` |
//! | Alto | ratio `< 5%` **or** team `> 20%` |
//! | Baixo | ratio `>= 10%` **and** team `<= 10%` |
//! | Médio | otherwise |

use serde::{Deserialize, Serialize};

use crate::domain::RiskLevel;

/// Thresholds used by [`classify_risk`].  Ratios are liquidity/market-cap
/// percentages; team values are allocation percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// Ratio below which the pool is critical.
    pub critical_ratio: f64,
    /// Team share above which the token is critical.
    pub critical_team: f64,
    /// Ratio below which the pool is high risk.
    pub high_ratio: f64,
    /// Team share above which the token is high risk.
    pub high_team: f64,
    /// Ratio at or above which the pool may be low risk.
    pub low_ratio: f64,
    /// Team share at or below which the token may be low risk.
    pub low_team: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            critical_ratio: 1.0,
            critical_team: 30.0,
            high_ratio: 5.0,
            high_team: 20.0,
            low_ratio: 10.0,
            low_team: 10.0,
        }
    }
}

/// Classifies a token given its liquidity/market-cap ratio and team
/// allocation, both in percent.
#[must_use]
pub fn classify_risk(
    liquidity_to_mc_ratio: f64,
    team_percentage: f64,
    thresholds: &RiskThresholds,
) -> RiskLevel {
    if liquidity_to_mc_ratio < thresholds.critical_ratio
        || team_percentage > thresholds.critical_team
    {
        RiskLevel::Critico
    } else if liquidity_to_mc_ratio < thresholds.high_ratio
        || team_percentage > thresholds.high_team
    {
        RiskLevel::Alto
    } else if liquidity_to_mc_ratio >= thresholds.low_ratio
        && team_percentage <= thresholds.low_team
    {
        RiskLevel::Baixo
    } else {
        RiskLevel::Medio
    }
}
