//! Four-tier risk classification for the dashboard KPIs.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Overall safety rating derived from liquidity depth and team allocation.
///
/// Variants are declared worst to best, so the derived `Ord` sorts
/// `Critico < Alto < Medio < Baixo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Thin liquidity or a dominant team allocation.
    #[serde(rename = "Crítico")]
    Critico,
    /// Elevated risk.
    #[serde(rename = "Alto")]
    Alto,
    /// Neither clearly risky nor clearly healthy.
    #[serde(rename = "Médio")]
    Medio,
    /// Deep liquidity and a small team allocation.
    #[serde(rename = "Baixo")]
    Baixo,
}

impl RiskLevel {
    /// Returns the dashboard label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Critico => "Crítico",
            Self::Alto => "Alto",
            Self::Medio => "Médio",
            Self::Baixo => "Baixo",
        }
    }

    /// Returns `true` for the critical tier.
    #[must_use]
    pub const fn is_critical(&self) -> bool {
        matches!(self, Self::Critico)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
