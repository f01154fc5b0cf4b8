//! Market scenarios and their demand multipliers.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative market scenario driving buy-side volume.
///
/// Each scenario scales the projected buy volume by a fixed demand
/// multiplier.  The multipliers are strictly ordered:
/// `Optimistic > Neutral > Pessimistic`, with `Neutral` as the `1.0`
/// baseline.
///
/// # Examples
///
/// ```
/// use tokenomics_amm::domain::Scenario;
///
/// assert!(Scenario::Optimistic.multiplier() > Scenario::Pessimistic.multiplier());
/// assert_eq!(Scenario::Neutral.label(), "Neutro");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Scenario {
    /// Strong demand: buy volume × 1.5.
    #[serde(rename = "Otimista")]
    Optimistic,
    /// Baseline demand: buy volume × 1.0.
    #[default]
    #[serde(rename = "Neutro")]
    Neutral,
    /// Weak demand: buy volume × 0.5.
    #[serde(rename = "Pessimista")]
    Pessimistic,
}

impl Scenario {
    /// All scenarios in plot order.
    pub const ALL: [Self; 3] = [Self::Optimistic, Self::Neutral, Self::Pessimistic];

    /// Returns the demand multiplier applied to buy-side volume.
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::Optimistic => 1.5,
            Self::Neutral => 1.0,
            Self::Pessimistic => 0.5,
        }
    }

    /// Returns the dashboard label for the scenario.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Optimistic => "Otimista",
            Self::Neutral => "Neutro",
            Self::Pessimistic => "Pessimista",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
