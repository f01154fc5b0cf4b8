//! Time-series records produced by the ROI simulator.

use core::fmt;

use serde::{Serialize, Serializer};

use super::Scenario;

/// Position of an ROI sample on the projection's time axis.
///
/// Renders as `Início` for the initial instant and `Mês n` for the end of
/// month `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeLabel {
    /// The initial instant, before any simulated activity.
    Start,
    /// End of the given month (1-based).
    Month(u32),
}

impl TimeLabel {
    /// Returns the zero-based position on the time axis.
    #[must_use]
    pub const fn ordinal(&self) -> u32 {
        match self {
            Self::Start => 0,
            Self::Month(m) => *m,
        }
    }
}

impl fmt::Display for TimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("Início"),
            Self::Month(m) => write!(f, "Mês {m}"),
        }
    }
}

impl Serialize for TimeLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One sample of the multi-scenario price projection.
///
/// Every scenario price comes from an independent pool walk started from
/// the same initial reserves.  `break_even` is the initial price, drawn as
/// the reference line a buyer at launch needs to stay above.
///
/// Serializes with the scenario labels as keys so a chart can plot each
/// series by key:
///
/// ```text
/// { "month": "Mês 1", "Otimista": 0.12, "Neutro": 0.11, "Pessimista": 0.10, "breakEven": 0.1 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiPoint {
    month: TimeLabel,
    #[serde(rename = "Otimista")]
    optimistic: f64,
    #[serde(rename = "Neutro")]
    neutral: f64,
    #[serde(rename = "Pessimista")]
    pessimistic: f64,
    #[serde(rename = "breakEven")]
    break_even: f64,
}

impl RoiPoint {
    /// Creates a point where every scenario shares the same price.
    #[must_use]
    pub const fn uniform(month: TimeLabel, price: f64, break_even: f64) -> Self {
        Self {
            month,
            optimistic: price,
            neutral: price,
            pessimistic: price,
            break_even,
        }
    }

    /// Returns the time label.
    #[must_use]
    pub const fn month(&self) -> TimeLabel {
        self.month
    }

    /// Returns the projected price for `scenario`.
    #[must_use]
    pub const fn price(&self, scenario: Scenario) -> f64 {
        match scenario {
            Scenario::Optimistic => self.optimistic,
            Scenario::Neutral => self.neutral,
            Scenario::Pessimistic => self.pessimistic,
        }
    }

    /// Returns the break-even reference price.
    #[must_use]
    pub const fn break_even(&self) -> f64 {
        self.break_even
    }

    /// Sets the projected price for `scenario`.
    pub fn set_price(&mut self, scenario: Scenario, price: f64) {
        match scenario {
            Scenario::Optimistic => self.optimistic = price,
            Scenario::Neutral => self.neutral = price,
            Scenario::Pessimistic => self.pessimistic = price,
        }
    }

    /// Returns the return on the break-even price for `scenario`, as a
    /// percentage.  Zero when the break-even price is zero.
    #[must_use]
    pub fn roi_percent(&self, scenario: Scenario) -> f64 {
        if self.break_even <= 0.0 {
            return 0.0;
        }
        (self.price(scenario) / self.break_even - 1.0) * 100.0
    }
}
