//! Snapshot statistics: KPIs, risk tiers and weekly history.

mod risk;
mod snapshot;

pub use risk::{RiskThresholds, classify_risk};
pub use snapshot::{SnapshotCalculator, VESTING_PERIOD_WEEKS, calculate_stats};
