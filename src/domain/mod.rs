//! Value types shared by the simulators and their consumers.
//!
//! Scenarios and their demand multipliers, the ROI time-series record,
//! KPI snapshots, chart samples, and the risk and liquidity-health
//! classifications.  Everything here is plain data: no type in this module
//! mutates pool state.

mod liquidity_health;
mod risk_level;
mod roi_point;
mod scenario;
mod timeframe;
mod token_stats;

pub use liquidity_health::LiquidityHealth;
pub use risk_level::RiskLevel;
pub use roi_point::{RoiPoint, TimeLabel};
pub use scenario::Scenario;
pub use timeframe::Timeframe;
pub use token_stats::{ChartDataPoint, TokenStats};
