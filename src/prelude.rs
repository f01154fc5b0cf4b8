//! Convenience re-exports for common types and functions.
//!
//! ```rust
//! use tokenomics_amm::prelude::*;
//! ```

pub use crate::config::{Distribution, GlobalTokenomicsConfig, SimulationConfig};
pub use crate::domain::{
    ChartDataPoint, LiquidityHealth, RiskLevel, RoiPoint, Scenario, TimeLabel, Timeframe,
    TokenStats,
};
pub use crate::error::{Result, TokenomicsError};
pub use crate::insight::{InsightError, InsightReport, InsightRequest, RetryPolicy};
pub use crate::math::price_from_reserves;
pub use crate::pools::PoolState;
pub use crate::simulation::{RoiSimulator, simulate_roi};
pub use crate::stats::{SnapshotCalculator, calculate_stats};

#[cfg(feature = "insight")]
pub use crate::insight::InsightClient;
#[cfg(feature = "insight")]
pub use crate::traits::InsightProvider;
