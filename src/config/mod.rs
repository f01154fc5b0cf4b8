//! Immutable inputs to the two calculators.
//!
//! [`SimulationConfig`] drives the multi-scenario ROI projection;
//! [`GlobalTokenomicsConfig`] drives the KPI snapshot.  Both load from TOML
//! with dashboard defaults for any missing key.  The calculators never
//! mutate them: the presentation layer builds a new value on every change.

mod simulation;
mod tokenomics;

pub use simulation::{
    DEFAULT_HORIZON_MONTHS, DEFAULT_STEPS_PER_MONTH, MAX_HORIZON_MONTHS, MAX_STEPS_PER_MONTH,
    SimulationConfig,
};
pub use tokenomics::{Distribution, GlobalTokenomicsConfig, POOL_SHARE_OF_CIRCULATING};
