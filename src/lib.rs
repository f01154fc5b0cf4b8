//! # Tokenomics AMM
//!
//! Price projection and tokenomics statistics for a token traded against a
//! constant-product (`x · y = k`) liquidity pool.
//!
//! The crate has two pure, synchronous calculators:
//!
//! - **ROI simulator**: walks a pool month by month (weekly steps) under
//!   three demand scenarios and returns one [`RoiPoint`](domain::RoiPoint)
//!   per month plus the initial instant.
//! - **Snapshot calculator**: derives dashboard KPIs, a four-tier risk
//!   rating and a weekly history from a global tokenomics configuration.
//!
//! Neither calculator returns errors: degenerate reserves are clamped and
//! unpriceable pools read as price `0`.  The only fallible, asynchronous
//! part is the optional AI-insight boundary in [`insight`].
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `insight` | yes | tokio-based [`InsightClient`](insight::InsightClient) and the [`InsightProvider`](traits::InsightProvider) seam |
//!
//! # Quick Start
//!
//! ```rust
//! use tokenomics_amm::config::{GlobalTokenomicsConfig, SimulationConfig};
//! use tokenomics_amm::domain::{Scenario, Timeframe};
//! use tokenomics_amm::simulation::RoiSimulator;
//! use tokenomics_amm::stats::SnapshotCalculator;
//!
//! // 1. Project twelve months of prices for a $50k / 500k token pool.
//! let sim = SimulationConfig::new(50_000.0, 500_000.0)
//!     .with_buyers(100.0, 100.0)
//!     .with_injections(1_000.0, 0.0);
//! let points = RoiSimulator::new(sim).run();
//! assert_eq!(points.len(), 13);
//! assert!(points[12].price(Scenario::Optimistic) > points[12].price(Scenario::Pessimistic));
//!
//! // 2. Derive KPIs and a 4-week history for the dashboard.
//! let global = GlobalTokenomicsConfig::default();
//! let (stats, history) =
//!     SnapshotCalculator::new(&global).report(Scenario::Neutral, Timeframe::Weeks4);
//! assert!(stats.liquidity_to_mc_ratio > 0.0);
//! assert_eq!(history.len(), 5);
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`math`] | Reserve pricing primitive and clamping helpers |
//! | [`domain`] | Scenarios, ROI points, KPI snapshots, risk and health tiers |
//! | [`config`] | [`SimulationConfig`](config::SimulationConfig) and [`GlobalTokenomicsConfig`](config::GlobalTokenomicsConfig), TOML loading |
//! | [`pools`] | [`PoolState`](pools::PoolState): the scenario-local reserve walk |
//! | [`simulation`] | [`RoiSimulator`](simulation::RoiSimulator) |
//! | [`stats`] | [`SnapshotCalculator`](stats::SnapshotCalculator) and risk tiers |
//! | [`insight`] | AI-insight request, report, errors and retry policy |
//! | [`traits`] | [`InsightProvider`](traits::InsightProvider) seam |
//! | [`error`] | [`TokenomicsError`](error::TokenomicsError) for configuration |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod error;
pub mod insight;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod simulation;
pub mod stats;
#[cfg(feature = "insight")]
pub mod traits;
