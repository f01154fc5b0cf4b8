//! Multi-scenario ROI price projection.
//!
//! # Algorithm
//!
//! For every [`Scenario`], independently and from identical initial
//! reserves:
//!
//! 1. Build a [`PoolState`] from the config (reserves clamped to
//!    [`MIN_RESERVE`](crate::math::MIN_RESERVE)).
//! 2. For each month, run `steps_per_month` steps of
//!    buy → inject → refresh `k` (see [`PoolState::step`]).  Buy volume per
//!    step is `monthly_users × average_ticket / steps_per_month ×
//!    multiplier`.
//! 3. Record `usd / tokens` at the end of the month.
//!
//! The output has one [`RoiPoint`] for the initial instant plus one per
//! month.  The initial entry prices the *raw* configured reserves, so a
//! zero token reserve shows a price of `0` before clamping takes over.

use log::debug;

use crate::config::SimulationConfig;
use crate::domain::{RoiPoint, Scenario, TimeLabel};
use crate::math::price_from_reserves;
use crate::pools::{PoolState, StepFlows};

/// Pool state observed at the end of one step of a scenario walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSnapshot {
    /// Month the step belongs to (1-based).
    pub month: u32,
    /// Step within the month (1-based).
    pub step: u32,
    /// Pool state after the refresh phase.
    pub pool: PoolState,
}

/// Deterministic projection engine over a [`SimulationConfig`].
///
/// Pure: calling [`run`](Self::run) twice yields identical output.
///
/// # Example
///
/// ```rust
/// use tokenomics_amm::config::SimulationConfig;
/// use tokenomics_amm::domain::Scenario;
/// use tokenomics_amm::simulation::RoiSimulator;
///
/// let cfg = SimulationConfig::new(50_000.0, 500_000.0).with_buyers(100.0, 100.0);
/// let points = RoiSimulator::new(cfg).run();
/// assert_eq!(points.len(), 13);
/// assert!(points[1].price(Scenario::Neutral) > points[0].price(Scenario::Neutral));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiSimulator {
    config: SimulationConfig,
}

impl RoiSimulator {
    /// Creates a simulator for `config`.
    #[must_use]
    pub const fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns the price of the raw configured reserves.
    #[must_use]
    pub fn initial_price(&self) -> f64 {
        price_from_reserves(
            self.config.initial_liquidity_usd(),
            self.config.initial_tokens_in_pool(),
        )
    }

    /// Runs all scenarios and returns `horizon_months + 1` points.
    #[must_use]
    pub fn run(&self) -> Vec<RoiPoint> {
        let initial = self.initial_price();
        let months = self.config.horizon_months();

        let mut points: Vec<RoiPoint> = core::iter::once(TimeLabel::Start)
            .chain((1..=months).map(TimeLabel::Month))
            .map(|label| RoiPoint::uniform(label, initial, initial))
            .collect();

        for scenario in Scenario::ALL {
            let prices = self.monthly_prices(scenario);
            for point in &mut points {
                let Some(month) = (point.month().ordinal() as usize).checked_sub(1) else {
                    continue;
                };
                if let Some(&price) = prices.get(month) {
                    point.set_price(scenario, price);
                }
            }
        }

        points
    }

    /// Walks one scenario and returns the end-of-month prices.
    #[must_use]
    pub fn monthly_prices(&self, scenario: Scenario) -> Vec<f64> {
        let steps = self.config.steps_per_month();
        let flows = StepFlows::from_config(&self.config, scenario.multiplier());
        let mut pool = PoolState::from_config(&self.config);

        let prices: Vec<f64> = (1..=self.config.horizon_months())
            .map(|_| {
                for _ in 0..steps {
                    pool.step(&flows);
                }
                pool.price()
            })
            .collect();

        debug!(
            "scenario {scenario}: {} months, final price {:.6}",
            prices.len(),
            prices.last().copied().unwrap_or_default()
        );
        prices
    }

    /// Walks one scenario and returns the pool state after every step.
    ///
    /// Useful for inspecting how `k` evolves: each snapshot's invariant is
    /// the one the following step's buy phase holds fixed.
    #[must_use]
    pub fn weekly_trace(&self, scenario: Scenario) -> Vec<StepSnapshot> {
        let steps = self.config.steps_per_month();
        let flows = StepFlows::from_config(&self.config, scenario.multiplier());
        let mut pool = PoolState::from_config(&self.config);
        let len = (self.config.horizon_months() as usize).saturating_mul(steps as usize);
        let mut trace = Vec::with_capacity(len);

        for month in 1..=self.config.horizon_months() {
            for step in 1..=steps {
                pool.step(&flows);
                trace.push(StepSnapshot { month, step, pool });
            }
        }
        trace
    }
}

/// Projects prices with the default 12-month, weekly-step grid.
///
/// Positional form of [`RoiSimulator::run`] kept for callers that pass the
/// dashboard form fields directly.
#[must_use]
pub fn simulate_roi(
    initial_liquidity_usd: f64,
    initial_tokens_in_pool: f64,
    monthly_users: f64,
    average_ticket: f64,
    monthly_liquidity_usd: f64,
    monthly_token_injection: f64,
) -> Vec<RoiPoint> {
    let config = SimulationConfig::new(initial_liquidity_usd, initial_tokens_in_pool)
        .with_buyers(monthly_users, average_ticket)
        .with_injections(monthly_liquidity_usd, monthly_token_injection);
    RoiSimulator::new(config).run()
}

/// Like [`simulate_roi`] without external token injection.
#[must_use]
pub fn simulate_roi_without_token_injection(
    initial_liquidity_usd: f64,
    initial_tokens_in_pool: f64,
    monthly_users: f64,
    average_ticket: f64,
    monthly_liquidity_usd: f64,
) -> Vec<RoiPoint> {
    simulate_roi(
        initial_liquidity_usd,
        initial_tokens_in_pool,
        monthly_users,
        average_ticket,
        monthly_liquidity_usd,
        0.0,
    )
}
