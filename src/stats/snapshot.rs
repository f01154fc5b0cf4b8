//! KPI snapshot and weekly history from a [`GlobalTokenomicsConfig`].
//!
//! Unlike the ROI simulator, the snapshot does not take explicit pool
//! inputs: the pool's token side is approximated as a fixed share of the
//! circulating supply (see
//! [`POOL_SHARE_OF_CIRCULATING`](crate::config::POOL_SHARE_OF_CIRCULATING))
//! unless an explicit reserve is configured.
//!
//! # History model
//!
//! Week 0 is the snapshot itself.  Every following week:
//!
//! 1. `new_users_per_day × 7` new buyers each spend `average_ticket`
//!    (scaled by the scenario multiplier), applied as a swap against the
//!    previous week's `k`.  The weekly buyer count is constant; the
//!    history does not track a cumulative user base.
//! 2. `weekly_liquidity_add` USD is injected into the pool and `k`
//!    refreshed.
//! 3. Circulating supply grows by a linear vesting release of
//!    `(total − initial_circulating) × vesting% / 52`, capped at the total
//!    supply.

use log::debug;

use crate::config::GlobalTokenomicsConfig;
use crate::domain::{ChartDataPoint, Scenario, Timeframe, TokenStats};
use crate::math::{price_from_reserves, ratio_percent};
use crate::pools::{PoolState, StepFlows};

use super::{RiskThresholds, classify_risk};

/// Number of weeks over which the vesting allocation is released.
pub const VESTING_PERIOD_WEEKS: f64 = 52.0;

const DAYS_PER_WEEK: f64 = 7.0;

/// Derives [`TokenStats`] and [`ChartDataPoint`] history from a global
/// configuration.
///
/// # Example
///
/// ```rust
/// use tokenomics_amm::config::GlobalTokenomicsConfig;
/// use tokenomics_amm::domain::{Scenario, Timeframe};
/// use tokenomics_amm::stats::SnapshotCalculator;
///
/// let cfg = GlobalTokenomicsConfig::default();
/// let (stats, history) = SnapshotCalculator::new(&cfg).report(Scenario::Neutral, Timeframe::Weeks4);
/// assert!(stats.market_cap > 0.0);
/// assert_eq!(history.len(), 5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SnapshotCalculator<'a> {
    config: &'a GlobalTokenomicsConfig,
    thresholds: RiskThresholds,
}

impl<'a> SnapshotCalculator<'a> {
    /// Creates a calculator with the default [`RiskThresholds`].
    #[must_use]
    pub fn new(config: &'a GlobalTokenomicsConfig) -> Self {
        Self {
            config,
            thresholds: RiskThresholds::default(),
        }
    }

    /// Replaces the risk thresholds.
    #[must_use]
    pub const fn with_thresholds(mut self, thresholds: RiskThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Returns the pool price implied by the configured liquidity and pool
    /// token reserve.
    #[must_use]
    pub fn price(&self) -> f64 {
        price_from_reserves(
            self.config.initial_liquidity_usd,
            self.config.effective_pool_reserve(),
        )
    }

    /// Computes the point-in-time KPIs.
    #[must_use]
    pub fn stats(&self) -> TokenStats {
        let cfg = self.config;
        let price = self.price();
        let market_cap = price * cfg.total_supply;
        let liquidity_to_mc_ratio = ratio_percent(cfg.initial_liquidity_usd, market_cap);
        let risk_level = classify_risk(
            liquidity_to_mc_ratio,
            cfg.distribution.team,
            &self.thresholds,
        );

        debug!(
            "snapshot: price={price:.6} mc={market_cap:.2} ratio={liquidity_to_mc_ratio:.3}% risk={risk_level}"
        );

        TokenStats {
            price,
            market_cap,
            liquidity: cfg.initial_liquidity_usd,
            circulating_supply: cfg.initial_circulating,
            total_supply: cfg.total_supply,
            team_percentage: cfg.distribution.team,
            burn_percentage: ratio_percent(cfg.burn_amount, cfg.total_supply),
            user_count: cfg.current_users,
            risk_level,
            liquidity_to_mc_ratio,
        }
    }

    /// Projects `timeframe.weeks() + 1` weekly samples under `scenario`.
    #[must_use]
    pub fn history(&self, scenario: Scenario, timeframe: Timeframe) -> Vec<ChartDataPoint> {
        let cfg = self.config;
        let weeks = timeframe.weeks();
        let price = self.price();

        let mut points = Vec::with_capacity(weeks as usize + 1);
        points.push(ChartDataPoint {
            week: 0,
            price,
            liquidity: cfg.initial_liquidity_usd,
            supply: cfg.initial_circulating,
            market_cap: price * cfg.total_supply,
        });

        let flows = StepFlows {
            buy_volume: cfg.new_users_per_day
                * DAYS_PER_WEEK
                * cfg.average_ticket
                * scenario.multiplier(),
            usd_injection: cfg.weekly_liquidity_add,
            token_injection: 0.0,
        };
        let release = self.weekly_vesting_release();
        let mut pool = PoolState::new(cfg.initial_liquidity_usd, cfg.effective_pool_reserve());
        let mut supply = cfg.initial_circulating;

        for week in 1..=weeks {
            pool.step(&flows);
            supply = (supply + release).min(cfg.total_supply.max(cfg.initial_circulating));
            let price = pool.price();
            points.push(ChartDataPoint {
                week,
                price,
                liquidity: pool.usd_reserve(),
                supply,
                market_cap: price * cfg.total_supply,
            });
        }

        debug!("history: scenario {scenario}, {} points", points.len());
        points
    }

    /// Computes both the snapshot and its weekly history.
    #[must_use]
    pub fn report(
        &self,
        scenario: Scenario,
        timeframe: Timeframe,
    ) -> (TokenStats, Vec<ChartDataPoint>) {
        (self.stats(), self.history(scenario, timeframe))
    }

    /// Tokens entering circulation each week through vesting.
    #[must_use]
    pub fn weekly_vesting_release(&self) -> f64 {
        let cfg = self.config;
        let locked = (cfg.total_supply - cfg.initial_circulating).max(0.0);
        locked * (cfg.distribution.vesting / 100.0) / VESTING_PERIOD_WEEKS
    }
}

/// Computes the snapshot and history with default thresholds.
#[must_use]
pub fn calculate_stats(
    config: &GlobalTokenomicsConfig,
    scenario: Scenario,
    timeframe: Timeframe,
) -> (TokenStats, Vec<ChartDataPoint>) {
    SnapshotCalculator::new(config).report(scenario, timeframe)
}
