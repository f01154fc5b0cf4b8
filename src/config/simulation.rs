//! Input parameters for one ROI simulation run.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenomicsError};

/// Default projection horizon in months.
pub const DEFAULT_HORIZON_MONTHS: u32 = 12;

/// Default number of swap/injection steps per month (weekly granularity).
pub const DEFAULT_STEPS_PER_MONTH: u32 = 4;

/// Longest accepted projection horizon (fifty years).
pub const MAX_HORIZON_MONTHS: u32 = 600;

/// Finest accepted time grid (hourly over a 31-day month).
pub const MAX_STEPS_PER_MONTH: u32 = 744;

/// Immutable input to the ROI simulator.
///
/// Describes the initial pool reserves, the monthly buy-side flow, and the
/// monthly external USD/token injections.  Monetary and token quantities
/// are *not* validated: the simulator clamps reserves and otherwise trusts
/// the caller.  Only the time grid is bounded: the horizon must lie in
/// `1..=MAX_HORIZON_MONTHS` and the steps per month in
/// `1..=MAX_STEPS_PER_MONTH`.
///
/// # Examples
///
/// ```
/// use tokenomics_amm::config::SimulationConfig;
///
/// let cfg = SimulationConfig::new(50_000.0, 500_000.0)
///     .with_buyers(100.0, 100.0)
///     .with_injections(1_000.0, 0.0);
/// assert_eq!(cfg.horizon_months(), 12);
/// assert_eq!(cfg.steps_per_month(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    initial_liquidity_usd: f64,
    initial_tokens_in_pool: f64,
    monthly_users: f64,
    average_ticket: f64,
    monthly_liquidity_usd: f64,
    monthly_token_injection: f64,
    horizon_months: u32,
    steps_per_month: u32,
}

impl Default for SimulationConfig {
    /// Dashboard defaults: a $50 000 / 500 000 token pool (price $0.10),
    /// 100 buyers a month at $100, and $1 000 of monthly liquidity.
    fn default() -> Self {
        Self {
            initial_liquidity_usd: 50_000.0,
            initial_tokens_in_pool: 500_000.0,
            monthly_users: 100.0,
            average_ticket: 100.0,
            monthly_liquidity_usd: 1_000.0,
            monthly_token_injection: 0.0,
            horizon_months: DEFAULT_HORIZON_MONTHS,
            steps_per_month: DEFAULT_STEPS_PER_MONTH,
        }
    }
}

impl SimulationConfig {
    /// Creates a configuration with the given initial reserves and no buy
    /// flow or injections.
    #[must_use]
    pub const fn new(initial_liquidity_usd: f64, initial_tokens_in_pool: f64) -> Self {
        Self {
            initial_liquidity_usd,
            initial_tokens_in_pool,
            monthly_users: 0.0,
            average_ticket: 0.0,
            monthly_liquidity_usd: 0.0,
            monthly_token_injection: 0.0,
            horizon_months: DEFAULT_HORIZON_MONTHS,
            steps_per_month: DEFAULT_STEPS_PER_MONTH,
        }
    }

    /// Sets the monthly buyer count and average purchase value.
    #[must_use]
    pub const fn with_buyers(mut self, monthly_users: f64, average_ticket: f64) -> Self {
        self.monthly_users = monthly_users;
        self.average_ticket = average_ticket;
        self
    }

    /// Sets the monthly external USD liquidity and token injection.
    #[must_use]
    pub const fn with_injections(
        mut self,
        monthly_liquidity_usd: f64,
        monthly_token_injection: f64,
    ) -> Self {
        self.monthly_liquidity_usd = monthly_liquidity_usd;
        self.monthly_token_injection = monthly_token_injection;
        self
    }

    /// Overrides the time grid.
    ///
    /// # Errors
    ///
    /// Returns [`TokenomicsError::InvalidConfiguration`] if either value is
    /// zero or above its maximum.
    pub fn with_horizon(mut self, horizon_months: u32, steps_per_month: u32) -> Result<Self> {
        self.horizon_months = horizon_months;
        self.steps_per_month = steps_per_month;
        self.validate()?;
        Ok(self)
    }

    /// Parses a configuration from a TOML document.  Missing keys take
    /// their [`Default`] values.
    ///
    /// # Errors
    ///
    /// - [`TokenomicsError::ConfigParse`] if the document is not valid
    ///   TOML or has mistyped keys.
    /// - [`TokenomicsError::InvalidConfiguration`] if the time grid is
    ///   invalid.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the time grid.
    ///
    /// # Errors
    ///
    /// Returns [`TokenomicsError::InvalidConfiguration`] if the horizon is
    /// outside `1..=MAX_HORIZON_MONTHS` or the steps per month outside
    /// `1..=MAX_STEPS_PER_MONTH`.
    pub fn validate(&self) -> Result<()> {
        if self.horizon_months == 0 {
            return Err(TokenomicsError::InvalidConfiguration(
                "horizon must be at least one month",
            ));
        }
        if self.horizon_months > MAX_HORIZON_MONTHS {
            return Err(TokenomicsError::InvalidConfiguration(
                "horizon exceeds 600 months",
            ));
        }
        if self.steps_per_month == 0 {
            return Err(TokenomicsError::InvalidConfiguration(
                "a month needs at least one step",
            ));
        }
        if self.steps_per_month > MAX_STEPS_PER_MONTH {
            return Err(TokenomicsError::InvalidConfiguration(
                "a month allows at most 744 steps",
            ));
        }
        Ok(())
    }

    /// Returns the initial USD reserve.
    #[must_use]
    pub const fn initial_liquidity_usd(&self) -> f64 {
        self.initial_liquidity_usd
    }

    /// Returns the initial token reserve.
    #[must_use]
    pub const fn initial_tokens_in_pool(&self) -> f64 {
        self.initial_tokens_in_pool
    }

    /// Returns the monthly active buyer count.
    #[must_use]
    pub const fn monthly_users(&self) -> f64 {
        self.monthly_users
    }

    /// Returns the average purchase value in USD.
    #[must_use]
    pub const fn average_ticket(&self) -> f64 {
        self.average_ticket
    }

    /// Returns the monthly externally added USD liquidity.
    #[must_use]
    pub const fn monthly_liquidity_usd(&self) -> f64 {
        self.monthly_liquidity_usd
    }

    /// Returns the monthly externally injected token supply.
    #[must_use]
    pub const fn monthly_token_injection(&self) -> f64 {
        self.monthly_token_injection
    }

    /// Returns the horizon in months.
    #[must_use]
    pub const fn horizon_months(&self) -> u32 {
        self.horizon_months
    }

    /// Returns the number of steps per month.
    #[must_use]
    pub const fn steps_per_month(&self) -> u32 {
        self.steps_per_month
    }

    /// Returns the buy volume of one step before the scenario multiplier.
    #[must_use]
    pub fn base_step_volume(&self) -> f64 {
        self.monthly_users * self.average_ticket / f64::from(self.steps_per_month)
    }

    /// Returns the USD injected per step.
    #[must_use]
    pub fn step_liquidity_usd(&self) -> f64 {
        self.monthly_liquidity_usd / f64::from(self.steps_per_month)
    }

    /// Returns the tokens injected per step.
    #[must_use]
    pub fn step_token_injection(&self) -> f64 {
        self.monthly_token_injection / f64::from(self.steps_per_month)
    }
}
