//! Dashboard-wide tokenomics parameters.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenomicsError};

/// Share of the circulating supply assumed to sit in the pool when no
/// explicit pool reserve is configured.
pub const POOL_SHARE_OF_CIRCULATING: f64 = 0.10;

/// Allocation of the total supply, in percent.
///
/// The five shares are *not* required to sum to 100: an unbalanced
/// allocation is accepted and only logged as a warning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Distribution {
    /// Team allocation.
    pub team: f64,
    /// Liquidity allocation.
    pub liquidity: f64,
    /// Marketing allocation.
    pub marketing: f64,
    /// Treasury reserve allocation.
    pub reserve: f64,
    /// Share released linearly through vesting.
    pub vesting: f64,
}

impl Default for Distribution {
    fn default() -> Self {
        Self {
            team: 15.0,
            liquidity: 40.0,
            marketing: 20.0,
            reserve: 15.0,
            vesting: 10.0,
        }
    }
}

impl Distribution {
    /// Returns the sum of all shares.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.team + self.liquidity + self.marketing + self.reserve + self.vesting
    }

    /// Returns `true` if the shares add up to 100%.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        (self.total() - 100.0).abs() <= 1e-6
    }
}

/// Global configuration feeding the
/// [`SnapshotCalculator`](crate::stats::SnapshotCalculator).
///
/// Distinct from [`SimulationConfig`](super::SimulationConfig): the pool
/// reserve here is derived from the circulating supply unless
/// `pool_token_reserve` is set explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalTokenomicsConfig {
    /// Quote currency code shown next to prices.  Display only.
    pub base_currency: String,
    /// Listing price entered by the user.  Display only: the snapshot
    /// always prices from the pool reserves.
    pub initial_price: f64,
    /// Maximum token supply.
    pub total_supply: f64,
    /// Tokens circulating at launch.
    pub initial_circulating: f64,
    /// USD liquidity in the pool at launch.
    pub initial_liquidity_usd: f64,
    /// Supply allocation.
    pub distribution: Distribution,
    /// Users holding the token today.
    pub current_users: u64,
    /// New users joining per day.
    pub new_users_per_day: f64,
    /// Average purchase in USD.
    pub average_ticket: f64,
    /// Tokens burned so far.
    pub burn_amount: f64,
    /// USD added to the pool by hand every week.
    pub weekly_liquidity_add: f64,
    /// Explicit pool token reserve overriding the circulating-supply share.
    pub pool_token_reserve: Option<f64>,
}

impl Default for GlobalTokenomicsConfig {
    fn default() -> Self {
        Self {
            base_currency: "USD".to_owned(),
            initial_price: 0.10,
            total_supply: 100_000_000.0,
            initial_circulating: 20_000_000.0,
            initial_liquidity_usd: 100_000.0,
            distribution: Distribution::default(),
            current_users: 1_000,
            new_users_per_day: 50.0,
            average_ticket: 20.0,
            burn_amount: 5_000_000.0,
            weekly_liquidity_add: 1_000.0,
            pool_token_reserve: None,
        }
    }
}

impl GlobalTokenomicsConfig {
    /// Parses a configuration from a TOML document.  Missing keys take
    /// their [`Default`] values.
    ///
    /// # Errors
    ///
    /// - [`TokenomicsError::ConfigParse`] for malformed TOML.
    /// - [`TokenomicsError::InvalidConfiguration`] if
    ///   [`validate`](Self::validate) fails.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the supply figures.
    ///
    /// Only structural nonsense is rejected; economically odd values (a
    /// tiny pool, a huge team share) are left for the risk tiers to flag.
    ///
    /// # Errors
    ///
    /// Returns [`TokenomicsError::InvalidConfiguration`] if a supply is
    /// negative or the circulating supply exceeds the total supply.  An
    /// unbalanced [`Distribution`] only logs a warning.
    pub fn validate(&self) -> Result<()> {
        if self.total_supply < 0.0 || self.initial_circulating < 0.0 {
            return Err(TokenomicsError::InvalidConfiguration(
                "supply must be non-negative",
            ));
        }
        if self.initial_circulating > self.total_supply {
            return Err(TokenomicsError::InvalidConfiguration(
                "circulating supply exceeds total supply",
            ));
        }
        if !self.distribution.is_balanced() {
            warn!(
                "distribution adds up to {:.2}%, not 100%",
                self.distribution.total()
            );
        }
        Ok(())
    }

    /// Returns the pool token reserve used for pricing.
    #[must_use]
    pub fn effective_pool_reserve(&self) -> f64 {
        self.pool_token_reserve
            .unwrap_or(self.initial_circulating * POOL_SHARE_OF_CIRCULATING)
    }
}
