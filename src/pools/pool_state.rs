//! Scenario-local constant-product pool state (`x · y = k`).
//!
//! A [`PoolState`] is owned by exactly one scenario run and advanced one
//! step at a time.  Each step has three phases, always in this order:
//!
//! 1. **Buy pressure**: buyers pay USD into the pool,
//!    `usd += volume`, then `tokens = k / usd` with the invariant captured
//!    at the start of the step.  `k` is unchanged by this phase.
//! 2. **Injection**: external USD and tokens are added directly to the
//!    reserves.  This is not a trade and changes `k`.
//! 3. **Refresh**: `k = usd × tokens` becomes the baseline for the next
//!    step.
//!
//! # Invariant
//!
//! At the start of every step, `invariant == usd_reserve × token_reserve`
//! (up to floating-point rounding), and both reserves are strictly
//! positive.  Initial reserves are floored at
//! [`MIN_RESERVE`](crate::math::MIN_RESERVE); during the
//! walk a reserve is only replaced (by
//! [`RESERVE_EPSILON`](crate::math::RESERVE_EPSILON)) when a negative
//! flow drives it to or below zero.

use log::trace;

use crate::config::SimulationConfig;
use crate::math::{clamp_reserve, constant_k, keep_positive, price_from_reserves};

/// External flows applied during one step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepFlows {
    /// USD paid in by buyers (scenario multiplier already applied).
    pub buy_volume: f64,
    /// USD added to the pool from outside.
    pub usd_injection: f64,
    /// Tokens added to the pool from outside.
    pub token_injection: f64,
}

impl StepFlows {
    /// Derives per-step flows from a simulation config and a demand
    /// multiplier.
    #[must_use]
    pub fn from_config(config: &SimulationConfig, multiplier: f64) -> Self {
        Self {
            buy_volume: config.base_step_volume() * multiplier,
            usd_injection: config.step_liquidity_usd(),
            token_injection: config.step_token_injection(),
        }
    }
}

/// Reserves and invariant of a simulated constant-product pool.
///
/// # Example
///
/// ```rust
/// use tokenomics_amm::pools::{PoolState, StepFlows};
///
/// let mut pool = PoolState::new(50_000.0, 500_000.0);
/// let before = pool.price();
/// pool.step(&StepFlows { buy_volume: 2_500.0, ..StepFlows::default() });
/// assert!(pool.price() > before);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolState {
    token_reserve: f64,
    usd_reserve: f64,
    invariant: f64,
}

impl PoolState {
    /// Creates a pool from raw reserves, clamping both to
    /// [`MIN_RESERVE`](crate::math::MIN_RESERVE).
    #[must_use]
    pub fn new(usd_reserve: f64, token_reserve: f64) -> Self {
        Self {
            token_reserve: clamp_reserve(token_reserve),
            usd_reserve: clamp_reserve(usd_reserve),
            invariant: constant_k(usd_reserve, token_reserve),
        }
    }

    /// Creates a pool from the initial reserves of `config`.
    #[must_use]
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(
            config.initial_liquidity_usd(),
            config.initial_tokens_in_pool(),
        )
    }

    /// Returns the token reserve (`x`).
    #[must_use]
    pub const fn token_reserve(&self) -> f64 {
        self.token_reserve
    }

    /// Returns the USD reserve (`y`).
    #[must_use]
    pub const fn usd_reserve(&self) -> f64 {
        self.usd_reserve
    }

    /// Returns the invariant (`k`) the next buy phase will hold fixed.
    #[must_use]
    pub const fn invariant(&self) -> f64 {
        self.invariant
    }

    /// Returns the current price `usd_reserve / token_reserve`.
    #[must_use]
    pub fn price(&self) -> f64 {
        price_from_reserves(self.usd_reserve, self.token_reserve)
    }

    /// Applies buy pressure as a one-sided swap holding `k` fixed.
    ///
    /// Returns the tokens withdrawn by buyers (negative if a negative
    /// volume pushed tokens back into the pool).
    pub fn buy(&mut self, usd_in: f64) -> f64 {
        let before = self.token_reserve;
        self.usd_reserve = keep_positive(self.usd_reserve + usd_in);
        self.token_reserve = keep_positive(self.invariant / self.usd_reserve);
        before - self.token_reserve
    }

    /// Adds external USD and tokens directly to the reserves.
    ///
    /// The invariant is left stale until [`refresh_invariant`] runs.
    ///
    /// [`refresh_invariant`]: Self::refresh_invariant
    pub fn inject(&mut self, usd: f64, tokens: f64) {
        self.usd_reserve = keep_positive(self.usd_reserve + usd);
        self.token_reserve = keep_positive(self.token_reserve + tokens);
    }

    /// Re-derives `k` from the current reserves.
    pub fn refresh_invariant(&mut self) {
        self.invariant = self.usd_reserve * self.token_reserve;
    }

    /// Runs one full step: buy, inject, refresh.
    pub fn step(&mut self, flows: &StepFlows) {
        let withdrawn = self.buy(flows.buy_volume);
        self.inject(flows.usd_injection, flows.token_injection);
        self.refresh_invariant();
        trace!(
            "step: withdrawn={withdrawn:.6} usd={:.6} tokens={:.6} k={:.6}",
            self.usd_reserve, self.token_reserve, self.invariant
        );
    }
}
