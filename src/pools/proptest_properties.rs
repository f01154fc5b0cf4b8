//! Property-based tests using `proptest` for the reserve walk.
//!
//! Covers:
//!
//! 1. **Pricing primitive**: `price == usd / tokens`, zero for empty pools.
//! 2. **Swap conservation**: a buy keeps `k`, even when it drains the
//!    token side below one unit.
//! 3. **Invariant refresh**: every step ends with `usd × tokens == k`.
//! 4. **Output shape**: `horizon + 1` finite, non-negative points.
//! 5. **Scenario ordering**: Optimistic ≥ Neutral ≥ Pessimistic without
//!    injections.
//! 6. **No drift**: no buyers and no injections keep the price flat.
//! 7. **Determinism**: identical inputs give identical output.

#![allow(clippy::panic)]

use proptest::prelude::*;

use crate::config::SimulationConfig;
use crate::domain::Scenario;
use crate::math::price_from_reserves;
use crate::pools::{PoolState, StepFlows};
use crate::simulation::RoiSimulator;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn rel_close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0)
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Small token-side reserves in [1, 20].
fn small_reserve_strategy() -> impl Strategy<Value = f64> {
    1.0f64..=20.0f64
}

/// Reserve values in [1, 10_000_000].
fn reserve_strategy() -> impl Strategy<Value = f64> {
    1.0f64..=10_000_000.0f64
}

/// Monthly buyer counts in [0, 10_000].
fn users_strategy() -> impl Strategy<Value = f64> {
    (0u32..=10_000u32).prop_map(f64::from)
}

/// Average tickets in [0, 1_000] USD.
fn ticket_strategy() -> impl Strategy<Value = f64> {
    0.0f64..=1_000.0f64
}

/// Monthly injections in [0, 100_000].
fn injection_strategy() -> impl Strategy<Value = f64> {
    0.0f64..=100_000.0f64
}

// ---------------------------------------------------------------------------
// Pool primitives
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_price_is_reserve_ratio(
        usd in reserve_strategy(),
        tokens in reserve_strategy(),
    ) {
        prop_assert_eq!(price_from_reserves(usd, tokens), usd / tokens);
        prop_assert_eq!(price_from_reserves(usd, 0.0), 0.0);
    }

    #[test]
    fn prop_buy_conserves_invariant(
        usd in reserve_strategy(),
        tokens in reserve_strategy(),
        volume in 0.0f64..=1_000_000.0f64,
    ) {
        let mut pool = PoolState::new(usd, tokens);
        let k = pool.invariant();
        let before = pool.price();
        pool.buy(volume);
        prop_assert!(rel_close(pool.usd_reserve() * pool.token_reserve(), k, 1e-12));
        prop_assert_eq!(pool.invariant(), k);
        prop_assert!(pool.price() >= before * (1.0 - 1e-12));
    }

    #[test]
    fn prop_buy_conserves_invariant_for_small_token_side(
        usd in reserve_strategy(),
        tokens in small_reserve_strategy(),
        volume in 1_000_000.0f64..=100_000_000.0f64,
    ) {
        let mut pool = PoolState::new(usd, tokens);
        let k = pool.invariant();
        pool.buy(volume);
        prop_assert!(pool.token_reserve() > 0.0);
        prop_assert!(rel_close(pool.usd_reserve() * pool.token_reserve(), k, 1e-12));
    }

    #[test]
    fn prop_step_refreshes_invariant(
        usd in reserve_strategy(),
        tokens in reserve_strategy(),
        volume in 0.0f64..=100_000.0f64,
        usd_inj in 0.0f64..=10_000.0f64,
        token_inj in 0.0f64..=10_000.0f64,
    ) {
        let mut pool = PoolState::new(usd, tokens);
        let flows = StepFlows { buy_volume: volume, usd_injection: usd_inj, token_injection: token_inj };
        for _ in 0..8 {
            pool.step(&flows);
            prop_assert!(rel_close(pool.usd_reserve() * pool.token_reserve(), pool.invariant(), 1e-12));
        }
    }
}

// ---------------------------------------------------------------------------
// Simulator
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_output_shape_and_finiteness(
        usd in 0.0f64..=10_000_000.0f64,
        tokens in 0.0f64..=10_000_000.0f64,
        users in users_strategy(),
        ticket in ticket_strategy(),
        usd_inj in injection_strategy(),
        token_inj in injection_strategy(),
    ) {
        let cfg = SimulationConfig::new(usd, tokens)
            .with_buyers(users, ticket)
            .with_injections(usd_inj, token_inj);
        let points = RoiSimulator::new(cfg).run();
        prop_assert_eq!(points.len(), 13);
        for p in &points {
            for s in Scenario::ALL {
                prop_assert!(p.price(s).is_finite());
                prop_assert!(p.price(s) >= 0.0);
            }
        }
    }

    #[test]
    fn prop_scenarios_ordered_without_injection(
        usd in reserve_strategy(),
        tokens in reserve_strategy(),
        users in users_strategy(),
        ticket in ticket_strategy(),
    ) {
        let cfg = SimulationConfig::new(usd, tokens).with_buyers(users, ticket);
        let points = RoiSimulator::new(cfg).run();
        for p in points.iter().skip(1) {
            let (o, n, s) = (
                p.price(Scenario::Optimistic),
                p.price(Scenario::Neutral),
                p.price(Scenario::Pessimistic),
            );
            prop_assert!(o >= n * (1.0 - 1e-12), "optimistic {} < neutral {}", o, n);
            prop_assert!(n >= s * (1.0 - 1e-12), "neutral {} < pessimistic {}", n, s);
        }
    }

    #[test]
    fn prop_no_activity_no_drift(
        usd in reserve_strategy(),
        tokens in reserve_strategy(),
    ) {
        let points = RoiSimulator::new(SimulationConfig::new(usd, tokens)).run();
        let initial = usd / tokens;
        for p in &points {
            for s in Scenario::ALL {
                prop_assert!(rel_close(p.price(s), initial, 1e-9));
            }
        }
    }

    #[test]
    fn prop_trace_invariant_feeds_next_week(
        usd in reserve_strategy(),
        tokens in reserve_strategy(),
        users in users_strategy(),
        ticket in ticket_strategy(),
        usd_inj in injection_strategy(),
        token_inj in injection_strategy(),
    ) {
        let cfg = SimulationConfig::new(usd, tokens)
            .with_buyers(users, ticket)
            .with_injections(usd_inj, token_inj);
        let trace = RoiSimulator::new(cfg).weekly_trace(Scenario::Neutral);
        prop_assert_eq!(trace.len(), 48);
        for pair in trace.windows(2) {
            let prev = pair[0].pool;
            let mut replay = prev;
            replay.step(&StepFlows::from_config(&cfg, Scenario::Neutral.multiplier()));
            prop_assert!(rel_close(prev.usd_reserve() * prev.token_reserve(), prev.invariant(), 1e-12));
            prop_assert_eq!(replay, pair[1].pool);
        }
    }

    #[test]
    fn prop_run_is_deterministic(
        usd in reserve_strategy(),
        tokens in reserve_strategy(),
        users in users_strategy(),
        ticket in ticket_strategy(),
        usd_inj in injection_strategy(),
    ) {
        let cfg = SimulationConfig::new(usd, tokens)
            .with_buyers(users, ticket)
            .with_injections(usd_inj, 0.0);
        let sim = RoiSimulator::new(cfg);
        prop_assert_eq!(sim.run(), sim.run());
    }
}
