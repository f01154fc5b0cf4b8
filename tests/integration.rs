//! Integration tests exercising the public API end to end.
//!
//! These tests cover the dashboard flows: TOML config to ROI projection,
//! KPI snapshot to insight request, and the degenerate-input policy.

#![allow(clippy::panic)]

use tokenomics_amm::config::{Distribution, GlobalTokenomicsConfig, SimulationConfig};
use tokenomics_amm::domain::{LiquidityHealth, RiskLevel, Scenario, TimeLabel, Timeframe};
use tokenomics_amm::insight::{InsightError, InsightRequest, ProviderFailure};
use tokenomics_amm::simulation::{RoiSimulator, simulate_roi};
use tokenomics_amm::stats::{SnapshotCalculator, calculate_stats};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn rel_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

fn dashboard_simulation() -> SimulationConfig {
    SimulationConfig::new(50_000.0, 500_000.0).with_buyers(100.0, 100.0)
}

// ---------------------------------------------------------------------------
// ROI projection
// ---------------------------------------------------------------------------

#[test]
fn end_to_end_neutral_month_one_beats_launch_price() {
    let points = RoiSimulator::new(dashboard_simulation()).run();
    assert!(rel_eq(points[0].price(Scenario::Neutral), 0.1));
    assert!(points[1].price(Scenario::Neutral) > 0.1);
}

#[test]
fn thirteen_points_all_finite() {
    let cfg = dashboard_simulation().with_injections(1_000.0, 5_000.0);
    let points = RoiSimulator::new(cfg).run();
    assert_eq!(points.len(), 13);
    assert_eq!(points[0].month(), TimeLabel::Start);
    assert_eq!(points[12].month(), TimeLabel::Month(12));
    for p in &points {
        for s in Scenario::ALL {
            assert!(p.price(s).is_finite() && p.price(s) >= 0.0);
        }
    }
}

#[test]
fn scenarios_fan_out_over_the_year() {
    let points = RoiSimulator::new(dashboard_simulation()).run();
    let last = points[12];
    assert!(last.price(Scenario::Optimistic) > last.price(Scenario::Neutral));
    assert!(last.price(Scenario::Neutral) > last.price(Scenario::Pessimistic));
    assert!(last.roi_percent(Scenario::Pessimistic) > 0.0);
}

#[test]
fn flat_without_activity() {
    let points = simulate_roi(50_000.0, 500_000.0, 0.0, 100.0, 0.0, 0.0);
    for p in &points {
        for s in Scenario::ALL {
            assert!(rel_eq(p.price(s), 0.1));
        }
    }
}

#[test]
fn degenerate_token_reserve_does_not_blow_up() {
    let points = simulate_roi(50_000.0, 0.0, 100.0, 100.0, 1_000.0, 0.0);
    assert!(points[0].price(Scenario::Neutral).abs() < f64::EPSILON);
    for p in points.iter().skip(1) {
        for s in Scenario::ALL {
            assert!(p.price(s).is_finite());
            assert!(!p.price(s).is_nan());
        }
    }
}

#[test]
fn thin_token_side_keeps_constant_product() {
    let points = simulate_roi(10_000.0, 10.0, 1_000.0, 1_000.0, 0.0, 0.0);
    // k = 100 000; after a month of buys usd = 1 010 000 and tokens < 1.
    assert!(rel_eq(points[1].price(Scenario::Neutral), 10_201_000.0));
}

#[test]
fn oversized_time_grid_is_rejected() {
    assert!(
        dashboard_simulation()
            .with_horizon(70_000, 70_000)
            .is_err()
    );
    assert!(SimulationConfig::from_toml_str("steps_per_month = 100000").is_err());
}

#[test]
fn negative_ticket_is_clamped_not_rejected() {
    let points = simulate_roi(1_000.0, 1_000.0, 100.0, -500.0, 0.0, 0.0);
    assert_eq!(points.len(), 13);
    for p in &points {
        for s in Scenario::ALL {
            assert!(p.price(s).is_finite() && p.price(s) >= 0.0);
        }
    }
}

#[test]
fn toml_config_drives_projection() {
    let source = r"
        initial_liquidity_usd = 50000.0
        initial_tokens_in_pool = 500000.0
        monthly_users = 100.0
        average_ticket = 100.0
        monthly_liquidity_usd = 0.0
        horizon_months = 6
    ";
    let Ok(cfg) = SimulationConfig::from_toml_str(source) else {
        panic!("valid config");
    };
    let from_toml = RoiSimulator::new(cfg).run();
    let built = RoiSimulator::new(dashboard_simulation()).run();
    assert_eq!(from_toml.len(), 7);
    for (a, b) in from_toml.iter().zip(built.iter()) {
        assert_eq!(a, b);
    }
}

#[test]
fn roi_points_serialize_for_charting() {
    let points = RoiSimulator::new(dashboard_simulation()).run();
    let json = serde_json::to_value(&points).unwrap_or_default();
    assert_eq!(json[0]["month"], "Início");
    assert_eq!(json[12]["month"], "Mês 12");
    assert!(json[12]["Otimista"].as_f64().is_some());
    assert!(json[12]["breakEven"].as_f64().is_some());
}

// ---------------------------------------------------------------------------
// Snapshot statistics
// ---------------------------------------------------------------------------

#[test]
fn risk_boundary_scenario_is_critical() {
    let cfg = GlobalTokenomicsConfig {
        total_supply: 1_000_000.0,
        initial_circulating: 40_000.0,
        initial_liquidity_usd: 4_000.0,
        ..GlobalTokenomicsConfig::default()
    };
    let stats = SnapshotCalculator::new(&cfg).stats();
    assert!(rel_eq(stats.price, 1.0));
    assert!(rel_eq(stats.market_cap, 1_000_000.0));
    assert!(rel_eq(stats.liquidity_to_mc_ratio, 0.4));
    assert_eq!(stats.risk_level, RiskLevel::Critico);
}

#[test]
fn healthy_token_is_low_risk() {
    let cfg = GlobalTokenomicsConfig {
        initial_liquidity_usd: 1_000_000.0,
        distribution: Distribution {
            team: 5.0,
            ..Distribution::default()
        },
        ..GlobalTokenomicsConfig::default()
    };
    // price 0.5, MC 50M, ratio 2% -> still high risk despite the small team
    let stats = SnapshotCalculator::new(&cfg).stats();
    assert_eq!(stats.risk_level, RiskLevel::Alto);

    let deep = GlobalTokenomicsConfig {
        pool_token_reserve: Some(100_000_000.0),
        ..cfg
    };
    // price 0.01, MC 1M, ratio 100%
    let stats = SnapshotCalculator::new(&deep).stats();
    assert_eq!(stats.risk_level, RiskLevel::Baixo);
}

#[test]
fn report_history_follows_timeframe() {
    let cfg = GlobalTokenomicsConfig::default();
    for (tf, len) in [
        (Timeframe::Weeks4, 5),
        (Timeframe::Months3, 13),
        (Timeframe::Months6, 25),
    ] {
        let (_, history) = calculate_stats(&cfg, Scenario::Neutral, tf);
        assert_eq!(history.len(), len);
        assert_eq!(history.last().map(|p| p.week), Some(tf.weeks()));
    }
}

#[test]
fn snapshot_is_idempotent() {
    let cfg = GlobalTokenomicsConfig::default();
    let a = calculate_stats(&cfg, Scenario::Optimistic, Timeframe::Months6);
    let b = calculate_stats(&cfg, Scenario::Optimistic, Timeframe::Months6);
    assert_eq!(a, b);
}

#[test]
fn global_toml_round_trip() {
    let source = r#"
        base_currency = "USD"
        total_supply = 100000000.0
        initial_circulating = 20000000.0
        initial_liquidity_usd = 100000.0
        current_users = 2500
        burn_amount = 10000000.0

        [distribution]
        team = 12.0
        vesting = 20.0
    "#;
    let Ok(cfg) = GlobalTokenomicsConfig::from_toml_str(source) else {
        panic!("valid config");
    };
    let stats = SnapshotCalculator::new(&cfg).stats();
    assert_eq!(stats.user_count, 2_500);
    assert!(rel_eq(stats.burn_percentage, 10.0));
    assert!(rel_eq(stats.team_percentage, 12.0));
}

#[test]
fn liquidity_health_badge_for_roi_inputs() {
    assert_eq!(
        LiquidityHealth::assess(50_000.0, 0.1, 500_000.0),
        LiquidityHealth::Otima
    );
    assert_eq!(
        LiquidityHealth::assess(6_000.0, 0.1, 500_000.0),
        LiquidityHealth::Saudavel
    );
    assert_eq!(
        LiquidityHealth::assess(1_000.0, 0.1, 500_000.0),
        LiquidityHealth::Critico
    );
}

// ---------------------------------------------------------------------------
// Insight boundary
// ---------------------------------------------------------------------------

#[test]
fn insight_request_carries_snapshot() {
    let cfg = GlobalTokenomicsConfig::default();
    let stats = SnapshotCalculator::new(&cfg).stats();
    let request = InsightRequest::new(stats, Scenario::Pessimistic);
    assert_eq!(request.stats(), &stats);
    assert!(request.prompt().contains("Pessimista"));
}

#[test]
fn insight_failures_map_to_notices() {
    let quota = InsightError::from(ProviderFailure::with_status(429, "quota"));
    assert_eq!(quota.notice().error, "quota_exceeded");
    assert!(quota.notice().retryable);

    let generic = InsightError::from(ProviderFailure::transport("connection reset"));
    assert_eq!(generic.notice().error, "generic_error");
    assert!(!generic.notice().retryable);
}

#[cfg(feature = "insight")]
mod insight_client {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use core::time::Duration;

    use tokenomics_amm::insight::{InsightClient, RetryPolicy, spawn_analysis};
    use tokenomics_amm::traits::InsightProvider;

    use super::*;

    /// Fails with a quota error `failures` times, then answers.
    struct FlakyProvider {
        failures: usize,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl InsightProvider for FlakyProvider {
        async fn generate(&self, _api_key: &str, _prompt: &str) -> Result<String, ProviderFailure> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                return Err(ProviderFailure::with_status(429, "RESOURCE_EXHAUSTED"));
            }
            Ok(r#"{"situacao":"ok","pontosFortes":[],"pontosFracos":[],"recomendacoes":[],"alertaRealismo":""}"#.to_owned())
        }
    }

    fn client(failures: usize) -> Arc<InsightClient<FlakyProvider>> {
        let provider = FlakyProvider {
            failures,
            calls: AtomicUsize::new(0),
        };
        Arc::new(
            InsightClient::new(provider, Some("key".to_owned()))
                .with_policy(RetryPolicy::new(2, Duration::from_millis(1))),
        )
    }

    fn request() -> InsightRequest {
        let cfg = GlobalTokenomicsConfig::default();
        InsightRequest::new(SnapshotCalculator::new(&cfg).stats(), Scenario::Neutral)
    }

    #[tokio::test]
    async fn simulation_ready_before_insight_resolves() {
        let c = client(2);
        let handle = spawn_analysis(Arc::clone(&c), request());

        // The projection does not wait on the collaborator.
        let points = RoiSimulator::new(dashboard_simulation()).run();
        assert_eq!(points.len(), 13);

        let Ok(result) = handle.await else {
            panic!("task panicked");
        };
        assert!(result.is_ok());
        assert_eq!(c.provider().calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn persistent_quota_surfaces_retryable_notice() {
        let c = client(10);
        let result = c.analyze(&request()).await;
        let Err(err) = result else {
            panic!("expected quota failure");
        };
        assert!(err.notice().retryable);
        assert_eq!(c.provider().calls.load(Ordering::SeqCst), 3);
    }
}
