//! ROI projection and dashboard snapshot example.
//!
//! Projects twelve months of pool prices under the three demand
//! scenarios, derives the KPI snapshot for a global tokenomics config,
//! and requests an insight from an offline provider on a background task.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=debug cargo run --example roi_projection
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use tokenomics_amm::config::{GlobalTokenomicsConfig, SimulationConfig};
use tokenomics_amm::domain::{LiquidityHealth, Scenario, Timeframe};
use tokenomics_amm::insight::{InsightClient, InsightRequest, ProviderFailure, spawn_analysis};
use tokenomics_amm::simulation::RoiSimulator;
use tokenomics_amm::stats::SnapshotCalculator;
use tokenomics_amm::traits::InsightProvider;

/// Answers every prompt with a canned analysis.
struct OfflineProvider;

#[async_trait]
impl InsightProvider for OfflineProvider {
    async fn generate(&self, _api_key: &str, prompt: &str) -> Result<String, ProviderFailure> {
        let critical = prompt.contains("Crítico");
        let body = serde_json::json!({
            "situacao": if critical { "Liquidez insuficiente." } else { "Pool estável." },
            "pontosFortes": ["Base de usuários ativa", "Injeção semanal de liquidez"],
            "pontosFracos": ["Dependência de novos compradores", "Concentração no time"],
            "recomendacoes": ["Aumentar a liquidez inicial"],
            "alertaRealismo": "",
        });
        Ok(body.to_string())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Tokenomics ROI projection (x · y = k) ===\n");

    // ── 1. Launch pool and demand ───────────────────────────────────────
    let sim = SimulationConfig::from_toml_str(
        r"
        initial_liquidity_usd = 50000.0
        initial_tokens_in_pool = 500000.0
        monthly_users = 100.0
        average_ticket = 100.0
        monthly_liquidity_usd = 1000.0
        ",
    )?;
    let simulator = RoiSimulator::new(sim);
    let initial = simulator.initial_price();
    println!("Initial price: ${initial:.4}");
    println!(
        "Liquidity health: {}",
        LiquidityHealth::assess(
            sim.initial_liquidity_usd(),
            initial,
            sim.initial_tokens_in_pool()
        )
        .label()
    );

    // ── 2. Kick off the insight before running the projection ───────────
    let global = GlobalTokenomicsConfig::default();
    let calculator = SnapshotCalculator::new(&global);
    let (stats, history) = calculator.report(Scenario::Neutral, Timeframe::Weeks4);
    let client = Arc::new(InsightClient::new(OfflineProvider, Some("offline".to_owned())));
    let pending = spawn_analysis(Arc::clone(&client), InsightRequest::new(stats, Scenario::Neutral));

    // ── 3. Twelve-month projection ──────────────────────────────────────
    println!("\n{:<8} {:>10} {:>10} {:>10}", "", "Otimista", "Neutro", "Pessimista");
    for point in simulator.run() {
        println!(
            "{:<8} {:>10.4} {:>10.4} {:>10.4}",
            point.month().to_string(),
            point.price(Scenario::Optimistic),
            point.price(Scenario::Neutral),
            point.price(Scenario::Pessimistic),
        );
    }

    // ── 4. Dashboard snapshot ───────────────────────────────────────────
    println!("\n--- Snapshot ---");
    println!("  Price:        ${:.4}", stats.price);
    println!("  Market cap:   ${:.2}", stats.market_cap);
    println!("  Liq / MC:     {:.2}%", stats.liquidity_to_mc_ratio);
    println!("  Risk:         {}", stats.risk_level);
    for point in &history {
        println!(
            "  week {:>2}: price ${:.5}  liquidity ${:.0}  supply {:.0}",
            point.week, point.price, point.liquidity, point.supply
        );
    }

    // ── 5. Insight, or a notice when it fails ───────────────────────────
    println!("\n--- Insight ---");
    match pending.await? {
        Ok(report) => {
            println!("  {}", report.situation);
            for item in &report.recommendations {
                println!("  - {item}");
            }
        }
        Err(err) => println!("  {}", serde_json::to_string(&err.notice())?),
    }

    Ok(())
}
