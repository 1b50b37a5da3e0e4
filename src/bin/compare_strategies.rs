//! Runs the fixed-spread and Avellaneda-Stoikov strategies against the same
//! market parameters and seed, then prints PnL and Sharpe for each.

use tracing_subscriber::EnvFilter;

use market_sim_rs::prelude::*;

const HORIZON: f64 = 1.0;
const STEP: f64 = 0.005;
const SIGMA: f64 = 0.5;
const START_PRICE: f64 = 100.0;
const INTENSITY_SCALE: f64 = 140.0;
const INTENSITY_DECAY: f64 = 1.5;
const NAIVE_SPREAD: f64 = 0.5;
const RISK_AVERSION: f64 = 1.0;
const SEED: u64 = 42;

fn init_tracing() {
    let default = "market_sim_rs=info,compare_strategies=info";
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

fn run<S: QuoteStrategy>(strategy: S) -> SimResult<PerformanceSummary> {
    let config = MarketConfig::new(
        HORIZON,
        STEP,
        SIGMA,
        START_PRICE,
        INTENSITY_SCALE,
        INTENSITY_DECAY,
    )?;
    let name = strategy.name();
    let output = SimulationEngine::new(config, strategy, SEED)?.run();
    let summary = performance_summary(&output.wealth_history, DEFAULT_ANNUALIZATION_FACTOR);
    println!(
        "{name}: PnL = {:.4}, Sharpe = {:.4}, final inventory = {}",
        summary.pnl,
        summary.sharpe,
        output.inventory_history.last().copied().unwrap_or(0)
    );
    Ok(summary)
}

fn main() -> SimResult<()> {
    init_tracing();

    run(FixedSpreadStrategy::new(NAIVE_SPREAD)?)?;
    run(AvellanedaStoikovStrategy::new(
        HORIZON,
        SIGMA,
        RISK_AVERSION,
        INTENSITY_DECAY,
    )?)?;

    Ok(())
}
