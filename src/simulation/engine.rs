//! Step loop driving one simulation run.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::market::config::MarketConfig;
use crate::market::fill_model::FillModel;
use crate::market::price_process::PriceProcess;
use crate::position::fees::FeeSchedule;
use crate::position::ledger::Ledger;
use crate::strategy::QuoteStrategy;
use crate::types::error::SimResult;
use crate::types::primitives::{Inventory, Price, SimTime};

/// The four aligned time series produced by a completed run.
///
/// All vectors have length `config.num_steps()`, one entry per step,
/// recorded after that step's fills were applied.
#[derive(Clone, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(
    feature = "serde",
    derive(
        serde::Serialize,
        serde::Deserialize,
        pretty_simple_display::DebugPretty,
        pretty_simple_display::DisplaySimple
    )
)]
pub struct SimulationOutput {
    /// Simulation clock at each step.
    pub time_history: Vec<SimTime>,
    /// Mid-price at each step.
    pub price_history: Vec<Price>,
    /// Signed inventory after each step's fills.
    pub inventory_history: Vec<Inventory>,
    /// Mark-to-mid wealth after each step's fills.
    pub wealth_history: Vec<f64>,
}

/// Single-threaded simulation loop.
///
/// Owns all mutable state for one run: the price process, the fill model,
/// the ledger, the quoting strategy, and the sole random stream. A fixed
/// seed therefore replays the run bit for bit.
pub struct SimulationEngine<S: QuoteStrategy> {
    price_process: PriceProcess,
    fill_model: FillModel,
    ledger: Ledger,
    strategy: S,
    rng: StdRng,
}

impl<S: QuoteStrategy> SimulationEngine<S> {
    /// Builds an engine for one run.
    ///
    /// # Errors
    ///
    /// Returns an error if the market configuration is rejected by the
    /// price process.
    pub fn new(config: MarketConfig, strategy: S, seed: u64) -> SimResult<Self> {
        let fill_model = FillModel::new(&config);
        let ledger = Ledger::new(FeeSchedule::default(), config.num_steps());
        let price_process = PriceProcess::new(config)?;
        Ok(Self {
            price_process,
            fill_model,
            ledger,
            strategy,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Runs the full step loop and returns the recorded histories.
    ///
    /// Each step: advance the mid-price, quote, resolve fills, apply them
    /// to the ledger. The loop always completes after exactly
    /// `config.num_steps()` iterations.
    pub fn run(mut self) -> SimulationOutput {
        let num_steps = self.price_process.config().num_steps();
        info!(
            strategy = self.strategy.name(),
            num_steps, "starting simulation run"
        );

        for _ in 0..num_steps {
            let mid_price = self.price_process.advance(&mut self.rng);
            let time = self.price_process.current_time();
            let quote = self
                .strategy
                .quote(time, mid_price, self.ledger.inventory());
            let outcome = self.fill_model.resolve(&mut self.rng, mid_price, quote.bid, quote.ask);
            if outcome.any() {
                debug!(
                    time,
                    mid_price,
                    bid = quote.bid,
                    ask = quote.ask,
                    bid_filled = outcome.bid_filled,
                    ask_filled = outcome.ask_filled,
                    "fill"
                );
            }
            self.ledger.apply_fills(mid_price, outcome, quote);
        }

        info!(
            strategy = self.strategy.name(),
            final_cash = self.ledger.cash(),
            final_inventory = self.ledger.inventory(),
            final_wealth = self.ledger.wealth(self.price_process.mid_price()),
            "simulation run complete"
        );

        let (inventory_history, wealth_history) = self.ledger.into_histories();
        let (time_history, price_history) = self.price_process.into_histories();
        SimulationOutput {
            time_history,
            price_history,
            inventory_history,
            wealth_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::fixed_spread::FixedSpreadStrategy;

    fn config() -> MarketConfig {
        MarketConfig::new(1.0, 0.005, 0.5, 100.0, 140.0, 1.5).unwrap()
    }

    #[test]
    fn test_histories_have_one_entry_per_step() {
        let strategy = FixedSpreadStrategy::new(0.5).unwrap();
        let engine = SimulationEngine::new(config(), strategy, 7).unwrap();
        let output = engine.run();
        let steps = config().num_steps();
        assert_eq!(output.time_history.len(), steps);
        assert_eq!(output.price_history.len(), steps);
        assert_eq!(output.inventory_history.len(), steps);
        assert_eq!(output.wealth_history.len(), steps);
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let run = |seed| {
            let strategy = FixedSpreadStrategy::new(0.5).unwrap();
            SimulationEngine::new(config(), strategy, seed).unwrap().run()
        };
        let a = run(42);
        let b = run(42);
        assert_eq!(a.price_history, b.price_history);
        assert_eq!(a.inventory_history, b.inventory_history);
        assert_eq!(a.wealth_history, b.wealth_history);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let run = |seed| {
            let strategy = FixedSpreadStrategy::new(0.5).unwrap();
            SimulationEngine::new(config(), strategy, seed).unwrap().run()
        };
        let a = run(1);
        let b = run(2);
        assert_ne!(a.price_history, b.price_history);
    }

    #[test]
    fn test_inventory_changes_by_at_most_one_per_step() {
        let strategy = FixedSpreadStrategy::new(0.5).unwrap();
        let output = SimulationEngine::new(config(), strategy, 3).unwrap().run();
        let mut previous = 0;
        for &inventory in &output.inventory_history {
            assert!((inventory - previous).abs() <= 1);
            previous = inventory;
        }
    }

    #[test]
    fn test_wealth_consistent_with_price_and_inventory() {
        // With a wide quote nothing ever fills, so wealth stays at zero cash.
        let strategy = FixedSpreadStrategy::new(1_000.0).unwrap();
        let output = SimulationEngine::new(config(), strategy, 11).unwrap().run();
        assert!(output.inventory_history.iter().all(|&q| q == 0));
        assert!(output.wealth_history.iter().all(|&w| w == 0.0));
    }
}
