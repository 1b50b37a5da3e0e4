//! Simulation loop wiring the market, strategy, and ledger together.
//!
//! Each step advances the price process, asks the strategy for a quote,
//! resolves fills probabilistically, and applies them to the ledger. The
//! loop runs for a fixed number of steps and produces four aligned time
//! series for downstream analysis.

/// Single-threaded simulation engine.
pub mod engine;

pub use engine::{SimulationEngine, SimulationOutput};
