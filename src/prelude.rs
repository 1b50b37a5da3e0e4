//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types, traits, and functions
//! from the simulation library. Users can import everything they need with:
//!
//! ```rust
//! use market_sim_rs::prelude::*;
//! ```

// Re-export types module
pub use crate::types::error::{SimError, SimResult};
pub use crate::types::primitives::{
    Inventory, IntensityDecay, IntensityScale, Price, RiskAversion, SimTime, Volatility,
};

// Re-export market types
pub use crate::market::config::MarketConfig;
pub use crate::market::fill_model::{FillModel, FillOutcome};
pub use crate::market::price_process::PriceProcess;

// Re-export strategy types
pub use crate::strategy::avellaneda_stoikov::AvellanedaStoikovStrategy;
pub use crate::strategy::fixed_spread::FixedSpreadStrategy;
pub use crate::strategy::quote::Quote;
pub use crate::strategy::QuoteStrategy;

// Re-export position types
pub use crate::position::fees::FeeSchedule;
pub use crate::position::ledger::Ledger;

// Re-export simulation and metrics
pub use crate::metrics::{performance_summary, PerformanceSummary, DEFAULT_ANNUALIZATION_FACTOR};
pub use crate::simulation::engine::{SimulationEngine, SimulationOutput};
