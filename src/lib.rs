//! Market Making Simulation Library
//!
//! A Rust library for simulating quoting strategies in a synthetic market,
//! including the Avellaneda-Stoikov model. The market mid-price follows a
//! discretized geometric Brownian motion, counterparty arrivals decay
//! exponentially with quote distance, and a ledger accounts for maker
//! rebates and taker fees on every fill.
//!
//! # Overview
//!
//! Market making is the practice of simultaneously providing buy (bid) and
//! sell (ask) quotes in a financial market. The market maker profits from
//! the bid-ask spread while providing liquidity to the market. This crate
//! lets you run a quoting strategy against a simulated market and compare
//! strategies on PnL and Sharpe ratio under identical random seeds.
//!
//! # The Avellaneda-Stoikov Model
//!
//! The Avellaneda-Stoikov model (2008) solves the optimal market making
//! problem using stochastic control theory. It skews a reservation price
//! away from the mid by held inventory and widens the spread with remaining
//! horizon, volatility, and risk aversion. A fixed-spread strategy is
//! provided as a baseline.
//!
//! # Modules
//!
//! - [`market`]: Mid-price dynamics and probabilistic fill resolution
//! - [`strategy`]: Quote generation policies
//! - [`position`]: Fee accounting and the cash/inventory ledger
//! - [`simulation`]: The step loop tying everything together
//! - [`metrics`]: PnL and Sharpe summaries over a run's wealth history
//! - [`types`]: Common types and error definitions
//!
//! # Example
//!
//! ```rust
//! use market_sim_rs::prelude::*;
//!
//! let config = MarketConfig::new(1.0, 0.005, 0.5, 100.0, 140.0, 1.5)?;
//! let strategy = AvellanedaStoikovStrategy::new(1.0, 0.5, 1.0, 1.5)?;
//! let output = SimulationEngine::new(config, strategy, 42)?.run();
//! let summary = performance_summary(&output.wealth_history, DEFAULT_ANNUALIZATION_FACTOR);
//! println!("PnL: {:.4}, Sharpe: {:.4}", summary.pnl, summary.sharpe);
//! # Ok::<(), market_sim_rs::types::error::SimError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

/// Market dynamics: configuration, price process, and fill model.
pub mod market;

/// Performance metrics over wealth histories.
pub mod metrics;

/// Position accounting: fee schedule and ledger.
pub mod position;

/// Prelude for convenient imports.
pub mod prelude;

/// Simulation loop.
pub mod simulation;

/// Quote generation strategies.
pub mod strategy;

/// Common types and error definitions.
pub mod types;
