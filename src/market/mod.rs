//! Market module containing the simulated market environment.
//!
//! This module provides:
//! - Market configuration with fail-fast validation
//! - Mid-price evolution via discretized geometric Brownian motion
//! - Intensity-based probabilistic order fill resolution
//!
//! # Price Dynamics
//!
//! ```text
//! dW ~ Normal(0, sqrt(dt))
//! price <- price + price * sigma * dW
//! ```
//!
//! # Fill Probabilities
//!
//! ```text
//! delta_bid = mid - bid,  delta_ask = ask - mid
//! lambda = A * exp(-k * delta)
//! p_fill = lambda * dt
//! ```

/// Market configuration parameters.
pub mod config;

/// Probabilistic order fill resolution.
pub mod fill_model;

/// Mid-price evolution process.
pub mod price_process;

pub use config::MarketConfig;
pub use fill_model::{FillModel, FillOutcome};
pub use price_process::PriceProcess;
