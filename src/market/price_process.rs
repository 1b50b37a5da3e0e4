//! Mid-price evolution process.
//!
//! Models the mid-price as geometric Brownian motion discretized over the
//! configured step `dt`:
//!
//! ```text
//! dW ~ Normal(0, sqrt(dt))
//! price <- price + price * sigma * dW
//! ```
//!
//! A sufficiently large negative draw can push the price non-positive; the
//! process does not clamp. This is a known limitation of the arithmetic
//! discretization, preserved as-is.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::market::config::MarketConfig;
use crate::types::error::{SimError, SimResult};
use crate::types::primitives::{Price, SimTime};

/// Evolving mid-price of the simulated asset.
///
/// Owns the current mid-price, the simulation clock, and the append-only
/// price/time histories. All randomness is drawn from a caller-provided
/// generator so that a fixed seed yields a fully reproducible path.
#[derive(Debug, Clone)]
pub struct PriceProcess {
    config: MarketConfig,
    current_time: SimTime,
    mid_price: Price,
    increment: Normal<f64>,
    price_history: Vec<Price>,
    time_history: Vec<SimTime>,
}

impl PriceProcess {
    /// Creates a new price process at the configured start price.
    ///
    /// Histories are preallocated to the full step count of a run.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidConfiguration` if the Gaussian increment
    /// distribution cannot be constructed from the configured step.
    pub fn new(config: MarketConfig) -> SimResult<Self> {
        let increment = Normal::new(0.0, config.step.sqrt()).map_err(|e| {
            SimError::InvalidConfiguration(format!("invalid step for price increments: {e}"))
        })?;

        let steps = config.num_steps();
        let mid_price = config.start_price;
        Ok(Self {
            config,
            current_time: 0.0,
            mid_price,
            increment,
            price_history: Vec::with_capacity(steps),
            time_history: Vec::with_capacity(steps),
        })
    }

    /// Advances the process by one step and returns the new mid-price.
    ///
    /// Draws one Gaussian increment from `rng`, updates the mid-price,
    /// advances the clock by `dt`, and appends `(time, price)` to the
    /// histories.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> Price {
        let dw = self.increment.sample(rng);
        self.mid_price += self.mid_price * self.config.sigma * dw;
        self.current_time += self.config.step;
        self.price_history.push(self.mid_price);
        self.time_history.push(self.current_time);
        self.mid_price
    }

    /// Returns the current mid-price.
    #[must_use]
    pub fn mid_price(&self) -> Price {
        self.mid_price
    }

    /// Returns the current simulation time.
    #[must_use]
    pub fn current_time(&self) -> SimTime {
        self.current_time
    }

    /// Returns the market configuration.
    #[must_use]
    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Returns the recorded price history, one entry per step.
    #[must_use]
    pub fn price_history(&self) -> &[Price] {
        &self.price_history
    }

    /// Returns the recorded time history, one entry per step.
    #[must_use]
    pub fn time_history(&self) -> &[SimTime] {
        &self.time_history
    }

    /// Consumes the process, returning `(time_history, price_history)`.
    #[must_use]
    pub fn into_histories(self) -> (Vec<SimTime>, Vec<Price>) {
        (self.time_history, self.price_history)
    }
}
