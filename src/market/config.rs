//! Market configuration parameters.

use crate::types::error::{SimError, SimResult};
use crate::types::primitives::{IntensityDecay, IntensityScale, Price, SimTime, Volatility};

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};

/// Configuration parameters for the simulated market environment.
#[derive(Clone, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple))]
pub struct MarketConfig {
    /// Trading horizon `T`, in simulation time units.
    ///
    /// Must be positive.
    pub horizon: SimTime,

    /// Time step `dt` of the discretization.
    ///
    /// Must be positive.
    pub step: SimTime,

    /// Volatility `sigma` of the mid-price process.
    ///
    /// Must be non-negative.
    pub sigma: Volatility,

    /// Initial mid-price.
    ///
    /// Must be positive.
    pub start_price: Price,

    /// Arrival intensity scale `A`.
    ///
    /// Models the baseline rate of counterparty orders hitting a quote
    /// placed at the mid-price. Must be non-negative.
    pub intensity_scale: IntensityScale,

    /// Arrival intensity decay `k`.
    ///
    /// Models how fast fill rates decay as quotes move away from the
    /// mid-price. Must be positive.
    pub intensity_decay: IntensityDecay,
}

impl MarketConfig {
    /// Creates a new market configuration with validation.
    ///
    /// # Arguments
    ///
    /// * `horizon` - Trading horizon `T`, must be positive
    /// * `step` - Time step `dt`, must be positive
    /// * `sigma` - Volatility, must be non-negative
    /// * `start_price` - Initial mid-price, must be positive
    /// * `intensity_scale` - Arrival intensity scale `A`, must be non-negative
    /// * `intensity_decay` - Arrival intensity decay `k`, must be positive
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidConfiguration` if parameters are invalid.
    pub fn new(
        horizon: SimTime,
        step: SimTime,
        sigma: Volatility,
        start_price: Price,
        intensity_scale: IntensityScale,
        intensity_decay: IntensityDecay,
    ) -> SimResult<Self> {
        if horizon <= 0.0 {
            return Err(SimError::InvalidConfiguration(
                "horizon must be positive".to_string(),
            ));
        }

        if step <= 0.0 {
            return Err(SimError::InvalidConfiguration(
                "step must be positive".to_string(),
            ));
        }

        if sigma < 0.0 {
            return Err(SimError::InvalidConfiguration(
                "sigma must be non-negative".to_string(),
            ));
        }

        if start_price <= 0.0 {
            return Err(SimError::InvalidConfiguration(
                "start_price must be positive".to_string(),
            ));
        }

        if intensity_scale < 0.0 {
            return Err(SimError::InvalidConfiguration(
                "intensity_scale must be non-negative".to_string(),
            ));
        }

        if intensity_decay <= 0.0 {
            return Err(SimError::InvalidConfiguration(
                "intensity_decay must be positive".to_string(),
            ));
        }

        Ok(Self {
            horizon,
            step,
            sigma,
            start_price,
            intensity_scale,
            intensity_decay,
        })
    }

    /// Returns the number of steps in a full run, `floor(T / dt)`.
    #[must_use]
    pub fn num_steps(&self) -> usize {
        (self.horizon / self.step) as usize
    }
}
