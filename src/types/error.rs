//! Error types for the simulator.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result type alias for simulator operations.
pub type SimResult<T> = std::result::Result<T, SimError>;

/// Main error type for the simulator.
///
/// This enum represents all possible errors that can occur while constructing
/// or running a simulation. It uses tagged serialization for clear error
/// identification in serialized formats.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "details"))]
pub enum SimError {
    /// Invalid configuration parameter.
    ///
    /// Occurs when a market or strategy configuration has invalid parameters,
    /// such as a non-positive step size or non-positive risk aversion.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Invalid market state.
    ///
    /// Occurs when market data fed to a component is invalid, such as a
    /// non-finite mid-price.
    #[error("invalid market state: {0}")]
    InvalidMarketState(String),

    /// Numerical error (overflow, NaN, infinity, etc.).
    ///
    /// Occurs when a numerical computation produces an invalid result.
    #[error("numerical error: {0}")]
    NumericalError(String),
}

impl SimError {
    /// Returns true if this error is related to configuration issues.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }

    /// Returns true if this error is related to market state issues.
    #[must_use]
    pub fn is_market_state_error(&self) -> bool {
        matches!(self, Self::InvalidMarketState(_))
    }

    /// Returns true if this error is related to numerical issues.
    #[must_use]
    pub fn is_numerical_error(&self) -> bool {
        matches!(self, Self::NumericalError(_))
    }

    /// Returns the error message as a string slice.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidConfiguration(msg)
            | Self::InvalidMarketState(msg)
            | Self::NumericalError(msg) => msg,
        }
    }
}
