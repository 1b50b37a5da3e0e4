//! Primitive type aliases for the simulation domain.

/// Price value of the simulated asset, represented as f64.
pub type Price = f64;

/// Simulation time in the same units as the horizon `T` (e.g. fractions of a
/// trading day), represented as f64.
pub type SimTime = f64;

/// Signed inventory in whole units.
///
/// Positive values indicate a long position, negative values a short position.
pub type Inventory = i64;

/// Volatility value (per unit of simulation time), represented as f64.
pub type Volatility = f64;

/// Risk aversion parameter (gamma), represented as f64.
pub type RiskAversion = f64;

/// Order arrival intensity scale (A), represented as f64.
pub type IntensityScale = f64;

/// Order arrival intensity decay (k), represented as f64.
pub type IntensityDecay = f64;
