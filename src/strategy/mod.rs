//! Strategy module containing the quoting policies.
//!
//! Two policies are provided: a naive fixed-spread quoter and the
//! Avellaneda-Stoikov model, which solves the optimal market making problem
//! using stochastic control theory. Both produce a fresh [`Quote`] each step
//! through the [`QuoteStrategy`] trait; neither owns any market or ledger
//! state.
//!
//! # Key Formulas (Avellaneda-Stoikov)
//!
//! ## Reservation Price
//! ```text
//! r = s - q * γ * σ² * (T - t)
//! ```
//!
//! ## Optimal Spread
//! ```text
//! spread = γ * σ² * (T - t) + (2/γ) * ln(1 + γ/k)
//! ```
//!
//! ## Optimal Quotes
//! ```text
//! bid = reservation_price - spread/2
//! ask = reservation_price + spread/2
//! ```

use crate::types::primitives::{Inventory, Price, SimTime};

/// Core Avellaneda-Stoikov model calculations.
pub mod avellaneda_stoikov;

/// Naive fixed-spread quoting.
pub mod fixed_spread;

/// Quote pair representation.
pub mod quote;

pub use avellaneda_stoikov::AvellanedaStoikovStrategy;
pub use fixed_spread::FixedSpreadStrategy;
pub use quote::Quote;

/// A quoting policy: computes a bid/ask pair for the current step.
///
/// Strategies are stateless with respect to the market; the current
/// inventory is passed in explicitly so that fee accounting stays decoupled
/// from strategy identity. Producing `bid <= ask` is a strategy
/// responsibility, not enforced by the simulation core.
pub trait QuoteStrategy {
    /// Computes the quote pair for the current step.
    ///
    /// # Arguments
    ///
    /// * `time` - Current simulation time
    /// * `mid_price` - Current mid-price
    /// * `inventory` - Signed inventory held by the agent
    fn quote(&self, time: SimTime, mid_price: Price, inventory: Inventory) -> Quote;

    /// Returns the strategy name for identification in reports.
    fn name(&self) -> &'static str;
}
