//! Probabilistic order fill resolution.
//!
//! Converts a quote pair into discrete fill events using an exponential
//! arrival intensity model: the farther a quote sits from the mid-price, the
//! less likely it is to be hit within one step.
//!
//! # Model
//!
//! ```text
//! delta_bid = mid - bid          delta_ask = ask - mid
//! lambda    = A * exp(-k * delta)
//! p_fill    = lambda * dt
//! ```
//!
//! Each side fills iff an independent uniform draw in `[0, 1)` falls below
//! its probability. Either, neither, or both sides may fill in one step.

use rand::Rng;

use crate::market::config::MarketConfig;
use crate::types::primitives::{IntensityDecay, IntensityScale, Inventory, Price, SimTime};

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};

/// Fill events for one simulation step, at most one unit per side.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple))]
pub struct FillOutcome {
    /// True if the bid quote was hit (the agent bought one unit).
    pub bid_filled: bool,

    /// True if the ask quote was lifted (the agent sold one unit).
    pub ask_filled: bool,
}

impl FillOutcome {
    /// Returns true if at least one side filled.
    #[must_use]
    pub fn any(&self) -> bool {
        self.bid_filled || self.ask_filled
    }

    /// Returns the net inventory change implied by this outcome.
    ///
    /// Both sides filling nets to zero; only a bid fill is `+1`, only an
    /// ask fill is `-1`.
    #[must_use]
    pub fn inventory_delta(&self) -> Inventory {
        i64::from(self.bid_filled) - i64::from(self.ask_filled)
    }
}

/// Intensity-based fill model.
///
/// Stateless between steps; all randomness comes from the caller-provided
/// generator, shared with the price process for reproducible runs.
#[derive(Debug, Clone)]
pub struct FillModel {
    intensity_scale: IntensityScale,
    intensity_decay: IntensityDecay,
    step: SimTime,
}

impl FillModel {
    /// Creates a fill model from a validated market configuration.
    #[must_use]
    pub fn new(config: &MarketConfig) -> Self {
        Self {
            intensity_scale: config.intensity_scale,
            intensity_decay: config.intensity_decay,
            step: config.step,
        }
    }

    /// Per-step fill probability for a quote at distance `delta` from the mid.
    ///
    /// Note that `lambda * dt` is deliberately not clamped to `[0, 1]`: a
    /// quote placed at or through the mid with `A * dt > 1` yields a
    /// "probability" above one and the comparison against a uniform draw
    /// always succeeds. This reproduces the reference arithmetic exactly.
    #[must_use]
    pub fn fill_probability(&self, delta: Price) -> f64 {
        let lambda = self.intensity_scale * (-self.intensity_decay * delta).exp();
        lambda * self.step
    }

    /// Resolves fills for one step given the current mid-price and quotes.
    ///
    /// The bid side is drawn first, then the ask side; the two decisions are
    /// statistically independent.
    pub fn resolve<R: Rng>(
        &self,
        rng: &mut R,
        mid_price: Price,
        bid: Price,
        ask: Price,
    ) -> FillOutcome {
        let p_bid = self.fill_probability(mid_price - bid);
        let p_ask = self.fill_probability(ask - mid_price);

        let bid_filled = rng.gen::<f64>() < p_bid;
        let ask_filled = rng.gen::<f64>() < p_ask;

        FillOutcome {
            bid_filled,
            ask_filled,
        }
    }
}
