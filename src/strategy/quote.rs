//! Quote pair representation.

use crate::types::primitives::Price;

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};

/// A bid/ask pair for one simulation step.
///
/// Transient: produced fresh each step by the active strategy and consumed
/// by the fill model and the ledger within the same step.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple))]
pub struct Quote {
    /// Bid price (the agent's buy quote).
    pub bid: Price,

    /// Ask price (the agent's sell quote).
    pub ask: Price,
}

impl Quote {
    /// Creates a new quote pair.
    #[must_use]
    pub fn new(bid: Price, ask: Price) -> Self {
        Self { bid, ask }
    }

    /// Returns the quoted spread, `ask - bid`.
    #[must_use]
    pub fn spread(&self) -> Price {
        self.ask - self.bid
    }

    /// Returns the midpoint of the quote pair.
    #[must_use]
    pub fn midpoint(&self) -> Price {
        (self.bid + self.ask) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_new() {
        let quote = Quote::new(99.5, 100.5);
        assert_eq!(quote.bid, 99.5);
        assert_eq!(quote.ask, 100.5);
    }

    #[test]
    fn test_spread() {
        let quote = Quote::new(99.5, 100.5);
        assert!((quote.spread() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_midpoint() {
        let quote = Quote::new(99.0, 101.0);
        assert!((quote.midpoint() - 100.0).abs() < 1e-12);
    }
}
