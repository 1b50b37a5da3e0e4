//! Naive fixed-spread quoting.

use crate::strategy::{Quote, QuoteStrategy};
use crate::types::error::{SimError, SimResult};
use crate::types::primitives::{Inventory, Price, SimTime};

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};

/// Quotes symmetrically around the mid-price at a fixed total spread.
///
/// Ignores time and inventory entirely; useful as a baseline against the
/// inventory-aware Avellaneda-Stoikov policy.
#[derive(Clone, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple))]
pub struct FixedSpreadStrategy {
    /// Total quoted spread, in price units.
    pub spread: Price,
}

impl FixedSpreadStrategy {
    /// Creates a new fixed-spread strategy.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidConfiguration` if `spread` is negative.
    pub fn new(spread: Price) -> SimResult<Self> {
        if spread < 0.0 {
            return Err(SimError::InvalidConfiguration(
                "spread must be non-negative".to_string(),
            ));
        }

        Ok(Self { spread })
    }
}

impl QuoteStrategy for FixedSpreadStrategy {
    fn quote(&self, _time: SimTime, mid_price: Price, _inventory: Inventory) -> Quote {
        let half = self.spread / 2.0;
        Quote::new(mid_price - half, mid_price + half)
    }

    fn name(&self) -> &'static str {
        "FixedSpread"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotes_symmetric_around_mid() {
        let strategy = FixedSpreadStrategy::new(0.5).unwrap();
        let quote = strategy.quote(0.0, 100.0, 0);

        assert!((quote.bid - 99.75).abs() < 1e-12);
        assert!((quote.ask - 100.25).abs() < 1e-12);
        assert!((quote.spread() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_ignores_time_and_inventory() {
        let strategy = FixedSpreadStrategy::new(0.5).unwrap();
        let a = strategy.quote(0.0, 100.0, 0);
        let b = strategy.quote(0.75, 100.0, -25);
        let c = strategy.quote(1.0, 100.0, 40);

        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_zero_spread_quotes_at_mid() {
        let strategy = FixedSpreadStrategy::new(0.0).unwrap();
        let quote = strategy.quote(0.0, 100.0, 0);
        assert_eq!(quote.bid, 100.0);
        assert_eq!(quote.ask, 100.0);
    }

    #[test]
    fn test_negative_spread_rejected() {
        let result = FixedSpreadStrategy::new(-0.1);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            SimError::InvalidConfiguration(_)
        ));
    }

    #[test]
    fn test_name() {
        let strategy = FixedSpreadStrategy::new(0.5).unwrap();
        assert_eq!(strategy.name(), "FixedSpread");
    }
}
