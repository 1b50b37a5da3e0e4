//! Maker/taker fee schedule.
//!
//! Classification is decided after the fact by comparing the executed price
//! to the prevailing mid-price, not by the quote's original intent: a buy at
//! or above mid is a taker buy, a sell at or below mid is a taker sell, and
//! everything else rests passively and earns the maker rebate.

use crate::types::error::{SimError, SimResult};
use crate::types::primitives::Price;

/// Default maker rebate as a fraction of notional.
pub const DEFAULT_MAKER_REBATE: f64 = 0.0002;

/// Default taker fee as a fraction of notional.
pub const DEFAULT_TAKER_FEE: f64 = 0.0005;

/// Fee and rebate rates applied to fills.
///
/// Both rates are fractions of notional (price x size, with unit size here).
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(
    feature = "serde",
    derive(
        serde::Serialize,
        serde::Deserialize,
        pretty_simple_display::DebugPretty,
        pretty_simple_display::DisplaySimple
    )
)]
pub struct FeeSchedule {
    /// Rebate credited on passive (maker) fills.
    pub maker_rebate: f64,
    /// Fee charged on aggressive (taker) fills.
    pub taker_fee: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            maker_rebate: DEFAULT_MAKER_REBATE,
            taker_fee: DEFAULT_TAKER_FEE,
        }
    }
}

impl FeeSchedule {
    /// Creates a fee schedule with explicit rates.
    ///
    /// # Errors
    ///
    /// Returns an error if either rate is negative.
    pub fn new(maker_rebate: f64, taker_fee: f64) -> SimResult<Self> {
        if maker_rebate < 0.0 {
            return Err(SimError::InvalidConfiguration(format!(
                "maker_rebate must be non-negative, got {maker_rebate}"
            )));
        }
        if taker_fee < 0.0 {
            return Err(SimError::InvalidConfiguration(format!(
                "taker_fee must be non-negative, got {taker_fee}"
            )));
        }
        Ok(Self {
            maker_rebate,
            taker_fee,
        })
    }

    /// Cash outlay for buying one unit at `price` against the given mid.
    ///
    /// A buy at or above mid crosses the book and pays the taker fee;
    /// a buy below mid rested passively and earns the maker rebate.
    #[must_use]
    pub fn buy_cost(&self, price: Price, mid_price: Price) -> f64 {
        if price >= mid_price {
            price * (1.0 + self.taker_fee)
        } else {
            price * (1.0 - self.maker_rebate)
        }
    }

    /// Cash credit for selling one unit at `price` against the given mid.
    ///
    /// A sell at or below mid crosses the book and pays the taker fee;
    /// a sell above mid rested passively and earns the maker rebate.
    #[must_use]
    pub fn sell_credit(&self, price: Price, mid_price: Price) -> f64 {
        if price <= mid_price {
            price * (1.0 - self.taker_fee)
        } else {
            price * (1.0 + self.maker_rebate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates() {
        let fees = FeeSchedule::default();
        assert_eq!(fees.maker_rebate, 0.0002);
        assert_eq!(fees.taker_fee, 0.0005);
    }

    #[test]
    fn test_negative_rates_rejected() {
        assert!(FeeSchedule::new(-0.0001, 0.0005).is_err());
        assert!(FeeSchedule::new(0.0002, -0.0005).is_err());
        assert!(FeeSchedule::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_maker_buy_below_mid() {
        let fees = FeeSchedule::default();
        let cost = fees.buy_cost(99.5, 100.0);
        assert!((cost - 99.4801).abs() < 1e-10);
    }

    #[test]
    fn test_taker_buy_at_or_above_mid() {
        let fees = FeeSchedule::default();
        // At mid counts as aggressive.
        let at_mid = fees.buy_cost(100.0, 100.0);
        assert!((at_mid - 100.05).abs() < 1e-10);
        let above = fees.buy_cost(100.5, 100.0);
        assert!((above - 100.5 * 1.0005).abs() < 1e-10);
    }

    #[test]
    fn test_maker_sell_above_mid() {
        let fees = FeeSchedule::default();
        let credit = fees.sell_credit(100.5, 100.0);
        assert!((credit - 100.5201).abs() < 1e-10);
    }

    #[test]
    fn test_taker_sell_at_or_below_mid() {
        let fees = FeeSchedule::default();
        let at_mid = fees.sell_credit(100.0, 100.0);
        assert!((at_mid - 99.95).abs() < 1e-10);
        let below = fees.sell_credit(99.5, 100.0);
        assert!((below - 99.5 * 0.9995).abs() < 1e-10);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let fees = FeeSchedule::default();
        let json = serde_json::to_string(&fees).unwrap();
        let back: FeeSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(fees, back);
    }
}
