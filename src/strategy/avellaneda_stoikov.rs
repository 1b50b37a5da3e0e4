//! Avellaneda-Stoikov model calculations.
//!
//! Implements the closed-form quoting policy from the Avellaneda-Stoikov
//! (2008) paper on high-frequency trading in a limit order book: quotes are
//! centered on an inventory-skewed reservation price rather than on the
//! mid-price, at a spread that tightens as the terminal time approaches.

use crate::strategy::{Quote, QuoteStrategy};
use crate::types::error::{SimError, SimResult};
use crate::types::primitives::{
    IntensityDecay, Inventory, Price, RiskAversion, SimTime, Volatility,
};

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};

/// Reservation-price quoting per Avellaneda-Stoikov.
///
/// A long inventory skews the reservation price below the mid so the agent
/// sells down its position faster; a short inventory skews it above. As the
/// remaining horizon shrinks, the optimal spread decays toward its
/// `(2/γ)·ln(1 + γ/k)` floor.
#[derive(Clone, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple))]
pub struct AvellanedaStoikovStrategy {
    /// Trading horizon `T`, matching the market configuration.
    pub horizon: SimTime,

    /// Volatility `sigma`, matching the market configuration.
    pub sigma: Volatility,

    /// Risk aversion `gamma`. Strictly positive.
    pub risk_aversion: RiskAversion,

    /// Arrival intensity decay `k`, matching the market configuration.
    /// Strictly positive.
    pub intensity_decay: IntensityDecay,
}

impl AvellanedaStoikovStrategy {
    /// Creates a new Avellaneda-Stoikov strategy with validation.
    ///
    /// `risk_aversion` and `intensity_decay` both appear as divisors in the
    /// optimal spread formula, so zero is rejected here rather than faulting
    /// mid-run.
    ///
    /// # Arguments
    ///
    /// * `horizon` - Trading horizon `T`, must be positive
    /// * `sigma` - Volatility, must be non-negative
    /// * `risk_aversion` - Risk aversion `gamma`, must be positive
    /// * `intensity_decay` - Intensity decay `k`, must be positive
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidConfiguration` if parameters are invalid.
    pub fn new(
        horizon: SimTime,
        sigma: Volatility,
        risk_aversion: RiskAversion,
        intensity_decay: IntensityDecay,
    ) -> SimResult<Self> {
        if horizon <= 0.0 {
            return Err(SimError::InvalidConfiguration(
                "horizon must be positive".to_string(),
            ));
        }

        if sigma < 0.0 {
            return Err(SimError::InvalidConfiguration(
                "sigma must be non-negative".to_string(),
            ));
        }

        if risk_aversion <= 0.0 {
            return Err(SimError::InvalidConfiguration(
                "risk_aversion must be positive".to_string(),
            ));
        }

        if intensity_decay <= 0.0 {
            return Err(SimError::InvalidConfiguration(
                "intensity_decay must be positive".to_string(),
            ));
        }

        Ok(Self {
            horizon,
            sigma,
            risk_aversion,
            intensity_decay,
        })
    }

    /// Remaining horizon `max(T - t, 0)`, clamped so quoting past the
    /// nominal end time never produces a negative time term.
    fn time_left(&self, time: SimTime) -> SimTime {
        (self.horizon - time).max(0.0)
    }

    /// Inventory-skewed reservation price.
    ///
    /// ```text
    /// r = s - q * γ * σ² * (T - t)
    /// ```
    #[must_use]
    pub fn reservation_price(
        &self,
        time: SimTime,
        mid_price: Price,
        inventory: Inventory,
    ) -> Price {
        let time_left = self.time_left(time);
        mid_price - inventory as f64 * self.risk_aversion * self.sigma.powi(2) * time_left
    }

    /// Optimal total spread.
    ///
    /// ```text
    /// spread = γ * σ² * (T - t) + (2/γ) * ln(1 + γ/k)
    /// ```
    ///
    /// The first term vanishes as the horizon runs out; the logarithmic
    /// floor driven by the arrival intensity remains.
    #[must_use]
    pub fn optimal_spread(&self, time: SimTime) -> Price {
        let time_left = self.time_left(time);
        let risk_term = self.risk_aversion * self.sigma.powi(2) * time_left;
        let intensity_term = (2.0 / self.risk_aversion)
            * (1.0 + self.risk_aversion / self.intensity_decay).ln();
        risk_term + intensity_term
    }
}

impl QuoteStrategy for AvellanedaStoikovStrategy {
    fn quote(&self, time: SimTime, mid_price: Price, inventory: Inventory) -> Quote {
        let reservation = self.reservation_price(time, mid_price, inventory);
        let half_spread = self.optimal_spread(time) / 2.0;
        Quote::new(reservation - half_spread, reservation + half_spread)
    }

    fn name(&self) -> &'static str {
        "AvellanedaStoikov"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy() -> AvellanedaStoikovStrategy {
        AvellanedaStoikovStrategy::new(1.0, 0.5, 1.0, 1.5).unwrap()
    }

    #[test]
    fn test_invalid_gamma_rejected() {
        assert!(AvellanedaStoikovStrategy::new(1.0, 0.5, 0.0, 1.5).is_err());
        assert!(AvellanedaStoikovStrategy::new(1.0, 0.5, -1.0, 1.5).is_err());
    }

    #[test]
    fn test_invalid_intensity_decay_rejected() {
        let result = AvellanedaStoikovStrategy::new(1.0, 0.5, 1.0, 0.0);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            SimError::InvalidConfiguration(_)
        ));
    }

    #[test]
    fn test_invalid_horizon_rejected() {
        assert!(AvellanedaStoikovStrategy::new(0.0, 0.5, 1.0, 1.5).is_err());
    }

    #[test]
    fn test_reservation_price_equals_mid_when_flat() {
        let strategy = strategy();
        for time in [0.0, 0.25, 0.5, 0.99] {
            assert_eq!(strategy.reservation_price(time, 100.0, 0), 100.0);
        }
    }

    #[test]
    fn test_long_inventory_skews_reservation_down() {
        let strategy = strategy();
        let r_long = strategy.reservation_price(0.0, 100.0, 10);
        let r_short = strategy.reservation_price(0.0, 100.0, -10);

        assert!(r_long < 100.0);
        assert!(r_short > 100.0);

        // r = 100 - 10 * 1.0 * 0.25 * 1.0 = 97.5
        assert!((r_long - 97.5).abs() < 1e-12);
    }

    #[test]
    fn test_optimal_spread_at_start() {
        // spread(0) = γσ²T + (2/γ)ln(1 + γ/k)
        let strategy = strategy();
        let expected = 1.0 * 0.25 * 1.0 + 2.0 * (1.0f64 + 1.0 / 1.5).ln();
        assert!((strategy.optimal_spread(0.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_spread_converges_to_intensity_floor() {
        let strategy = strategy();
        let floor = 2.0 * (1.0f64 + 1.0 / 1.5).ln();

        assert!((strategy.optimal_spread(1.0) - floor).abs() < 1e-12);
        // Past the nominal horizon the clamp keeps the floor.
        assert!((strategy.optimal_spread(1.5) - floor).abs() < 1e-12);

        // Spread shrinks monotonically toward the floor.
        assert!(strategy.optimal_spread(0.0) > strategy.optimal_spread(0.5));
        assert!(strategy.optimal_spread(0.5) > strategy.optimal_spread(0.999));
    }

    #[test]
    fn test_quote_centers_on_reservation_price() {
        let strategy = strategy();
        let quote = strategy.quote(0.5, 100.0, 5);

        let reservation = strategy.reservation_price(0.5, 100.0, 5);
        let spread = strategy.optimal_spread(0.5);

        assert!((quote.midpoint() - reservation).abs() < 1e-12);
        assert!((quote.spread() - spread).abs() < 1e-12);
        assert!(quote.bid < quote.ask);
    }

    #[test]
    fn test_time_left_clamped_after_horizon() {
        let strategy = strategy();
        // Past T the reservation price collapses back to the mid.
        assert_eq!(strategy.reservation_price(2.0, 100.0, 50), 100.0);
    }

    #[test]
    fn test_name() {
        assert_eq!(strategy().name(), "AvellanedaStoikov");
    }
}
