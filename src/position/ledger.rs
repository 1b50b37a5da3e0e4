//! Cash and inventory ledger.
//!
//! The ledger is the single sink for confirmed fill events. It knows nothing
//! about which quoting policy produced the quotes; it only classifies each
//! fill against the prevailing mid-price, moves cash, steps inventory by one
//! unit per filled side, and records mark-to-mid wealth once per step.

use crate::market::fill_model::FillOutcome;
use crate::position::fees::FeeSchedule;
use crate::strategy::quote::Quote;
use crate::types::primitives::{Inventory, Price};

/// Tracks cash, signed inventory, and per-step wealth history.
///
/// Cash may go negative (buying on margin is not restricted) and inventory
/// is unbounded in both directions. Wealth is marked to the mid-price, not
/// to the ledger's own fill prices.
#[derive(Clone, PartialEq)]
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
pub struct Ledger {
    cash: f64,
    inventory: Inventory,
    fees: FeeSchedule,
    inventory_history: Vec<Inventory>,
    wealth_history: Vec<f64>,
}

impl Ledger {
    /// Creates an empty ledger with history capacity for `num_steps` steps.
    #[must_use]
    pub fn new(fees: FeeSchedule, num_steps: usize) -> Self {
        Self {
            cash: 0.0,
            inventory: 0,
            fees,
            inventory_history: Vec::with_capacity(num_steps),
            wealth_history: Vec::with_capacity(num_steps),
        }
    }

    /// Applies one step's fill outcome and records wealth.
    ///
    /// A bid fill buys one unit at the quoted bid; an ask fill sells one
    /// unit at the quoted ask. Each filled side is classified maker or
    /// taker against `mid_price` by the fee schedule. Wealth
    /// (`cash + inventory x mid_price`) is appended exactly once per call,
    /// whether or not anything filled.
    pub fn apply_fills(&mut self, mid_price: Price, outcome: FillOutcome, quote: Quote) {
        if outcome.bid_filled {
            self.cash -= self.fees.buy_cost(quote.bid, mid_price);
            self.inventory += 1;
        }
        if outcome.ask_filled {
            self.cash += self.fees.sell_credit(quote.ask, mid_price);
            self.inventory -= 1;
        }
        self.inventory_history.push(self.inventory);
        self.wealth_history.push(self.wealth(mid_price));
    }

    /// Current cash balance.
    #[must_use]
    pub fn cash(&self) -> f64 {
        self.cash
    }

    /// Current signed inventory in units.
    #[must_use]
    pub fn inventory(&self) -> Inventory {
        self.inventory
    }

    /// Mark-to-mid wealth at the given mid-price.
    #[must_use]
    pub fn wealth(&self, mid_price: Price) -> f64 {
        self.cash + self.inventory as f64 * mid_price
    }

    /// Per-step inventory history.
    #[must_use]
    pub fn inventory_history(&self) -> &[Inventory] {
        &self.inventory_history
    }

    /// Per-step wealth history.
    #[must_use]
    pub fn wealth_history(&self) -> &[f64] {
        &self.wealth_history
    }

    /// Consumes the ledger and returns (inventory history, wealth history).
    #[must_use]
    pub fn into_histories(self) -> (Vec<Inventory>, Vec<f64>) {
        (self.inventory_history, self.wealth_history)
    }
}
