//! Position accounting: fees, cash, inventory, and wealth tracking.
//!
//! This module handles:
//! - Maker/taker classification of fills against the prevailing mid-price
//! - Cash and inventory updates when quotes fill
//! - Per-step wealth (cash + inventory x mid) recording

/// Fee and rebate schedule with maker/taker classification.
pub mod fees;

/// Cash/inventory ledger mutated by fill events.
pub mod ledger;

pub use fees::FeeSchedule;
pub use ledger::Ledger;
