//! Common types and error definitions for the simulator.
//!
//! This module contains:
//! - Error types using `thiserror`
//! - Type aliases for domain concepts
/// Error types for the simulator.
pub mod error;

/// Common type aliases for prices, inventory, and simulation time.
pub mod primitives;
