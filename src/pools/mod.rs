//! Simulated constant-product pool state.
//!
//! [`PoolState`] is the only mutable entity in the crate.  Each scenario
//! walk and each statistics history owns its own instance; nothing shares
//! one.

mod pool_state;

#[cfg(test)]
mod proptest_properties;

pub use pool_state::{PoolState, StepFlows};
