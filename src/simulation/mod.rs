//! ROI / price-path simulation across the three market scenarios.

mod roi;

pub use roi::{RoiSimulator, StepSnapshot, simulate_roi, simulate_roi_without_token_injection};
