//! Arithmetic helpers for pool reserve calculations.
//!
//! All helpers operate on `f64` and are total: degenerate reserves are
//! clamped or priced at zero instead of producing an error, `NaN` or `∞`.

mod reserves;

pub use reserves::{
    MIN_RESERVE, RESERVE_EPSILON, clamp_reserve, constant_k, keep_positive, price_from_reserves,
    ratio_percent,
};
