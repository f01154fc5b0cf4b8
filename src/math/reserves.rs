//! Reserve pricing and clamping helpers for `f64` pool arithmetic.
//!
//! These functions never fail.  Degenerate inputs (zero, negative or NaN
//! reserves) are handled by clamping or by returning a zero price, so the
//! calculators built on top of them always produce finite output for
//! finite input.
//!
//! | Function | Degenerate input | Result |
//! |----------|------------------|--------|
//! | [`price_from_reserves`] | `token_reserve <= 0` | `0.0` |
//! | [`clamp_reserve`] | `value < MIN_RESERVE` or NaN | [`MIN_RESERVE`] |
//! | [`keep_positive`] | `value <= 0` or NaN | [`RESERVE_EPSILON`] |
//! | [`constant_k`] | either side below [`MIN_RESERVE`] | product of clamped sides |
//! | [`ratio_percent`] | `whole <= 0` | `0.0` |

/// Smallest reserve a simulated pool may hold on either side.
pub const MIN_RESERVE: f64 = 1.0;

/// Stand-in for a reserve that a flow drove to or below zero.
pub const RESERVE_EPSILON: f64 = 1e-9;

/// Returns the instantaneous pool price `usd_reserve / token_reserve`.
///
/// Fails closed: a non-positive (or NaN) token reserve yields `0.0`
/// instead of `±∞` or `NaN`.
///
/// # Examples
///
/// ```
/// use tokenomics_amm::math::price_from_reserves;
///
/// assert!((price_from_reserves(50_000.0, 500_000.0) - 0.1).abs() < 1e-12);
/// assert_eq!(price_from_reserves(50_000.0, 0.0), 0.0);
/// ```
#[must_use]
pub fn price_from_reserves(usd_reserve: f64, token_reserve: f64) -> f64 {
    if token_reserve.is_nan() || token_reserve <= 0.0 {
        return 0.0;
    }
    usd_reserve / token_reserve
}

/// Clamps a reserve to at least [`MIN_RESERVE`].
///
/// NaN is treated as empty and clamped as well.
#[inline]
#[must_use]
pub fn clamp_reserve(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_RESERVE;
    }
    value.max(MIN_RESERVE)
}

/// Keeps a mid-walk reserve strictly positive.
///
/// Positive values pass through untouched, so a swap against a small
/// reserve still conserves `k`.  Only a non-positive or NaN result is
/// replaced by [`RESERVE_EPSILON`].
#[inline]
#[must_use]
pub fn keep_positive(value: f64) -> f64 {
    if value.is_nan() || value <= 0.0 {
        return RESERVE_EPSILON;
    }
    value
}

/// Computes the constant-product invariant `k = x · y` from clamped
/// reserves.
#[inline]
#[must_use]
pub fn constant_k(usd_reserve: f64, token_reserve: f64) -> f64 {
    clamp_reserve(usd_reserve) * clamp_reserve(token_reserve)
}

/// Expresses `part` as a percentage of `whole`.
///
/// Returns `0.0` when `whole` is not strictly positive.
#[inline]
#[must_use]
pub fn ratio_percent(part: f64, whole: f64) -> f64 {
    if whole.is_nan() || whole <= 0.0 {
        return 0.0;
    }
    part / whole * 100.0
}
