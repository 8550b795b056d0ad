// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Tolerance helpers shared by canonicalization, root testing and comparisons.

use crate::canonical::Term;

/// Coefficients with a magnitude below this value are dropped during canonicalization.
pub const PRUNE_TOLERANCE: f64 = 1e-12;

/// Values with a magnitude below this value count as a root.
pub const ROOT_TOLERANCE: f64 = 1e-9;

/// Checks whether a value is negligible with respect to a tolerance.
///
/// # Arguments
///
/// * `value` - The value to test.
/// * `tolerance` - The exclusive upper bound on the magnitude.
///
/// # Returns
///
/// `true` if `|value| < tolerance`. `NaN` is never negligible.
pub fn is_negligible(value: f64, tolerance: f64) -> bool {
    value.abs() < tolerance
}

/// Checks whether two values differ by less than a tolerance.
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    is_negligible(a - b, tolerance)
}

/// Compares two term lists: exponents exactly, coefficients within `tolerance`.
///
/// # Arguments
///
/// * `a` - The first term list.
/// * `b` - The second term list.
/// * `tolerance` - Maximum allowed coefficient difference (exclusive).
///
/// # Returns
///
/// `true` if both lists have the same length and every pair of terms matches.
pub fn terms_approx_eq(a: &[Term], b: &[Term], tolerance: f64) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(l, r)| {
            l.exponent == r.exponent && approx_eq(l.coefficient, r.coefficient, tolerance)
        })
}
