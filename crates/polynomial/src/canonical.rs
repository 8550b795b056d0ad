// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Terms and the canonical form of a term list.

use crate::utils::{is_negligible, PRUNE_TOLERANCE};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single `coefficient * x^exponent` contribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term {
    pub coefficient: f64,
    pub exponent: i32,
}

impl Term {
    pub fn new(coefficient: f64, exponent: i32) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// The term standing for the zero polynomial.
    pub fn zero() -> Self {
        Self::new(0.0, 0)
    }
}

impl From<(f64, i32)> for Term {
    fn from((coefficient, exponent): (f64, i32)) -> Self {
        Self::new(coefficient, exponent)
    }
}

/// Brings a raw term list into canonical form.
///
/// Coefficients sharing an exponent are summed in input order, sums below
/// [`PRUNE_TOLERANCE`] are dropped and the survivors come out in ascending
/// exponent order. An empty result collapses to the single term `(0.0, 0)`.
///
/// # Arguments
///
/// * `raw` - Terms in any order, possibly with repeated exponents.
///
/// # Returns
///
/// A non-empty term list with distinct, ascending exponents.
pub fn canonicalize<I>(raw: I) -> Vec<Term>
where
    I: IntoIterator<Item = Term>,
{
    let mut merged: BTreeMap<i32, f64> = BTreeMap::new();
    for term in raw {
        *merged.entry(term.exponent).or_insert(0.0) += term.coefficient;
    }

    let terms: Vec<Term> = merged
        .into_iter()
        .filter(|(_, coefficient)| !is_negligible(*coefficient, PRUNE_TOLERANCE))
        .map(|(exponent, coefficient)| Term::new(coefficient, exponent))
        .collect();

    if terms.is_empty() {
        vec![Term::zero()]
    } else {
        terms
    }
}

/// Checks the canonical form invariants without rebuilding the list.
pub fn is_canonical(terms: &[Term]) -> bool {
    if terms == [Term::zero()] {
        return true;
    }
    !terms.is_empty()
        && terms
            .iter()
            .all(|t| !is_negligible(t.coefficient, PRUNE_TOLERANCE))
        && terms.windows(2).all(|w| w[0].exponent < w[1].exponent)
}
