// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Dense coefficient view used to add polynomials whose exponents are small.
//!
//! The coefficient of `x^i` lives at index `i`. Only canonical term lists whose
//! exponents all fall in `0..=DENSE_EXPONENT_LIMIT` get a dense view.

use crate::canonical::Term;

/// Largest exponent for which a dense view is built.
pub(crate) const DENSE_EXPONENT_LIMIT: i32 = 64;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct DenseCoefficients {
    /// Coefficients in ascending order of degree.
    coefficients: Vec<f64>,
}

impl DenseCoefficients {
    /// Builds a dense view, or `None` if any exponent is negative or above the limit.
    pub(crate) fn from_terms(terms: &[Term]) -> Option<Self> {
        if terms
            .iter()
            .any(|t| t.exponent < 0 || t.exponent > DENSE_EXPONENT_LIMIT)
        {
            return None;
        }

        let len = terms.iter().map(|t| t.exponent as usize + 1).max().unwrap_or(1);
        let mut coefficients = vec![0.0; len];
        for term in terms {
            coefficients[term.exponent as usize] += term.coefficient;
        }
        Some(Self { coefficients })
    }

    /// Adds two dense views coefficient by coefficient.
    pub(crate) fn add(&self, other: &Self) -> Self {
        let max_length = std::cmp::max(self.coefficients.len(), other.coefficients.len());
        let mut result = vec![0.0; max_length];

        for (i, coeff) in self.coefficients.iter().enumerate() {
            result[i] += coeff;
        }
        for (i, coeff) in other.coefficients.iter().enumerate() {
            result[i] += coeff;
        }

        Self {
            coefficients: result,
        }
    }

    /// Raw term list (zeros included) to be canonicalized by the caller.
    pub(crate) fn into_terms(self) -> impl Iterator<Item = Term> {
        self.coefficients
            .into_iter()
            .enumerate()
            .map(|(i, coefficient)| Term::new(coefficient, i as i32))
    }
}
