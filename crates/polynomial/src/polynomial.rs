// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomial arithmetic implementation.

use crate::canonical::{canonicalize, Term};
use crate::dense::DenseCoefficients;
use crate::errors::PolynomialError;
use crate::io::{read_first_line, write_text};
use crate::parser::parse_terms;
use crate::render::render_terms;
use crate::tokenizer::{SignRewrite, Tokenizer};
use crate::utils::{is_negligible, ROOT_TOLERANCE};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::ops;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single-variable polynomial stored as a sparse list of terms.
///
/// The term list is always canonical: exponents are distinct and ascending,
/// no coefficient is below [`crate::PRUNE_TOLERANCE`] in magnitude, and the
/// zero polynomial is the single term `(0.0, 0)`. Every constructor and
/// operation returns a new, canonical instance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Term>", into = "Vec<Term>"))]
pub struct Polynomial {
    /// Canonical terms in ascending order of exponent.
    pub(crate) terms: Vec<Term>,
}

/// Diagnostic rendering, e.g. `6x^0 + -2x^1 + 5x^3`.
///
/// Use [`Polynomial::render`] for the form that parses back.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}x^{}", term.coefficient, term.exponent)?;
        }
        Ok(())
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::new()
    }
}

impl Polynomial {
    /// Creates the zero polynomial.
    pub fn new() -> Self {
        Self {
            terms: vec![Term::zero()],
        }
    }

    /// Creates a polynomial from paired coefficient and exponent slices.
    ///
    /// Pairs are taken elementwise; repeated exponents are merged and
    /// negligible coefficients dropped.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - Coefficient of each term.
    /// * `exponents` - Exponent of each term.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::InvalidArgument` if the slices differ in length.
    pub fn from_parts(coefficients: &[f64], exponents: &[i32]) -> Result<Self, PolynomialError> {
        if coefficients.len() != exponents.len() {
            return Err(PolynomialError::InvalidArgument {
                coefficients: coefficients.len(),
                exponents: exponents.len(),
            });
        }

        Ok(Self::from_terms(
            coefficients
                .iter()
                .zip(exponents)
                .map(|(&c, &e)| Term::new(c, e)),
        ))
    }

    /// Creates a polynomial from raw terms in any order.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = Term>,
    {
        Self {
            terms: canonicalize(terms),
        }
    }

    /// Parses the first line of `text` in the dense textual form.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::ParseError` on a malformed coefficient or exponent.
    pub fn parse(text: &str) -> Result<Self, PolynomialError> {
        Self::parse_with(text, &SignRewrite)
    }

    /// Parses `text` with a custom tokenizer.
    pub fn parse_with<T: Tokenizer>(text: &str, tokenizer: &T) -> Result<Self, PolynomialError> {
        Ok(Self::from_terms(parse_terms(text, tokenizer)?))
    }

    /// Renders the dense textual form, e.g. `6-2x+5x3`.
    ///
    /// Parsing the output yields an equal polynomial as long as no exponent is
    /// negative.
    pub fn render(&self) -> String {
        render_terms(&self.terms)
    }

    /// Returns the canonical terms.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the coefficients in ascending order of exponent.
    pub fn coefficients(&self) -> Vec<f64> {
        self.terms.iter().map(|t| t.coefficient).collect()
    }

    /// Returns the exponents in ascending order.
    pub fn exponents(&self) -> Vec<i32> {
        self.terms.iter().map(|t| t.exponent).collect()
    }

    /// Returns the coefficient of `x^exponent`, or `0.0` if there is no such term.
    pub fn coefficient(&self, exponent: i32) -> f64 {
        self.terms
            .binary_search_by_key(&exponent, |t| t.exponent)
            .map(|i| self.terms[i].coefficient)
            .unwrap_or(0.0)
    }

    /// Returns the largest exponent. The degree of the zero polynomial is 0.
    pub fn degree(&self) -> i32 {
        self.terms.last().map(|t| t.exponent).unwrap_or(0)
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.terms == [Term::zero()]
    }

    /// Adds two polynomials together.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to add to `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the sum of the two polynomials.
    pub fn add(&self, other: &Self) -> Self {
        if let (Some(lhs), Some(rhs)) = (
            DenseCoefficients::from_terms(&self.terms),
            DenseCoefficients::from_terms(&other.terms),
        ) {
            return Self::from_terms(lhs.add(&rhs).into_terms());
        }

        Self::from_terms(self.terms.iter().chain(&other.terms).copied())
    }

    /// Subtracts one polynomial from another.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Negates all coefficients of the polynomial.
    pub fn neg(&self) -> Self {
        Self::from_terms(
            self.terms
                .iter()
                .map(|t| Term::new(-t.coefficient, t.exponent)),
        )
    }

    /// Multiplies two polynomials term by term.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to multiply with `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the product.
    ///
    /// Exponent sums wrap around on `i32` overflow.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut product = Vec::with_capacity(self.terms.len() * other.terms.len());

        for lhs in &self.terms {
            for rhs in &other.terms {
                product.push(Term::new(
                    lhs.coefficient * rhs.coefficient,
                    lhs.exponent.wrapping_add(rhs.exponent),
                ));
            }
        }

        Self::from_terms(product)
    }

    /// Evaluates the polynomial at a given point.
    ///
    /// Sums `c * x^e` over the terms in ascending order of exponent. `x^0` is
    /// 1 for every `x`, including 0.
    ///
    /// # Arguments
    ///
    /// * `x` - The point at which to evaluate the polynomial.
    ///
    /// # Returns
    ///
    /// The value of the polynomial at the given point.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms
            .iter()
            .fold(0.0, |acc, t| acc + t.coefficient * x.powi(t.exponent))
    }

    /// Checks whether `x` is a root, i.e. `|p(x)| < 1e-9`.
    pub fn has_root(&self, x: f64) -> bool {
        is_negligible(self.evaluate(x), ROOT_TOLERANCE)
    }

    /// Reads a polynomial from the first line of `reader`.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::IoError` if reading fails and
    /// `PolynomialError::ParseError` if the line is malformed.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self, PolynomialError> {
        let line = read_first_line(reader)?;
        Self::parse(&line)
    }

    /// Writes the dense textual form to `writer`.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), PolynomialError> {
        write_text(writer, &self.render())
    }

    /// Loads a polynomial from the first line of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::IoError` if the file cannot be opened or read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PolynomialError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let poly = Self::read_from(BufReader::new(file))?;
        debug!(path = %path.display(), terms = poly.terms.len(), "Loaded polynomial");
        Ok(poly)
    }

    /// Saves the dense textual form to the file at `path`, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::IoError` if the file cannot be created or written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PolynomialError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))?;
        debug!(path = %path.display(), terms = self.terms.len(), "Saved polynomial");
        Ok(())
    }
}

impl FromStr for Polynomial {
    type Err = PolynomialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Vec<Term>> for Polynomial {
    fn from(terms: Vec<Term>) -> Self {
        Self::from_terms(terms)
    }
}

impl From<Polynomial> for Vec<Term> {
    fn from(poly: Polynomial) -> Self {
        poly.terms
    }
}

impl ops::Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Polynomial {
        Polynomial::add(self, rhs)
    }
}

impl ops::Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Polynomial {
        Polynomial::sub(self, rhs)
    }
}

impl ops::Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Polynomial {
        self.multiply(rhs)
    }
}

impl ops::Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(self)
    }
}
