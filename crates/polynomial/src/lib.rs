// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Polynomial Library
//!
//! Single-variable polynomials with `f64` coefficients and integer exponents,
//! stored as a sparse, always-canonical list of terms.
//!
//! ## Features
//!
//! - Canonical form: distinct ascending exponents, negligible coefficients
//!   dropped, zero polynomial as the single term `(0.0, 0)`.
//! - Arithmetic: addition, subtraction, negation, multiplication, evaluation
//!   and approximate root testing.
//! - Text: a dense one-line form (`6-2x+5x3`) that parses back to the same
//!   polynomial, plus a diagnostic `Display` form (`6x^0 + -2x^1 + 5x^3`).
//! - I/O: single-line reads and writes over any `BufRead`/`Write`, and file
//!   load/save helpers.
//! - Serialization: optional serde support.
//!
//! ## Example
//!
//! ```
//! use polyterm_polynomial::Polynomial;
//!
//! let p = Polynomial::from_parts(&[6.0, -2.0, 5.0], &[0, 1, 3]).unwrap();
//! assert_eq!(p.evaluate(3.0), 135.0);
//! assert_eq!(p.render(), "6-2x+5x3");
//! assert_eq!(Polynomial::parse("6-2x+5x3").unwrap(), p);
//! ```

pub mod canonical;
mod dense;
pub mod errors;
pub mod io;
pub mod parser;
pub mod polynomial;
pub mod render;
pub mod tokenizer;
pub mod utils;

pub use canonical::{canonicalize, Term};
pub use errors::{PolynomialError, TokenKind};
pub use polynomial::Polynomial;
pub use tokenizer::{SignRewrite, Tokenizer};
pub use utils::*;
