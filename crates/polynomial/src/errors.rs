// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for polynomial operations.

use std::fmt;
use thiserror::Error;

/// The part of a textual term a malformed token was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Prefix before the `x` marker.
    Coefficient,
    /// Suffix after the `x` marker.
    Exponent,
    /// A term without any `x` marker.
    Constant,
    /// A term carrying more than one `x` marker.
    Marker,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Coefficient => "coefficient",
            TokenKind::Exponent => "exponent",
            TokenKind::Constant => "constant",
            TokenKind::Marker => "variable marker",
        };
        write!(f, "{name}")
    }
}

/// Errors that can occur during polynomial operations.
#[derive(Debug, Error)]
pub enum PolynomialError {
    /// Coefficient and exponent sequences of different lengths
    #[error(
        "Invalid argument: {coefficients} coefficients but {exponents} exponents, lengths must match"
    )]
    InvalidArgument {
        coefficients: usize,
        exponents: usize,
    },

    /// Malformed numeric token in the textual grammar
    #[error("Parse error: invalid {kind} '{token}'")]
    ParseError { token: String, kind: TokenKind },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PolynomialError {
    pub(crate) fn parse(token: &str, kind: TokenKind) -> Self {
        PolynomialError::ParseError {
            token: token.to_string(),
            kind,
        }
    }
}
