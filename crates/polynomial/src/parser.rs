// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Parsing the dense textual form, e.g. `6-2x+5x3`.
//!
//! A term without `x` is a constant. A term with `x` is split at the marker
//! into an optional coefficient prefix (`""`/`"+"` mean 1, `"-"` means -1)
//! and an optional integer exponent suffix (`""` means 1).

use crate::canonical::Term;
use crate::errors::{PolynomialError, TokenKind};
use crate::tokenizer::Tokenizer;
use tracing::trace;

/// The variable marker.
pub const VARIABLE: char = 'x';

/// Parses the first line of `text` into raw, uncanonicalized terms.
///
/// # Arguments
///
/// * `text` - Polynomial text. Anything after the first line break is ignored.
/// * `tokenizer` - Splits the line into signed term tokens.
///
/// # Errors
///
/// Returns `PolynomialError::ParseError` on the first malformed numeric token.
pub fn parse_terms<T: Tokenizer>(text: &str, tokenizer: &T) -> Result<Vec<Term>, PolynomialError> {
    let line = first_line(text);
    let terms = tokenizer
        .split_terms(line)
        .iter()
        .map(|token| parse_term(token))
        .collect::<Result<Vec<_>, _>>()?;
    trace!(line, terms = terms.len(), "Parsed polynomial text");
    Ok(terms)
}

/// Parses a single signed term token such as `-9x4`, `x` or `2.5`.
pub fn parse_term(token: &str) -> Result<Term, PolynomialError> {
    let Some((prefix, suffix)) = token.split_once(VARIABLE) else {
        let constant = parse_real(token, TokenKind::Constant)?;
        return Ok(Term::new(constant, 0));
    };

    if suffix.contains(VARIABLE) {
        return Err(PolynomialError::parse(token, TokenKind::Marker));
    }

    let coefficient = match prefix.trim() {
        "" | "+" => 1.0,
        "-" => -1.0,
        other => parse_real(other, TokenKind::Coefficient)?,
    };

    let exponent = match suffix.trim() {
        "" => 1,
        other => other
            .parse::<i32>()
            .map_err(|_| PolynomialError::parse(other, TokenKind::Exponent))?,
    };

    Ok(Term::new(coefficient, exponent))
}

fn parse_real(token: &str, kind: TokenKind) -> Result<f64, PolynomialError> {
    let token = token.trim();
    token
        .parse::<f64>()
        .map_err(|_| PolynomialError::parse(token, kind))
}

fn first_line(text: &str) -> &str {
    let line = text.lines().next().unwrap_or("");
    line.strip_suffix('\r').unwrap_or(line)
}
