// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Rendering terms into the dense textual form read back by [`crate::parser`].

use crate::canonical::Term;
use crate::parser::VARIABLE;

/// Renders terms, in the order given, as a single line.
///
/// Non-negative terms after the first get a `+` separator; negative ones rely
/// on the `-` of their own formatting. `f64` `Display` never switches to
/// exponent notation, so the output stays inside the parser's grammar.
pub fn render_terms(terms: &[Term]) -> String {
    let mut out = String::new();
    for (i, term) in terms.iter().enumerate() {
        if i > 0 && term.coefficient >= 0.0 {
            out.push('+');
        }
        render_term(&mut out, term);
    }
    out
}

fn render_term(out: &mut String, term: &Term) {
    let Term {
        coefficient,
        exponent,
    } = *term;

    if exponent == 0 {
        out.push_str(&coefficient.to_string());
        return;
    }

    if coefficient == 1.0 {
        out.push(VARIABLE);
    } else if coefficient == -1.0 {
        out.push('-');
        out.push(VARIABLE);
    } else {
        out.push_str(&coefficient.to_string());
        out.push(VARIABLE);
    }

    if exponent != 1 {
        out.push_str(&exponent.to_string());
    }
}
