// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Splitting a line of text into signed term tokens.

/// Splits one line of polynomial text into term tokens.
///
/// Each token carries its own sign and is later classified by the parser.
pub trait Tokenizer {
    fn split_terms(&self, line: &str) -> Vec<String>;
}

/// The `+`/`-` rewrite grammar.
///
/// Every `-` becomes `+-`, one leading `+` is dropped and the result is split
/// on `+`. Whitespace around a segment and between a `-` sign and the rest of
/// its term is dropped. Empty segments are skipped, so `-` only ever acts as a
/// sign on the term that follows it. Exponential notation such as `1e-5` is
/// therefore not expressible.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignRewrite;

impl Tokenizer for SignRewrite {
    fn split_terms(&self, line: &str) -> Vec<String> {
        let rewritten = line.replace('-', "+-");
        let rewritten = rewritten.strip_prefix('+').unwrap_or(&rewritten);

        rewritten
            .split('+')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.strip_prefix('-') {
                Some(rest) => format!("-{}", rest.trim_start()),
                None => segment.to_string(),
            })
            .collect()
    }
}
