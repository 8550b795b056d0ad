// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use polyterm_polynomial::Polynomial;
use std::io::Write;

pub fn execute(poly: &Polynomial, at: f64, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", poly.has_root(at))?;
    Ok(())
}
