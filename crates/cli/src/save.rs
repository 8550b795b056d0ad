// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use polyterm_polynomial::Polynomial;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn execute(poly: &Polynomial, file: &Path, out: &mut impl Write) -> Result<()> {
    poly.save(file)
        .with_context(|| format!("Error writing polynomial to {}", file.display()))?;
    info!(file = %file.display(), "Polynomial saved");
    writeln!(out, "Saved {} to file: {}", poly.render(), file.display())?;
    Ok(())
}
