// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use polyterm_config::AppConfig;
use polyterm_polynomial::Polynomial;
use std::io::Write;
use tracing::{info, instrument};

#[instrument(skip_all)]
pub fn execute(config: &AppConfig, out: &mut impl Write) -> Result<()> {
    let p = Polynomial::new();
    writeln!(out, "p(x) = {p}")?;
    writeln!(out, "p(3) = {}", p.evaluate(3.0))?;

    let p1 = Polynomial::from_parts(&[6.0, -2.0, 5.0], &[0, 1, 3])?;
    writeln!(out, "p1(x) = {p1}")?;

    let p2 = Polynomial::from_parts(&[1.0, -9.0], &[1, 4])?;
    writeln!(out, "p2(x) = {p2}")?;

    let sum = p1.add(&p2);
    writeln!(out, "p1 + p2 = {sum}")?;

    let product = p1.multiply(&p2);
    writeln!(out, "p1 * p2 = {product}")?;

    let x = config.sample_point();
    writeln!(out, "(p1 + p2)({x}) = {}", sum.evaluate(x))?;

    let root = config.root_point();
    writeln!(
        out,
        "Does p1 + p2 have root at x={root}? {}",
        sum.has_root(root)
    )?;

    let file = config.output_file();
    sum.save(file)
        .with_context(|| format!("Error writing file {}", file.display()))?;
    info!(file = %file.display(), "Saved p1 + p2");
    writeln!(out, "Saved (p1+p2) to file: {}", file.display())?;

    let from_file = Polynomial::load(file)
        .with_context(|| format!("Error reading file {}", file.display()))?;
    writeln!(out, "Polynomial read from file: {from_file}")?;

    Ok(())
}
