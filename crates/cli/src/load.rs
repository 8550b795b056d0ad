// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use polyterm_polynomial::Polynomial;
use std::io::Write;
use std::path::Path;

pub fn execute(file: &Path, out: &mut impl Write) -> Result<()> {
    let poly = Polynomial::load(file)
        .with_context(|| format!("Error reading polynomial from {}", file.display()))?;
    writeln!(out, "p(x) = {poly}")?;
    writeln!(out, "{}", poly.render())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save;
    use polyterm_polynomial::PolynomialError;

    #[test]
    fn test_save_then_load() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("poly.txt");

        let mut out = Vec::new();
        save::execute(&Polynomial::parse("-x+2x3")?, &file, &mut out)?;
        execute(&file, &mut out)?;

        assert_eq!(
            String::from_utf8(out)?,
            format!(
                "Saved -x+2x3 to file: {}\np(x) = -1x^1 + 2x^3\n-x+2x3\n",
                file.display()
            )
        );
        Ok(())
    }

    #[test]
    fn test_load_missing_file_keeps_io_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let err = execute(&dir.path().join("missing.txt"), &mut Vec::new())
            .err()
            .context("error expected")?;

        assert!(matches!(
            err.downcast_ref::<PolynomialError>(),
            Some(PolynomialError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound
        ));
        Ok(())
    }
}
