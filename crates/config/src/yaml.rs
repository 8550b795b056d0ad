// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use std::path::Path;

/// Read a yaml file and substitute `${VAR}` references from the environment
pub fn load_yaml_with_env(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)?;
    let expanded = shellexpand::env(&content)?;
    Ok(expanded.into_owned())
}
