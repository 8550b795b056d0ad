// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::load_config::{find_in_parent, resolve_config_path, ConfigLocation, DEFAULT_CONFIG_NAME};
use crate::yaml::load_yaml_with_env;
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Prefix of environment variables overriding configuration values, e.g. `POLYTERM_SAMPLE_POINT`
pub const ENV_PREFIX: &str = "POLYTERM_";

/// Settings for the polyterm command line
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    /// File the demo and `save` write the textual form to
    output_file: PathBuf,
    /// Point the demo evaluates the sum at
    sample_point: f64,
    /// Point the demo checks for a root
    root_point: f64,
    /// Default log level when no `-v`/`-q` flag is given
    log_level: Option<String>,
    /// The config file these settings were read from, if any
    #[serde(skip)]
    config_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_file: PathBuf::from("poly_output.txt"),
            sample_point: 0.1,
            root_point: 1.0,
            log_level: None,
            config_file: None,
        }
    }
}

impl AppConfig {
    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    pub fn sample_point(&self) -> f64 {
        self.sample_point
    }

    pub fn root_point(&self) -> f64 {
        self.root_point
    }

    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }
}

/// Load the config at the config_file or the default location if not provided
pub fn load_config(config_file: Option<PathBuf>) -> Result<AppConfig> {
    load_config_from(env::current_dir()?, OsDirs::config_dir(), config_file)
}

/// Load the config resolving relative paths against `cwd`
pub fn load_config_from(
    cwd: PathBuf,
    default_config_dir: PathBuf,
    config_file: Option<PathBuf>,
) -> Result<AppConfig> {
    let location = resolve_config_path(
        find_in_parent,      // finding strategy
        cwd,                 // cwd
        default_config_dir,  // default config folder
        DEFAULT_CONFIG_NAME, // polyterm.config.yaml
        config_file,         // config file passed on the command line
    );

    let loaded_yaml = match &location {
        ConfigLocation::Default(path) if !path.exists() => None,
        location => Some(
            load_yaml_with_env(location.path()).context("Configuration file not found")?,
        ),
    };

    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
    if let Some(yaml) = &loaded_yaml {
        figment = figment.merge(Yaml::string(yaml));
    }

    let mut config: AppConfig = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .context("Could not parse configuration")?;

    if loaded_yaml.is_some() {
        config.config_file = Some(location.path().to_path_buf());
    }
    debug!(config_file = ?config.config_file, "Configuration loaded");

    Ok(config)
}

pub struct OsDirs;
impl OsDirs {
    /// Platform config folder, falling back to the working directory
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("polyterm"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use figment::Jail;

    #[test]
    fn test_deserialization() -> Result<()> {
        let config_str = r#"
output_file: "/tmp/out.txt"
sample_point: 0.5
root_point: -2
log_level: "debug"
"#;
        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Yaml::string(config_str))
            .extract()?;

        assert_eq!(config.output_file(), Path::new("/tmp/out.txt"));
        assert_eq!(config.sample_point(), 0.5);
        assert_eq!(config.root_point(), -2.0);
        assert_eq!(config.log_level(), Some("debug"));
        assert_eq!(config.config_file(), None);
        Ok(())
    }

    #[test]
    fn test_defaults_without_file() {
        Jail::expect_with(|jail| {
            let cwd = jail.directory().to_path_buf();
            let config = load_config_from(cwd.clone(), cwd.join("config"), None)
                .map_err(|e| e.to_string())?;

            assert_eq!(config.output_file(), Path::new("poly_output.txt"));
            assert_eq!(config.sample_point(), 0.1);
            assert_eq!(config.root_point(), 1.0);
            assert_eq!(config.log_level(), None);
            assert_eq!(config.config_file(), None);
            Ok(())
        });
    }

    #[test]
    fn test_config_found_in_parent() {
        Jail::expect_with(|jail| {
            jail.create_dir("nested/deeper")?;
            jail.create_file(
                DEFAULT_CONFIG_NAME,
                r#"
output_file: "saved.txt"
sample_point: 3
"#,
            )?;

            let root = jail.directory().to_path_buf();
            let config = load_config_from(root.join("nested/deeper"), root.join("config"), None)
                .map_err(|e| e.to_string())?;

            assert_eq!(config.output_file(), Path::new("saved.txt"));
            assert_eq!(config.sample_point(), 3.0);
            assert_eq!(config.root_point(), 1.0);
            assert_eq!(config.config_file(), Some(root.join(DEFAULT_CONFIG_NAME).as_path()));
            Ok(())
        });
    }

    #[test]
    fn test_config_env_vars() {
        Jail::expect_with(|jail| {
            jail.set_env("POLYTERM_ROOT_POINT", "-2");
            jail.set_env("TEST_OUTPUT_DIR", "/data");
            jail.create_file(
                "custom.yaml",
                r#"
output_file: "${TEST_OUTPUT_DIR}/poly.txt"
root_point: 5
"#,
            )?;

            let cwd = jail.directory().to_path_buf();
            let config = load_config_from(
                cwd.clone(),
                cwd.join("config"),
                Some(PathBuf::from("custom.yaml")),
            )
            .map_err(|e| e.to_string())?;

            // ${VAR} references are substituted and POLYTERM_ variables win over the file
            assert_eq!(config.output_file(), Path::new("/data/poly.txt"));
            assert_eq!(config.root_point(), -2.0);
            assert_eq!(config.config_file(), Some(cwd.join("custom.yaml").as_path()));
            Ok(())
        });
    }

    #[test]
    fn test_file_not_found() -> Result<()> {
        let Err(err) = load_config(Some(PathBuf::from("/nope/polyterm.config.yaml"))) else {
            bail!("error expected");
        };
        let Some(e) = err.downcast_ref::<std::io::Error>() else {
            bail!("io error expected");
        };

        assert_eq!(e.kind(), std::io::ErrorKind::NotFound);

        Ok(())
    }
}
