// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::io;
use std::path::PathBuf;

use crate::helpers::telemetry::setup_simple_tracing;
use crate::{arith, demo, eval, load, root, save};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use polyterm_config::{load_config, AppConfig};
use polyterm_polynomial::Polynomial;
use tracing::{info, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "polyterm")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("POLYTERM_GIT_SHA"), ")"))]
#[command(about = "Build, combine, evaluate and persist single-variable polynomials written like `6-2x+5x3`", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `polyterm -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

impl Cli {
    /// Level from the flags, falling back to the configured level and then WARN
    pub fn log_level(&self, config: &AppConfig) -> Result<Level> {
        if self.quiet {
            return Ok(Level::ERROR);
        }
        let level = match self.verbose {
            0 => match config.log_level() {
                Some(level) => level
                    .parse::<Level>()
                    .with_context(|| format!("Unknown log level '{level}' in configuration"))?,
                None => Level::WARN,
            },
            1 => Level::INFO,  // -v
            2 => Level::DEBUG, // -vv
            _ => Level::TRACE, // -vvv
        };
        Ok(level)
    }

    #[instrument(skip_all)]
    pub fn execute(self) -> Result<()> {
        let config = load_config(self.config.clone())?;

        setup_simple_tracing(self.log_level(&config)?);
        info!("Config loaded from: {:?}", config.config_file());

        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self.command {
            Commands::Demo => demo::execute(&config, &mut out)?,
            Commands::Eval { poly, at } => eval::execute(&poly, at, &mut out)?,
            Commands::Root { poly, at } => root::execute(&poly, at, &mut out)?,
            Commands::Add { lhs, rhs } => arith::add(&lhs, &rhs, &mut out)?,
            Commands::Mul { lhs, rhs } => arith::mul(&lhs, &rhs, &mut out)?,
            Commands::Save { poly, out: file } => {
                save::execute(&poly, file.as_deref().unwrap_or(config.output_file()), &mut out)?
            }
            Commands::Load { file } => {
                load::execute(file.as_deref().unwrap_or(config.output_file()), &mut out)?
            }
        }

        Ok(())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk through construction, arithmetic, evaluation and a save/load round trip
    Demo,

    /// Evaluate a polynomial at a point
    Eval {
        /// Polynomial in the textual form, e.g. `6-2x+5x3`
        #[arg(allow_hyphen_values = true)]
        poly: Polynomial,

        /// The point to evaluate at
        #[arg(long, allow_hyphen_values = true)]
        at: f64,
    },

    /// Check whether a point is a root of a polynomial
    Root {
        /// Polynomial in the textual form, e.g. `x2-1`
        #[arg(allow_hyphen_values = true)]
        poly: Polynomial,

        /// The candidate root
        #[arg(long, allow_hyphen_values = true)]
        at: f64,
    },

    /// Add two polynomials
    Add {
        #[arg(allow_hyphen_values = true)]
        lhs: Polynomial,
        #[arg(allow_hyphen_values = true)]
        rhs: Polynomial,
    },

    /// Multiply two polynomials
    Mul {
        #[arg(allow_hyphen_values = true)]
        lhs: Polynomial,
        #[arg(allow_hyphen_values = true)]
        rhs: Polynomial,
    },

    /// Write a polynomial to a file in the textual form
    Save {
        #[arg(allow_hyphen_values = true)]
        poly: Polynomial,

        /// Destination file. Defaults to `output_file` from the config
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Read a polynomial from the first line of a file
    Load {
        /// Source file. Defaults to `output_file` from the config
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyterm_config::load_config_from;

    fn config_with(yaml: &str) -> Result<AppConfig> {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("polyterm.config.yaml");
        std::fs::write(&file, yaml)?;
        load_config_from(dir.path().to_path_buf(), dir.path().to_path_buf(), Some(file))
    }

    #[test]
    fn test_parse_arguments() -> Result<()> {
        let cli = Cli::try_parse_from(["polyterm", "-vv", "eval", "6-2x+5x3", "--at", "3"])?;
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Eval { poly, at } => {
                assert_eq!(poly, Polynomial::parse("6-2x+5x3")?);
                assert_eq!(at, 3.0);
            }
            other => panic!("unexpected command {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_negative_leading_polynomial() -> Result<()> {
        let cli = Cli::try_parse_from(["polyterm", "add", "-x", "-9x4"])?;
        match cli.command {
            Commands::Add { lhs, rhs } => {
                assert_eq!(lhs, Polynomial::parse("-x")?);
                assert_eq!(rhs, Polynomial::parse("-9x4")?);
            }
            other => panic!("unexpected command {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_malformed_polynomial_is_rejected() {
        assert!(Cli::try_parse_from(["polyterm", "eval", "ax2", "--at", "1"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["polyterm", "-q", "-v", "demo"]).is_err());
    }

    #[test]
    fn test_log_level() -> Result<()> {
        let config = AppConfig::default();
        let level = |args: &[&str]| -> Result<Level> {
            Cli::try_parse_from(args)?.log_level(&config)
        };

        assert_eq!(level(&["polyterm", "demo"])?, Level::WARN);
        assert_eq!(level(&["polyterm", "-v", "demo"])?, Level::INFO);
        assert_eq!(level(&["polyterm", "-vv", "demo"])?, Level::DEBUG);
        assert_eq!(level(&["polyterm", "-vvvv", "demo"])?, Level::TRACE);
        assert_eq!(level(&["polyterm", "-q", "demo"])?, Level::ERROR);
        Ok(())
    }

    #[test]
    fn test_log_level_from_config() -> Result<()> {
        let cli = Cli::try_parse_from(["polyterm", "demo"])?;

        let config = config_with("log_level: debug")?;
        assert_eq!(cli.log_level(&config)?, Level::DEBUG);

        let config = config_with("log_level: loud")?;
        assert!(cli.log_level(&config).is_err());
        Ok(())
    }
}
