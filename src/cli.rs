use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::config::BuildConfig;
use crate::error::TypingsResult;
use crate::typings::{write_declaration_stub, write_declaration_stub_in_current_dir};

#[derive(Subcommand)]
#[command(version, about, long_about = None)]
pub enum Commands {
    /// Write dist/@polygonjs/vue3.common.d.ts (default)
    Stub {
        /// Working directory, defaults to the current directory
        #[clap(short, long)]
        dir: Option<PathBuf>,
    },

    /// Print the build tool configuration as JSON
    BuildConfig,
}

/// vue3-typings Command
#[derive(Parser)]
#[command(version, about = "Post-build typings for @polygonjs/vue3")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

pub fn stub_command(dir: Option<PathBuf>) -> TypingsResult<()> {
    let target = match dir {
        Some(dir) => write_declaration_stub(&dir)?,
        None => write_declaration_stub_in_current_dir()?,
    };
    debug!("Stub command finished: {:?}", target);
    Ok(())
}

pub fn build_config_command() -> TypingsResult<()> {
    println!("{}", BuildConfig::default().to_json()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_parses() {
        let cli = Cli::try_parse_from(["vue3-typings"]).unwrap();
        assert!(cli.cmd.is_none());
    }

    #[test]
    fn test_stub_with_dir() {
        let cli = Cli::try_parse_from(["vue3-typings", "stub", "--dir", "/tmp/proj"]).unwrap();
        match cli.cmd {
            Some(Commands::Stub { dir }) => assert_eq!(dir, Some(PathBuf::from("/tmp/proj"))),
            _ => panic!("expected stub command"),
        }
    }

    #[test]
    fn test_build_config_subcommand() {
        let cli = Cli::try_parse_from(["vue3-typings", "build-config"]).unwrap();
        assert!(matches!(cli.cmd, Some(Commands::BuildConfig)));
    }

    #[test]
    fn test_unknown_argument_rejected() {
        assert!(Cli::try_parse_from(["vue3-typings", "--bogus"]).is_err());
    }
}
