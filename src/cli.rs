use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::pipeline::Passes;

/// drawable-wrap - Rename drawable assets and generate bitmap wrappers
#[derive(Parser)]
#[command(name = "drawable-wrap")]
#[command(about = "Rename Android drawable assets and generate <bitmap> wrappers for them")]
#[command(version)]
pub struct Cli {
    /// Resource root to scan (default: current directory)
    #[arg(short, long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Conventions file (JSON) overriding the default naming conventions
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dry-run mode: log every rename and write without touching the tree
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Print the run summary as JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rename assets, then generate wrappers (default)
    Run,
    /// Append the alpha marker to prefixed assets only
    Rename,
    /// Generate bitmap wrappers only
    Generate,
    /// Validate a conventions file
    Validate {
        /// Path to conventions file to validate
        file: PathBuf,
    },
    /// Write the default conventions to a file
    InitConfig {
        /// Destination path
        file: PathBuf,
    },
}

impl Commands {
    /// The passes this command runs, if it runs any
    pub fn passes(&self) -> Option<Passes> {
        match self {
            Self::Run => Some(Passes::All),
            Self::Rename => Some(Passes::Rename),
            Self::Generate => Some(Passes::Generate),
            Self::Validate { .. } | Self::InitConfig { .. } => None,
        }
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_args() {
        // No args runs both passes in the working directory
        let cli = Cli::try_parse_from(["drawable-wrap"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.root, PathBuf::from("."));
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_cli_generate_with_global_flags() {
        let cli = Cli::try_parse_from([
            "drawable-wrap",
            "generate",
            "--root",
            "app/src/main/res",
            "--dry-run",
        ])
        .unwrap();
        assert!(cli.dry_run);
        assert_eq!(cli.root, PathBuf::from("app/src/main/res"));
        assert_eq!(cli.command.unwrap().passes(), Some(Passes::Generate));
    }

    #[test]
    fn test_cli_validate_command() {
        let cli = Cli::try_parse_from(["drawable-wrap", "validate", "conventions.json"]).unwrap();
        match cli.command {
            Some(Commands::Validate { file }) => {
                assert_eq!(file, PathBuf::from("conventions.json"));
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["drawable-wrap", "shrink"]).is_err());
    }
}
