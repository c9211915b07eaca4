//! CLI argument definitions.
//!
//! All arguments are defined with clap's derive macros on the [`Cli`]
//! struct; the tool has a single command surface.

use clap::Parser;
use std::path::PathBuf;

use crate::manifest::Specifier;

/// Create a requirements.txt file from a project directory.
#[derive(Debug, Parser)]
#[command(name = "reqscan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the project directory ("." for the current directory)
    pub path: PathBuf,

    /// Version specifier used in manifest lines
    #[arg(short, long, value_enum, default_value_t = Specifier::GreaterEq)]
    pub specifier: Specifier,

    /// Emit package names without their versions
    #[arg(short = 'n', long, alias = "nv")]
    pub no_version: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["reqscan", "."]).unwrap();
        assert_eq!(cli.path, PathBuf::from("."));
        assert_eq!(cli.specifier, Specifier::GreaterEq);
        assert!(!cli.no_version);
        assert!(!cli.debug);
    }

    #[test]
    fn specifier_accepts_literal_tokens() {
        let cli = Cli::try_parse_from(["reqscan", "-s", "==", "proj"]).unwrap();
        assert_eq!(cli.specifier, Specifier::Exact);

        let cli = Cli::try_parse_from(["reqscan", "--specifier", "~=", "proj"]).unwrap();
        assert_eq!(cli.specifier, Specifier::Compatible);
    }

    #[test]
    fn specifier_rejects_unknown_tokens() {
        assert!(Cli::try_parse_from(["reqscan", "-s", "<=", "proj"]).is_err());
        assert!(Cli::try_parse_from(["reqscan", "-s", "latest", "proj"]).is_err());
    }

    #[test]
    fn no_version_flag_spellings() {
        for flag in ["-n", "--no-version", "--nv"] {
            let cli = Cli::try_parse_from(["reqscan", flag, "proj"]).unwrap();
            assert!(cli.no_version, "flag {flag} not recognized");
        }
    }

    #[test]
    fn path_is_required() {
        assert!(Cli::try_parse_from(["reqscan"]).is_err());
    }
}
