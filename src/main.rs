//! reqscan CLI entry point.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use reqscan::cli::Cli;
use reqscan::scan::{self, ScanOptions};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("reqscan=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reqscan=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("reqscan starting with args: {:?}", cli);

    // "." scans the current working directory.
    let root = if cli.path == Path::new(".") {
        std::env::current_dir().unwrap_or_else(|_| cli.path.clone())
    } else {
        cli.path.clone()
    };

    let options = ScanOptions {
        specifier: cli.specifier,
        no_version: cli.no_version,
    };

    match generate(&cli.path, &root, &options) {
        Ok(manifest_path) => {
            println!("\nCreated file:\n    {}\n", manifest_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Scan `root` and write the manifest under the user-supplied path.
fn generate(supplied: &Path, root: &Path, options: &ScanOptions) -> reqscan::Result<PathBuf> {
    let report = scan::run(root, options)?;
    tracing::debug!("scanned {} file(s)", report.files_scanned);

    let manifest_path = supplied.join("requirements.txt");
    report
        .manifest
        .write(&manifest_path, options.specifier, !options.no_version)?;
    Ok(manifest_path)
}
