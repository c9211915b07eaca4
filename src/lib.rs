//! reqscan - requirements.txt generation for Python projects.
//!
//! reqscan scans a project directory's Python sources for import
//! statements, filters out local and standard-library modules, resolves
//! installed versions from the local environment, and writes a
//! `requirements.txt` manifest at the project root.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Requirement collection and manifest rendering
//! - [`python`] - Interpreter discovery and standard-library reference lists
//! - [`resolve`] - Installed-package version resolution strategies
//! - [`scan`] - Source discovery, import extraction, and pipeline orchestration
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use reqscan::manifest::Specifier;
//! use reqscan::scan::{self, ScanOptions};
//!
//! let options = ScanOptions {
//!     specifier: Specifier::GreaterEq,
//!     no_version: false,
//! };
//! let report = scan::run(Path::new("."), &options)?;
//! print!("{}", report.manifest.render(options.specifier, true));
//! # Ok::<(), reqscan::ReqscanError>(())
//! ```

pub mod cli;
pub mod error;
pub mod manifest;
pub mod python;
pub mod resolve;
pub mod scan;

pub use error::{ReqscanError, Result};
