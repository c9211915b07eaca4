//! Scan pipeline orchestration.
//!
//! [`run`] wires the stages together: discover sources, extract and filter
//! candidates, resolve versions, and hand back a [`ScanReport`] ready to be
//! written out. Options are threaded explicitly; nothing reads argument
//! state ambiently.

pub mod discovery;
pub mod imports;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{ReqscanError, Result};
use crate::manifest::{Manifest, Specifier};
use crate::python::{self, stdlib::StdlibIndex};
use crate::resolve;

/// Caller-selected knobs for a scan.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    /// Token used between name and version in manifest lines.
    pub specifier: Specifier,
    /// Skip version resolution and emit bare names.
    pub no_version: bool,
}

/// Everything a completed scan produced.
#[derive(Debug)]
pub struct ScanReport {
    /// Resolved requirements in first-resolution order.
    pub manifest: Manifest,
    /// Candidates that resolved via neither strategy; advisory only.
    pub not_found: Vec<String>,
    /// Number of source files discovered.
    pub files_scanned: usize,
}

/// Run the full scan pipeline over a project directory.
///
/// The only fatal condition is the root precondition: `root` must exist
/// and be a directory. Everything downstream degrades to warnings.
pub fn run(root: &Path, options: &ScanOptions) -> Result<ScanReport> {
    if !root.exists() {
        return Err(ReqscanError::ProjectDirNotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(ReqscanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let python = python::locate_interpreter();
    if python.is_none() {
        tracing::warn!("no Python interpreter found on PATH");
    }
    let version = python.as_deref().and_then(python::interpreter_version);
    let stdlib = StdlibIndex::with_fallback(version);
    tracing::debug!(
        "filtering against the Python {} standard library",
        stdlib.version()
    );

    let tree = discovery::discover(root);
    let candidates = collect_candidates(&tree, &stdlib);
    tracing::debug!("{} external import candidate(s)", candidates.len());

    let (manifest, not_found) = if options.no_version {
        let mut manifest = Manifest::new();
        for name in &candidates {
            manifest.insert(name.clone(), "");
        }
        (manifest, Vec::new())
    } else if candidates.is_empty() {
        (Manifest::new(), Vec::new())
    } else {
        let resolver = resolve::select_resolver(python.as_deref());
        tracing::debug!("resolving versions via {}", resolver.describe());
        resolve::resolve_all(&candidates, resolver.as_ref())
    };

    report_not_found(&not_found);

    Ok(ScanReport {
        manifest,
        not_found,
        files_scanned: tree.files.len(),
    })
}

/// Extract, normalize, and filter candidates from every discovered file.
///
/// Order follows first appearance; local modules, standard-library
/// modules, and repeats are dropped.
fn collect_candidates(tree: &discovery::SourceTree, stdlib: &StdlibIndex) -> Vec<String> {
    let mut accepted = Vec::new();
    let mut seen = HashSet::new();

    for file in &tree.files {
        let content = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("skipping {}: {err}", file.display());
                continue;
            }
        };
        for candidate in imports::candidates_in_source(&content) {
            if tree.local_modules.contains(&candidate)
                || stdlib.contains(&candidate)
                || seen.contains(&candidate)
            {
                continue;
            }
            seen.insert(candidate.clone());
            accepted.push(candidate);
        }
    }
    accepted
}

/// Log the closing advisory for names that never resolved.
fn report_not_found(not_found: &[String]) {
    if not_found.is_empty() {
        return;
    }
    tracing::warn!("Could not find:");
    for name in not_found {
        tracing::warn!("    - {name}");
    }
    tracing::warn!(
        "The name to import a package and the name to install it can differ; \
         add these to the requirements file manually."
    );
}
